use crate::geometry::Vector;

/// TileId identifies a tile across relocations and merges so that observers
/// can track a single on-screen entity over its lifetime.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TileId(pub(crate) u64);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tile#{0}", self.0)
    }
}

/// A slidy numbered thing.
///
/// Tiles are plain values held in the board's cells; the board is the sole
/// authority on where a tile lives and emits the change notifications for
/// every mutation it performs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tile {
    id: TileId,
    pos: Vector,
    value: u32,
}

impl Tile {
    pub(crate) fn new(id: TileId, pos: Vector, value: u32) -> Self {
        debug_assert!(value > 0, "tile value must be positive");
        Self { id, pos, value }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn position(&self) -> Vector {
        self.pos
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// The one and only mergeability test. Deliberately not `==`: structural
    /// equality would also compare position and identity, and value-equality
    /// as `==` invites accidental comparison against an empty cell.
    pub fn same_value(&self, other: &Tile) -> bool {
        self.value == other.value
    }

    /// This tile incorporates the value of the other tile. The other tile
    /// has been absorbed and must not be referenced again.
    pub(crate) fn absorb(&mut self, other: Tile) {
        self.value += other.value;
    }

    pub(crate) fn relocate(&mut self, new_pos: Vector) {
        self.pos = new_pos;
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}[{1}]:{2}", self.id, self.pos, self.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tile(id: u64, row: i32, col: i32, value: u32) -> Tile {
        Tile::new(TileId(id), Vector::new(row, col), value)
    }

    #[test]
    fn same_value_ignores_position_and_identity() {
        let a = tile(1, 0, 0, 4);
        let b = tile(2, 3, 1, 4);
        let c = tile(3, 0, 0, 8);
        assert!(a.same_value(&b));
        assert!(!a.same_value(&c));
    }

    #[test]
    fn absorb_sums_values() {
        let mut a = tile(1, 0, 0, 4);
        let b = tile(2, 0, 1, 4);
        a.absorb(b);
        assert_eq!(a.value(), 8);
        assert_eq!(a.id(), TileId(1));
    }

    #[test]
    fn relocate_updates_position() {
        let mut a = tile(1, 2, 2, 2);
        a.relocate(Vector::new(2, 0));
        assert_eq!(a.position(), Vector::new(2, 0));
        assert_eq!(a.value(), 2);
    }
}
