use rand::distributions::Distribution;
use rand::distributions::WeightedIndex;
use rand::seq::IteratorRandom;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::events::{GameEvent, ObserverHandle};
use crate::geometry::{Direction, Vector};
use crate::tile::{Tile, TileId};

const NEW_TILE_CHOICES: [u32; 2] = [2, 4];
const NEW_TILE_WEIGHTS: [u8; 2] = [9, 1];

/// Board is the game grid: a rectangular array of cells, each empty or
/// holding one tile. It owns tile placement exclusively and notifies its
/// observers of every tile creation, update, and removal as it happens.
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<Tile>>>,
    rng: Box<dyn RngCore>,
    next_tile_id: u64,
    new_tile_weighted_index: WeightedIndex<u8>,
    observers: Vec<ObserverHandle>,
}

impl Board {
    /// Initialize an empty board of the given dimensions using the given
    /// random number generator.
    pub fn new(rows: usize, cols: usize, rng: impl RngCore + 'static) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions(rows, cols));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![vec![None; cols]; rows],
            rng: Box::new(rng),
            next_tile_id: 0,
            new_tile_weighted_index: WeightedIndex::new(NEW_TILE_WEIGHTS)
                .expect("NEW_TILE_WEIGHTS should never be empty"),
            observers: Vec::new(),
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Register a view-layer observer. Observers are notified synchronously,
    /// in registration order.
    pub fn add_observer(&mut self, observer: ObserverHandle) {
        self.observers.push(observer);
    }

    pub fn in_bounds(&self, pos: Vector) -> bool {
        pos.row >= 0 && (pos.row as usize) < self.rows && pos.col >= 0 && (pos.col as usize) < self.cols
    }

    /// The tile occupying `pos`, if any. Out-of-bounds positions are empty.
    pub fn get(&self, pos: Vector) -> Option<Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// All positions currently holding no tile, in no particular order.
    pub fn empty_positions(&self) -> Vec<Vector> {
        let mut empties = Vec::new();
        for (row, row_cells) in self.cells.iter().enumerate() {
            for (col, cell) in row_cells.iter().enumerate() {
                if cell.is_none() {
                    empties.push(Vector::new(row as i32, col as i32));
                }
            }
        }
        empties
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|row| row.iter().any(|c| c.is_none()))
    }

    /// Score is the sum of all tile values on the board. (Differs from
    /// classic 2048, which scores the sequence of merges rather than the
    /// state of the board.)
    pub fn score(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter_map(|cell| cell.as_ref().map(Tile::value))
            .sum()
    }

    /// Place a tile on a uniformly chosen empty cell. Without a forced value
    /// the new tile is 2 with probability 0.9 and 4 with probability 0.1.
    /// Callers must not invoke this on a full board.
    pub fn place_random_tile(&mut self, forced_value: Option<u32>) -> Result<Tile> {
        let pos = self
            .empty_positions()
            .into_iter()
            .choose(&mut self.rng)
            .ok_or(Error::BoardFull)?;
        let value = match forced_value {
            Some(value) => value,
            None => NEW_TILE_CHOICES[self.new_tile_weighted_index.sample(&mut self.rng)],
        };
        let tile = self.mint_tile(pos, value);
        self.cells[pos.row as usize][pos.col as usize] = Some(tile);
        self.notify_all(GameEvent::TileCreated(tile));
        Ok(tile)
    }

    /// Slide the tile at `pos` (if any) along `dir` until it bumps into
    /// another tile or the edge of the board. A tile merges at most once per
    /// slide; the moving tile survives the merge and gains the combined
    /// value. Each relocation and merge is notified in the order it occurs.
    pub fn slide(&mut self, mut pos: Vector, dir: Vector) {
        let Some(mut mover) = self.get(pos) else {
            return;
        };
        loop {
            let next = pos + dir;
            if !self.in_bounds(next) {
                break;
            }
            match self.get(next) {
                None => {
                    mover = self.move_tile(mover, pos, next);
                    pos = next;
                }
                Some(other) if mover.same_value(&other) => {
                    mover.absorb(other);
                    self.cells[pos.row as usize][pos.col as usize] = Some(mover);
                    self.notify_all(GameEvent::TileUpdated(mover));
                    self.notify_all(GameEvent::TileRemoved(other));
                    self.move_tile(mover, pos, next);
                    break;
                }
                // stuck against a tile of a different value
                Some(_) => break,
            }
        }
    }

    /// Shift every tile on the board as far as it will go in `direction`,
    /// merging on contact. Tiles nearest the destination edge are resolved
    /// first; a tile produced by one merge may be absorbed again later in
    /// the same shift.
    pub fn shift(&mut self, direction: Direction) {
        let step = direction.vector();
        for pos in Sweep::new(self.rows, self.cols, direction) {
            self.slide(pos, step);
        }
    }

    pub fn move_left(&mut self) {
        self.shift(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.shift(Direction::Right);
    }

    pub fn move_up(&mut self) {
        self.shift(Direction::Up);
    }

    pub fn move_down(&mut self) {
        self.shift(Direction::Down);
    }

    /// Test and debug scaffolding: each tile as its integer value, empty
    /// cells as 0.
    pub fn to_grid(&self) -> Vec<Vec<u32>> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.as_ref().map_or(0, Tile::value))
                    .collect()
            })
            .collect()
    }

    /// Test and debug scaffolding: reset the board to the given values,
    /// where 0 is an empty cell. Old tiles are discarded and fresh ones
    /// constructed; no notifications are emitted during the bulk load.
    pub fn from_grid(&mut self, values: &[Vec<u32>]) -> Result<()> {
        let shape_mismatch = values.len() != self.rows || values.iter().any(|r| r.len() != self.cols);
        if shape_mismatch {
            return Err(Error::GridShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                rows: values.len(),
                cols: values.first().map_or(0, |r| r.len()),
            });
        }
        for (row, row_values) in values.iter().enumerate() {
            for (col, &value) in row_values.iter().enumerate() {
                self.cells[row][col] = if value == 0 {
                    None
                } else {
                    Some(self.mint_tile(Vector::new(row as i32, col as i32), value))
                };
            }
        }
        Ok(())
    }
}

// private methods
impl Board {
    fn mint_tile(&mut self, pos: Vector, value: u32) -> Tile {
        let id = TileId(self.next_tile_id);
        self.next_tile_id += 1;
        Tile::new(id, pos, value)
    }

    // Relocate `tile` from `old_pos` into the empty cell at `new_pos`,
    // notifying observers, and return its updated state.
    fn move_tile(&mut self, mut tile: Tile, old_pos: Vector, new_pos: Vector) -> Tile {
        tile.relocate(new_pos);
        self.cells[old_pos.row as usize][old_pos.col as usize] = None;
        self.cells[new_pos.row as usize][new_pos.col as usize] = Some(tile);
        self.notify_all(GameEvent::TileUpdated(tile));
        tile
    }

    fn notify_all(&self, event: GameEvent) {
        for observer in &self.observers {
            observer.borrow_mut().notify(&event);
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{0:>6}", tile.value())?,
                    None => write!(f, "{0:>6}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Sweep is an iterator of board positions in move-resolution order: for a
// shift in direction `d`, each line is visited starting from the cell
// nearest the `d` edge and working backward. Visiting in any other order
// merges the wrong pairs (a row `2 4 4 4` shifted right must become
// `_ 2 4 8`, not `_ 2 8 4`).
struct Sweep {
    rows: usize,
    cols: usize,
    direction: Direction,
    row: usize,
    col: usize,
    exhausted: bool,
}

impl Sweep {
    fn new(rows: usize, cols: usize, direction: Direction) -> Self {
        let (row, col) = match direction {
            Direction::Left => (0, 0),
            Direction::Right => (0, cols - 1),
            Direction::Up => (0, 0),
            Direction::Down => (rows - 1, 0),
        };
        Sweep {
            rows,
            cols,
            direction,
            row,
            col,
            exhausted: false,
        }
    }
}

impl Iterator for Sweep {
    type Item = Vector;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.direction {
            Direction::Left => self.next_left(),
            Direction::Right => self.next_right(),
            Direction::Up => self.next_up(),
            Direction::Down => self.next_down(),
        }
    }
}

impl Sweep {
    fn here(&self) -> Vector {
        Vector::new(self.row as i32, self.col as i32)
    }

    fn next_left(&mut self) -> Option<Vector> {
        let pos = self.here();
        if self.col + 1 == self.cols {
            self.col = 0;
            self.row += 1;
            self.exhausted = self.row == self.rows;
        } else {
            self.col += 1;
        }
        Some(pos)
    }

    fn next_right(&mut self) -> Option<Vector> {
        let pos = self.here();
        if self.col == 0 {
            self.col = self.cols - 1;
            self.row += 1;
            self.exhausted = self.row == self.rows;
        } else {
            self.col -= 1;
        }
        Some(pos)
    }

    fn next_up(&mut self) -> Option<Vector> {
        let pos = self.here();
        if self.row + 1 == self.rows {
            self.row = 0;
            self.col += 1;
            self.exhausted = self.col == self.cols;
        } else {
            self.row += 1;
        }
        Some(pos)
    }

    fn next_down(&mut self) -> Option<Vector> {
        let pos = self.here();
        if self.row == 0 {
            self.row = self.rows - 1;
            self.col += 1;
            self.exhausted = self.col == self.cols;
        } else {
            self.row -= 1;
        }
        Some(pos)
    }
}
