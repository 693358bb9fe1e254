/// Vector is a (row, column) pair measuring distance along the two grid
/// axes. Interpreted as a position it is an offset from (0, 0); interpreted
/// as movement it is a step from another position, so adding two Vectors
/// yields a Vector.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Vector {
    pub row: i32,
    pub col: i32,
}

impl Vector {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl std::ops::Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.row + other.row, self.col + other.col)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0},{1})", self.row, self.col)
    }
}

/// Direction represents the direction indicated by the player.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The unit step a tile takes when sliding this way.
    pub fn vector(&self) -> Vector {
        match self {
            Self::Left => Vector::new(0, -1),
            Self::Right => Vector::new(0, 1),
            Self::Up => Vector::new(-1, 0),
            Self::Down => Vector::new(1, 0),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{}", s)
    }
}
