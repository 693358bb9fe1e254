use thiserror;

/// The Result type for fivetwelve.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("board dimensions must be at least 1 x 1, got {0} x {1}")]
    InvalidDimensions(usize, usize),

    #[error("no empty position left to place a tile on")]
    BoardFull,

    #[error("grid shape mismatch: board is {expected_rows} x {expected_cols}, values are {rows} x {cols}")]
    GridShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },
}
