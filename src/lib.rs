//! Rule engine for a 2048-style sliding-tile puzzle on a rectangular grid.
//!
//! The [`Board`] owns the grid state and resolves the four directional
//! moves: every tile slides as far as it can, equal tiles merge on contact
//! (and a merged tile may merge again later in the same move), and the
//! score is the sum of all tile values. Rendering and input handling live
//! outside this crate and observe state changes through [`Observer`].

pub mod board;
pub mod error;
pub mod events;
pub mod geometry;
pub mod tile;

pub use board::Board;
pub use error::{Error, Result};
pub use events::{GameEvent, Observer, ObserverHandle};
pub use geometry::{Direction, Vector};
pub use tile::{Tile, TileId};
