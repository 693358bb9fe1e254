use std::cell::RefCell;
use std::rc::Rc;

use crate::tile::Tile;

/// GameEvent describes one state change of the board, carrying the affected
/// tile's state as of the moment the change occurred.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    TileCreated(Tile),
    TileUpdated(Tile),
    TileRemoved(Tile),
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TileCreated(tile) => write!(f, "created {0}", tile),
            Self::TileUpdated(tile) => write!(f, "updated {0}", tile),
            Self::TileRemoved(tile) => write!(f, "removed {0}", tile),
        }
    }
}

/// Observer receives board change notifications synchronously, in the exact
/// order the state changes occur. View components implement this; the board
/// works identically with zero observers attached.
pub trait Observer {
    fn notify(&mut self, event: &GameEvent);
}

/// Shared handle to an observer, registered with a board.
pub type ObserverHandle = Rc<RefCell<dyn Observer>>;
