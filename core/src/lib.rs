#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use store::*;
pub use types::*;
pub use view::*;
pub use winner::*;

mod engine;
mod error;
mod store;
mod types;
mod view;
mod winner;

/// Result of trying to play a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    NoChange,
    Played,
    Won(Win),
    Drawn,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Played => true,
            Won(_) => true,
            Drawn => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Drawn)
    }
}

/// Result of moving the displayed step through history.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpOutcome {
    NoChange,
    Changed,
}

impl JumpOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
