use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {0} is outside the board")]
    InvalidCell(CellIndex),
    #[error("Step {0} is past the end of history")]
    InvalidStep(usize),
    #[error("History entry {0} is not reachable by a legal move")]
    InvalidHistory(usize),
}

pub type Result<T> = core::result::Result<T, GameError>;
