//! Values derived from a [`GameState`] for display. Recomputed on every call.

use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Winner(Player),
    Draw,
    Next(Player),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(player) => write!(f, "Winner: {}", player),
            Self::Draw => f.write_str("Draw"),
            Self::Next(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// Entry in the move list, one per history step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveLabel {
    GameStart,
    Move { step: usize, at: RowCol },
}

impl MoveLabel {
    pub fn for_entry(step: usize, entry: &HistoryEntry) -> Self {
        match entry.played {
            Some(index) if step > 0 => Self::Move {
                step,
                at: row_col(index),
            },
            _ => Self::GameStart,
        }
    }

    pub const fn step(self) -> usize {
        match self {
            Self::GameStart => 0,
            Self::Move { step, .. } => step,
        }
    }
}

impl fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameStart => f.write_str("Go to game start"),
            Self::Move {
                step,
                at: (row, col),
            } => write!(f, "Go to move #{} ({},{})", step, row, col),
        }
    }
}

impl GameState {
    pub fn status(&self) -> Status {
        if let Some(win) = self.winner() {
            Status::Winner(win.player)
        } else if self.current_board().is_full() {
            Status::Draw
        } else {
            Status::Next(self.next_player())
        }
    }

    pub fn move_labels(&self) -> Vec<MoveLabel> {
        self.history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveLabel::for_entry(step, entry))
            .collect()
    }
}
