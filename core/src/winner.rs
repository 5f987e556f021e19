use serde::{Deserialize, Serialize};

use crate::*;

/// Three cells forming a row, column or diagonal.
pub type Line = [CellIndex; 3];

/// Every winning line, in the order they are checked: rows top to bottom,
/// columns left to right, then the main and anti diagonal.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    pub player: Player,
    pub line: Line,
}

impl Win {
    pub fn contains(&self, index: CellIndex) -> bool {
        self.line.contains(&index)
    }
}

/// First line fully held by one player, if any.
///
/// `None` covers both a game in progress and a draw; use [`Board::is_full`]
/// to tell them apart.
pub fn calculate_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board[a] {
            Cell::Taken(player) if board[b] == board[a] && board[c] == board[a] => {
                Some(Win { player, line })
            }
            _ => None,
        }
    })
}
