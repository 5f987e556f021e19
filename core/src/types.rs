use core::fmt;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Position of a single cell, `0..9` in row-major order.
pub type CellIndex = u8;

/// One-based `(row, col)` pair, as shown to the player.
pub type RowCol = (u8, u8);

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Side length of the board.
pub const BOARD_SIDE: CellIndex = 3;

pub const fn row_col(index: CellIndex) -> RowCol {
    (index / BOARD_SIDE + 1, index % BOARD_SIDE + 1)
}

pub fn validate_index(index: CellIndex) -> Result<CellIndex> {
    if usize::from(index) < BOARD_CELLS {
        Ok(index)
    } else {
        Err(GameError::InvalidCell(index))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Player to act at `step`, X on even steps.
    pub const fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Self::X } else { Self::O }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Taken(player) => Some(player),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

/// Board snapshot, cells stored row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    pub const fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Returns `None` for indices outside the board.
    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(usize::from(index)).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Copy of this board with `index` taken by `player`.
    pub(crate) fn with_mark(&self, index: CellIndex, player: Player) -> Self {
        let mut next = *self;
        next.cells[usize::from(index)] = Cell::Taken(player);
        next
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}
