use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub board: Board,
    /// Cell played to reach this board, `None` for the starting position.
    pub played: Option<CellIndex>,
}

impl HistoryEntry {
    const START: Self = Self {
        board: Board::empty(),
        played: None,
    };
}

/// Full game: every board since the start, plus which one is on display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: Vec<HistoryEntry>,
    step: usize,
    x_is_next: bool,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    step: usize,
    x_is_next: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self> {
        let RawGameState {
            history,
            step,
            x_is_next,
        } = raw;

        match history.first() {
            Some(&HistoryEntry::START) => {}
            _ => return Err(GameError::InvalidHistory(0)),
        }

        for (k, pair) in history.windows(2).enumerate() {
            let (prev, entry) = (&pair[0], &pair[1]);
            let Some(index) = entry.played else {
                return Err(GameError::InvalidHistory(k + 1));
            };
            let changed = (0..BOARD_CELLS as CellIndex)
                .filter(|&i| prev.board[i] != entry.board[i])
                .count();
            let legal = validate_index(index).is_ok()
                && changed == 1
                && calculate_winner(&prev.board).is_none()
                && prev.board[index].is_empty()
                && entry.board[index] == Cell::Taken(Player::for_step(k));
            if !legal {
                return Err(GameError::InvalidHistory(k + 1));
            }
        }

        if step >= history.len() {
            return Err(GameError::InvalidStep(step));
        }
        if x_is_next != (step % 2 == 0) {
            return Err(GameError::InvalidHistory(step));
        }

        Ok(Self {
            history,
            step,
            x_is_next,
        })
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::START],
            step: 0,
            x_is_next: true,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    pub fn current_board(&self) -> &Board {
        &self.current_entry().board
    }

    pub fn winner(&self) -> Option<Win> {
        calculate_winner(self.current_board())
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.current_board().is_full()
    }

    pub fn can_play_at(&self, index: CellIndex) -> bool {
        self.current_board()
            .get(index)
            .is_some_and(|cell| cell.is_empty())
            && self.winner().is_none()
    }

    /// Plays `index` for the player whose turn it is.
    ///
    /// An occupied cell or an already won board is ignored and reported as
    /// [`MoveOutcome::NoChange`]. Any history after the current step is
    /// dropped before the new board is appended.
    pub fn apply_move(&mut self, index: CellIndex) -> Result<MoveOutcome> {
        let index = validate_index(index)?;

        if !self.can_play_at(index) {
            log::trace!("move at {} ignored on step {}", index, self.step);
            return Ok(MoveOutcome::NoChange);
        }

        let player = self.next_player();
        let board = self.current_board().with_mark(index, player);

        self.history.truncate(self.step + 1);
        self.history.push(HistoryEntry {
            board,
            played: Some(index),
        });
        self.step = self.last_step();
        self.x_is_next = !self.x_is_next;

        log::debug!("{} played {} (step {})", player, index, self.step);

        Ok(if let Some(win) = calculate_winner(&board) {
            MoveOutcome::Won(win)
        } else if board.is_full() {
            MoveOutcome::Drawn
        } else {
            MoveOutcome::Played
        })
    }

    /// Moves the displayed board to `step` without touching history.
    pub fn jump_to(&mut self, step: usize) -> Result<JumpOutcome> {
        if step > self.last_step() {
            return Err(GameError::InvalidStep(step));
        }

        if step == self.step {
            return Ok(JumpOutcome::NoChange);
        }

        self.step = step;
        self.x_is_next = step % 2 == 0;
        log::debug!("jumped to step {}", step);
        Ok(JumpOutcome::Changed)
    }

    /// Successor state after playing `index`, leaving `self` as it was.
    pub fn with_move(&self, index: CellIndex) -> Result<(Self, MoveOutcome)> {
        let mut next = self.clone();
        let outcome = next.apply_move(index)?;
        Ok((next, outcome))
    }

    /// Successor state displaying `step`, leaving `self` as it was.
    pub fn at_step(&self, step: usize) -> Result<(Self, JumpOutcome)> {
        let mut next = self.clone();
        let outcome = next.jump_to(step)?;
        Ok((next, outcome))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[CellIndex]) {
        for &index in moves {
            assert!(state.apply_move(index).unwrap().has_update(), "move {index}");
        }
    }

    #[test]
    fn new_game_starts_with_single_empty_entry() {
        let state = GameState::new();

        assert_eq!(state.history(), &[HistoryEntry::START]);
        assert_eq!(state.current_step(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn move_appends_entry_and_flips_turn() {
        let mut state = GameState::new();

        assert_eq!(state.apply_move(4).unwrap(), MoveOutcome::Played);

        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.current_board()[4], Cell::Taken(Player::X));
        assert_eq!(state.current_entry().played, Some(4));
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn each_entry_differs_from_previous_in_one_cell() {
        let mut state = GameState::new();
        play(&mut state, &[0, 4, 8, 2, 6]);

        for pair in state.history().windows(2) {
            let changed: Vec<_> = (0..9)
                .filter(|&i| pair[0].board[i] != pair[1].board[i])
                .collect();
            assert_eq!(changed, vec![pair[1].played.unwrap()]);
        }
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[4]);
        let before = state.clone();

        assert_eq!(state.apply_move(4).unwrap(), MoveOutcome::NoChange);
        assert_eq!(state, before);
    }

    #[test]
    fn move_after_win_is_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4]);
        assert!(matches!(state.apply_move(2).unwrap(), MoveOutcome::Won(_)));
        let before = state.clone();

        assert_eq!(state.apply_move(8).unwrap(), MoveOutcome::NoChange);
        assert_eq!(state, before);
    }

    #[test]
    fn off_board_index_is_an_error() {
        let mut state = GameState::new();

        assert_eq!(state.apply_move(9), Err(GameError::InvalidCell(9)));
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn jump_recomputes_turn_from_step_parity() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2, 3]);

        assert_eq!(state.jump_to(2).unwrap(), JumpOutcome::Changed);
        assert_eq!(state.current_step(), 2);
        assert!(state.x_is_next());
        assert_eq!(state.history().len(), 5);

        state.jump_to(1).unwrap();
        assert!(!state.x_is_next());
    }

    #[test]
    fn jump_to_current_step_is_no_change() {
        let mut state = GameState::new();
        assert_eq!(state.jump_to(0).unwrap(), JumpOutcome::NoChange);
    }

    #[test]
    fn jump_past_history_is_an_error() {
        let mut state = GameState::new();
        play(&mut state, &[0]);

        assert_eq!(state.jump_to(2), Err(GameError::InvalidStep(2)));
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn move_after_jump_truncates_future() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2]);
        state.jump_to(1).unwrap();

        assert_eq!(state.apply_move(5).unwrap(), MoveOutcome::Played);

        assert_eq!(state.history().len(), 3);
        assert_eq!(state.current_step(), 2);
        assert_eq!(state.current_entry().played, Some(5));
        assert_eq!(state.current_board()[2], Cell::Empty);
        assert_eq!(state.current_board()[5], Cell::Taken(Player::O));
    }

    #[test]
    fn jump_back_before_win_allows_play_again() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert!(state.winner().is_some());

        state.jump_to(4).unwrap();
        assert_eq!(state.apply_move(8).unwrap(), MoveOutcome::Played);
        assert_eq!(state.winner(), None);
        assert_eq!(state.history().len(), 6);
    }

    #[test]
    fn with_move_leaves_source_state_alone() {
        let state = GameState::new();

        let (next, outcome) = state.with_move(0).unwrap();

        assert_eq!(outcome, MoveOutcome::Played);
        assert_eq!(state, GameState::new());
        assert_eq!(next.current_step(), 1);
    }

    #[test]
    fn state_serializes_for_debug_dumps() {
        let mut state = GameState::new();
        play(&mut state, &[4]);

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, state);
    }

    #[test]
    fn empty_history_is_rejected_on_load() {
        let json = r#"{"history":[],"step":0,"x_is_next":true}"#;

        assert!(serde_json::from_str::<GameState>(json).is_err());
    }

    #[test]
    fn step_past_history_is_rejected_on_load() {
        let mut json = serde_json::to_value(GameState::new()).unwrap();
        json["step"] = 5.into();

        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn turn_flag_must_match_step_on_load() {
        let mut json = serde_json::to_value(GameState::new()).unwrap();
        json["x_is_next"] = false.into();

        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn entry_changing_two_cells_is_rejected_on_load() {
        let mut state = GameState::new();
        play(&mut state, &[0]);
        state.history[1].board = state.history[1].board.with_mark(5, Player::O);
        let json = serde_json::to_string(&state).unwrap();

        assert!(serde_json::from_str::<GameState>(&json).is_err());
    }

    #[test]
    fn played_index_must_name_the_changed_cell_on_load() {
        let mut state = GameState::new();
        play(&mut state, &[0, 4]);
        state.history[2].played = Some(6);
        let json = serde_json::to_string(&state).unwrap();

        assert!(serde_json::from_str::<GameState>(&json).is_err());
    }

    #[test]
    fn out_of_turn_mark_is_rejected_on_load() {
        let mut state = GameState::new();
        play(&mut state, &[0]);
        state.history[1].board = Board::empty().with_mark(0, Player::O);
        let json = serde_json::to_string(&state).unwrap();

        assert!(serde_json::from_str::<GameState>(&json).is_err());
    }

    #[test]
    fn played_game_loads_back_at_any_step() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.jump_to(3).unwrap();
        let json = serde_json::to_string(&state).unwrap();

        assert_eq!(serde_json::from_str::<GameState>(&json).unwrap(), state);
    }

    #[test]
    fn try_from_reports_the_bad_entry() {
        let raw = RawGameState {
            history: vec![HistoryEntry::START, HistoryEntry::START],
            step: 0,
            x_is_next: true,
        };

        assert_eq!(GameState::try_from(raw), Err(GameError::InvalidHistory(1)));
    }
}
