use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::*;

/// Handle returned by [`GameStore::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u32);

type Observer = Box<dyn Fn(&GameState)>;

/// Owns the live [`GameState`] and tells observers whenever it is replaced.
///
/// Transitions are computed on a copy and swapped in whole, so observers only
/// ever see complete states. Ignored moves notify nobody.
pub struct GameStore {
    state: GameState,
    observers: Vec<(SubscriberId, Observer)>,
    next_id: u32,
}

impl GameStore {
    pub fn new() -> Self {
        Self::with_state(GameState::new())
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn subscribe(&mut self, observer: impl Fn(&GameState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn apply_move(&mut self, index: CellIndex) -> Result<MoveOutcome> {
        let (next, outcome) = self.state.with_move(index)?;
        if outcome.has_update() {
            self.replace(next);
        }
        Ok(outcome)
    }

    pub fn jump_to(&mut self, step: usize) -> Result<JumpOutcome> {
        let (next, outcome) = self.state.at_step(step)?;
        if outcome.has_update() {
            self.replace(next);
        }
        Ok(outcome)
    }

    fn replace(&mut self, state: GameState) {
        self.state = state;
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameStore")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
