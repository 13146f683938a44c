//! The shared game handle.

use std::time::Instant;

use parking_lot::{Mutex, MutexGuard};

use crate::game::{ActorId, GameState, InputEvent, TickOutcome};

/// The single shared game.
///
/// Owns the one lock guarding the whole [`GameState`]. Share it between
/// threads as `Arc<Game>`; it is deliberately not `Clone`. The lock is taken
/// for one complete step at a time and released before any sleep, channel
/// send or terminal I/O.
#[derive(Debug)]
pub struct Game {
    state: Mutex<GameState>,
}

impl Game {
    /// Wrap a state.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Lock the state.
    ///
    /// Renderers use this for read-only access; keep the guard short-lived.
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock()
    }

    /// Run one tick of an actor under the lock.
    pub fn tick_actor(&self, id: ActorId) -> TickOutcome {
        let mut state = self.state.lock();
        state.tick_actor(id, Instant::now())
    }

    /// Apply one input event under the lock.
    ///
    /// Returns `false` when the game should stop.
    pub fn handle_input(&self, event: InputEvent) -> bool {
        let mut state = self.state.lock();
        state.apply_input(event, Instant::now())
    }

    /// Ids of every actor.
    #[must_use]
    pub fn actor_ids(&self) -> Vec<ActorId> {
        self.state.lock().actor_ids().collect()
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.lock().is_game_over()
    }

    /// Consume the handle and return the state.
    #[must_use]
    pub fn into_inner(self) -> GameState {
        self.state.into_inner()
    }
}
