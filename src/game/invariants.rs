//! Game invariants - sanity checks that detect bugs.
//!
//! None of these should ever trigger while the rules in `state` are the only
//! code mutating a game. Tests and the fuzzer run them after every step.

use std::fmt;

use crate::game::{GameState, TileKind};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let grid = state.grid();

    for id in state.actor_ids() {
        let Some(pos) = state.actor_pos(id) else {
            continue;
        };
        if !grid.in_bounds(pos) {
            violations.push(InvariantViolation {
                message: format!("{id} at {pos:?} is outside the grid"),
            });
            continue;
        }
        let expected = id.kind().tile();
        if grid.get(pos) != Some(expected) {
            violations.push(InvariantViolation {
                message: format!("{id} at {pos:?} is not drawn as {:?}", expected.kind),
            });
        }
        if pos == state.player() {
            violations.push(InvariantViolation {
                message: format!("{id} shares the player's cell {pos:?}"),
            });
        }
    }

    for (coord, tile) in grid.iter() {
        if tile.is_actor() && state.actor_at(coord).is_none() {
            violations.push(InvariantViolation {
                message: format!("stray {:?} glyph at {coord:?}", tile.kind),
            });
        }
    }

    let player = state.player();
    if grid.get(player).map(|t| t.kind) != Some(TileKind::Player) {
        violations.push(InvariantViolation {
            message: format!("player cell {player:?} does not show the player"),
        });
    }

    if state.health() > state.starting_health() {
        violations.push(InvariantViolation {
            message: format!(
                "health {} exceeds starting health {}",
                state.health(),
                state.starting_health()
            ),
        });
    }

    violations
}
