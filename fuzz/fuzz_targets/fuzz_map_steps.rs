#![no_main]

//! Map + step sequence fuzzer.
//!
//! Parses arbitrary map text, then interleaves actor ticks, player moves and
//! clock jumps, checking the game invariants after every step.

use std::time::{Duration, Instant};

use arbitrary::Arbitrary;
use gridwalk::game::{GameState, check_invariants, parse_map};
use gridwalk::{Direction, SimConfig};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated step.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzStep {
    /// Tick an actor (index taken modulo the actor count).
    Tick(u8),
    /// Move the player (direction taken modulo 4).
    Move(u8),
    /// Advance the clock by this many milliseconds.
    Wait(u16),
}

/// Structured input.
#[derive(Arbitrary, Debug)]
struct MapStepsInput {
    /// Raw map text.
    map: String,
    /// Steps to apply.
    steps: Vec<FuzzStep>,
}

fuzz_target!(|input: MapStepsInput| {
    let Ok(map) = parse_map(&input.map) else {
        return;
    };
    let mut state = GameState::new(map, &SimConfig::default());
    let ids: Vec<_> = state.actor_ids().collect();
    let mut now = Instant::now();

    for step in input.steps.into_iter().take(200) {
        let health = state.health();
        match step {
            FuzzStep::Tick(n) => {
                if !ids.is_empty() {
                    state.tick_actor(ids[usize::from(n) % ids.len()], now);
                }
            }
            FuzzStep::Move(d) => {
                state.move_player(Direction::ALL[usize::from(d % 4)], now);
            }
            FuzzStep::Wait(ms) => now += Duration::from_millis(u64::from(ms)),
        }

        assert!(state.health() <= health, "health increased");
        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "{violations:?}");
    }
});
