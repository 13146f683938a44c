//! Run command implementation - actors only, no player input.

use super::{CliError, render};
use gridwalk::driver::{redraw_channel, spawn_actors};
use gridwalk::game::{Game, GameState, check_invariants, load_map};
use gridwalk::SimConfig;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded, a thread cannot be
/// spawned, or the final state breaks an invariant.
pub(crate) fn execute(map: &Path, config: SimConfig, duration: Duration) -> Result<(), CliError> {
    let loaded = load_map(map)?;
    let game = Arc::new(Game::new(GameState::new(loaded, &config)));

    // Nobody draws; requests just coalesce in the channel
    let (signal, _redraw) = redraw_channel();
    let actors = spawn_actors(&game, &signal, config.tick_interval)?;
    let actor_count = actors.len();
    thread::sleep(duration);
    actors.stop_and_join();

    let state = game.lock().clone();
    print!("{}", render::grid_text(&state));
    println!();
    println!("Actors:  {actor_count}");
    println!("Health:  {}/{}", state.health(), state.starting_health());
    if !state.status().is_empty() {
        println!("Status:  {}", state.status());
    }

    let violations = check_invariants(&state);
    if let Some(first) = violations.first() {
        return Err(CliError::new(first.to_string()));
    }
    Ok(())
}
