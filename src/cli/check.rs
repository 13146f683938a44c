//! Map check command implementation.

use super::CliError;
use gridwalk::game::{GameState, TileKind, check_invariants, load_map};
use gridwalk::SimConfig;
use std::path::Path;

/// Execute the check command.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded or is inconsistent.
pub(crate) fn execute(map: &Path) -> Result<(), CliError> {
    println!("Checking: {}", map.display());
    println!();

    let loaded = load_map(map)?;
    print_check("Map readable, player start found", true);

    let state = GameState::new(loaded, &SimConfig::default());
    let grid = state.grid();
    let violations = check_invariants(&state);
    print_check("Invariants hold", violations.is_empty());
    for violation in &violations {
        println!("    {violation}");
    }

    let walls = grid.iter().filter(|(_, t)| t.kind == TileKind::Wall).count();
    let player = state.player();

    println!();
    println!("Summary:");
    println!("  Rows:        {}", grid.height());
    println!("  Widest row:  {}", grid.max_width());
    println!("  Player:      ({}, {})", player.x, player.y);
    println!("  Enemies:     {}", state.enemies().len());
    println!("  Aliens:      {}", state.aliens().len());
    println!("  Walls:       {walls}");

    if violations.is_empty() {
        println!();
        println!("Map OK");
        Ok(())
    } else {
        Err(CliError::new(format!("{} invariant violation(s)", violations.len())))
    }
}

fn print_check(name: &str, ok: bool) {
    let mark = if ok { "OK" } else { "FAILED" };
    println!("  {name:<36} {mark}");
}
