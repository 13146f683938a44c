//! Play command implementation - interactive TUI.

use super::{CliError, input, render};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridwalk::driver::{RedrawReceiver, redraw_channel, spawn_actors};
use gridwalk::game::{Game, GameState, load_map};
use gridwalk::SimConfig;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the map cannot be loaded or the terminal fails.
pub(crate) fn execute(map: &Path, config: SimConfig) -> Result<(), CliError> {
    // Load before touching the terminal or starting any thread
    let loaded = load_map(map)?;
    let game = Arc::new(Game::new(GameState::new(loaded, &config)));
    info!(map = %map.display(), "starting game");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor().ok();

    let result = run_game(&mut terminal, &game, config);

    // Restore terminal
    terminal.show_cursor().ok();
    if let Err(err) = disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(terminal.backend_mut(), LeaveAlternateScreen) {
        error!(?err, "failed to leave alternate screen");
    }

    result
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &Arc<Game>,
    config: SimConfig,
) -> Result<(), CliError> {
    let (signal, redraw) = redraw_channel();
    let actors = spawn_actors(game, &signal, config.tick_interval)?;

    let result = event_loop(terminal, game, &redraw, config.redraw_interval);

    actors.stop_and_join();
    info!("game finished");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &Game,
    redraw: &RedrawReceiver,
    poll_interval: Duration,
) -> Result<(), CliError> {
    draw(terminal, game)?;

    loop {
        let mut dirty = false;

        // Handle input with timeout
        if event::poll(poll_interval)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(input) = input::map_key(&key) {
                        if !game.handle_input(input) {
                            break;
                        }
                        dirty = true;
                    }
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        if redraw.try_take() || dirty {
            draw(terminal, game)?;
        }
    }

    Ok(())
}

fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, game: &Game) -> Result<(), CliError> {
    // Render from a copy so the lock is not held during terminal I/O
    let snapshot = game.lock().clone();
    terminal.draw(|f| render::draw(f, &snapshot))?;
    Ok(())
}
