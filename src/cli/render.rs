//! Terminal rendering of a game state.

use gridwalk::game::{GameState, Tile, TileColor};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Draw the whole screen from a state snapshot.
pub(crate) fn draw(f: &mut Frame, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Map
            Constraint::Length(3), // Status
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], state);
    render_map(f, chunks[1], state);
    render_status(f, chunks[2], state);
    render_footer(f, chunks[3], state);
}

/// Most hearts drawn in the header; the numeric health is always shown.
const MAX_HEARTS: u32 = 10;

fn health_bar(health: u32, starting_health: u32) -> String {
    let full = health.min(MAX_HEARTS);
    let empty = starting_health.min(MAX_HEARTS).saturating_sub(full);
    let mut bar = "♥".repeat(full as usize);
    bar.push_str(&"♡".repeat(empty as usize));
    bar
}

fn render_header(f: &mut Frame, area: Rect, state: &GameState) {
    let title = format!(
        " Gridwalk | Health: {} {}/{} | Enemies: {} | Aliens: {} ",
        health_bar(state.health(), state.starting_health()),
        state.health(),
        state.starting_health(),
        state.enemies().len(),
        state.aliens().len()
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_map(f: &mut Frame, area: Rect, state: &GameState) {
    let map_widget = Paragraph::new(grid_lines(state))
        .block(Block::default().borders(Borders::ALL).title(" Map "));

    f.render_widget(map_widget, area);
}

fn render_status(f: &mut Frame, area: Rect, state: &GameState) {
    let style = if state.is_game_over() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(state.status().to_owned())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(" Status "));

    f.render_widget(status, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &GameState) {
    let controls = if state.is_game_over() {
        " [q/Esc] Quit "
    } else {
        " [w/a/s/d or arrows] Move  [e] Interact  [q/Esc] Quit "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

/// One styled line per grid row.
pub(crate) fn grid_lines(state: &GameState) -> Vec<Line<'static>> {
    state
        .grid()
        .rows()
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|tile| Span::styled(tile.glyph.to_string(), tile_style(*tile)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Plain text rendering of the grid, one line per row.
pub(crate) fn grid_text(state: &GameState) -> String {
    let mut text = String::new();
    for row in state.grid().rows() {
        text.extend(row.iter().map(|tile| tile.glyph));
        text.push('\n');
    }
    text
}

fn tile_style(tile: Tile) -> Style {
    let mut style = Style::default();
    if let Some(fg) = color(tile.fg) {
        style = style.fg(fg);
    }
    if let Some(bg) = color(tile.bg) {
        style = style.bg(bg);
    }
    style
}

fn color(color: TileColor) -> Option<Color> {
    match color {
        TileColor::Default => None,
        TileColor::DarkGray => Some(Color::DarkGray),
        TileColor::Red => Some(Color::Red),
        TileColor::Green => Some(Color::Green),
        TileColor::Yellow => Some(Color::Yellow),
        TileColor::Cyan => Some(Color::Cyan),
        TileColor::Wall => Some(Color::Black),
        TileColor::WallBackground => Some(Color::DarkGray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk::SimConfig;
    use gridwalk::game::parse_map;
    use ratatui::{Terminal, backend::TestBackend};

    fn state(text: &str) -> GameState {
        GameState::new(parse_map(text).unwrap_or_else(|e| panic!("{e}")), &SimConfig::default())
    }

    fn screen(state: &GameState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap_or_else(|e| panic!("{e}"));
        terminal
            .draw(|f| draw(f, state))
            .unwrap_or_else(|e| panic!("{e}"));
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_grid_text() {
        let game = state("▤▤▤\n▤☺☠\nΨ");
        assert_eq!(grid_text(&game), "▤▤▤\n▤☺☠\nΨ\n");
    }

    #[test]
    fn test_grid_lines_styles() {
        let game = state("▤☺");
        let lines = grid_lines(&game);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].style.bg, Some(Color::DarkGray));
        assert_eq!(lines[0].spans[1].style.fg, Some(Color::DarkGray));
        assert_eq!(lines[0].spans[1].content, "☺");
    }

    #[test]
    fn test_screen_shows_health_and_map() {
        let game = state("▤☺ ☠▤");
        let text = screen(&game);
        assert!(text.contains("Health: ♥♥♥ 3/3"));
        assert!(text.contains("Enemies: 1"));
        assert!(text.contains("Move"));
    }

    #[test]
    fn test_health_bar_is_capped() {
        assert_eq!(health_bar(2, 3), "♥♥♡");
        assert_eq!(health_bar(0, 3), "♡♡♡");
        assert_eq!(health_bar(4_000_000_000, 4_000_000_000).chars().count(), 10);
        assert_eq!(health_bar(3, 4_000_000_000), "♥♥♥♡♡♡♡♡♡♡");
    }

    #[test]
    fn test_screen_shows_status() {
        let mut game = state("☺ ");
        game.interact();
        assert!(screen(&game).contains("Interacting at (0, 0)"));
    }
}
