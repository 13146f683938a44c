//! Map loading.
//!
//! A map is plain text, one grid row per line and one tile per character.
//! Player and actor glyphs mark start positions and are drawn into the grid
//! at their cells. Characters outside the glyph table become empty floor.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{GameError, GameResult};
use crate::game::{AlienActor, Coord, EnemyActor, Grid, Tile, TileKind};

/// Everything a map file describes.
#[derive(Debug, Clone)]
pub struct LoadedMap {
    /// The initial grid.
    pub grid: Grid,
    /// Player start position.
    pub player: Coord,
    /// Enemies in reading order.
    pub enemies: Vec<EnemyActor>,
    /// Aliens in reading order.
    pub aliens: Vec<AlienActor>,
}

/// Map a character of the map file to a tile kind.
#[must_use]
pub fn glyph_kind(ch: char) -> TileKind {
    match ch {
        '▤' => TileKind::Wall,
        '♣' => TileKind::Vegetation,
        '☺' => TileKind::Player,
        '☠' => TileKind::Enemy,
        'Ψ' => TileKind::Alien,
        _ => TileKind::Empty,
    }
}

/// Parse map text.
///
/// # Errors
///
/// Returns [`GameError::MissingPlayer`] if no player glyph appears.
pub fn parse_map(text: &str) -> GameResult<LoadedMap> {
    let mut player = None;
    let mut enemies = Vec::new();
    let mut aliens = Vec::new();
    let mut rows = Vec::new();

    for (y, line) in text.lines().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            let coord = Coord::new(x, y);
            let tile = match glyph_kind(ch) {
                TileKind::Player if player.is_some() => {
                    warn!(x, y, "ignoring extra player start");
                    Tile::EMPTY
                }
                TileKind::Player => {
                    player = Some(coord);
                    Tile::PLAYER
                }
                TileKind::Enemy => {
                    enemies.push(EnemyActor::new(coord));
                    Tile::ENEMY
                }
                TileKind::Alien => {
                    aliens.push(AlienActor::new(coord));
                    Tile::ALIEN
                }
                kind => Tile::of_kind(kind),
            };
            row.push(tile);
        }
        rows.push(row);
    }

    let player = player.ok_or(GameError::MissingPlayer)?;
    debug!(
        rows = rows.len(),
        enemies = enemies.len(),
        aliens = aliens.len(),
        "parsed map"
    );

    Ok(LoadedMap {
        grid: Grid::from_rows(rows),
        player,
        enemies,
        aliens,
    })
}

/// Read and parse a map file.
///
/// # Errors
///
/// Returns [`GameError::MapRead`] if the file cannot be read, or
/// [`GameError::MissingPlayer`] if it has no player glyph.
pub fn load_map(path: &Path) -> GameResult<LoadedMap> {
    let text = fs::read_to_string(path).map_err(|source| GameError::MapRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(&text)
}
