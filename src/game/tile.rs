//! Tile catalog.

/// Display colour of a tile, independent of any terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    /// Terminal default colour.
    Default,
    /// Dark gray (the player).
    DarkGray,
    /// Red (enemies, explosions, bosses).
    Red,
    /// Green (vegetation, hazards).
    Green,
    /// Yellow (projectiles).
    Yellow,
    /// Cyan (aliens).
    Cyan,
    /// Wall foreground.
    Wall,
    /// Wall background.
    WallBackground,
}

/// Kind of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Nothing here.
    Empty,
    /// Impassable wall.
    Wall,
    /// Walkable vegetation.
    Vegetation,
    /// The player.
    Player,
    /// A horizontally patrolling enemy.
    Enemy,
    /// A vertically oscillating alien.
    Alien,
    /// A projectile in flight.
    Projectile,
    /// An explosion.
    Explosion,
    /// A boss.
    Boss,
    /// Radioactive hazard.
    Hazard,
}

/// A single cell of the grid.
///
/// Tiles are immutable values; the catalog below is the only source of tiles.
/// Equality compares the kind only, so two tiles sharing a glyph (projectile
/// and explosion) are still told apart.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Tile {
    /// Kind tag.
    pub kind: TileKind,
    /// Glyph drawn for this tile.
    pub glyph: char,
    /// Foreground colour.
    pub fg: TileColor,
    /// Background colour.
    pub bg: TileColor,
    /// Whether this tile blocks movement into its cell.
    pub tangible: bool,
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Tile {
    const fn new(kind: TileKind, glyph: char, fg: TileColor, bg: TileColor, tangible: bool) -> Self {
        Self {
            kind,
            glyph,
            fg,
            bg,
            tangible,
        }
    }

    /// Empty floor.
    pub const EMPTY: Tile = Tile::new(TileKind::Empty, ' ', TileColor::Default, TileColor::Default, false);
    /// Wall.
    pub const WALL: Tile = Tile::new(TileKind::Wall, '▤', TileColor::Wall, TileColor::WallBackground, true);
    /// Vegetation.
    pub const VEGETATION: Tile = Tile::new(TileKind::Vegetation, '♣', TileColor::Green, TileColor::Default, false);
    /// The player.
    pub const PLAYER: Tile = Tile::new(TileKind::Player, '☺', TileColor::DarkGray, TileColor::Default, true);
    /// Enemy.
    pub const ENEMY: Tile = Tile::new(TileKind::Enemy, '☠', TileColor::Red, TileColor::Default, true);
    /// Alien.
    pub const ALIEN: Tile = Tile::new(TileKind::Alien, 'Ψ', TileColor::Cyan, TileColor::Default, true);
    /// Projectile.
    pub const PROJECTILE: Tile = Tile::new(TileKind::Projectile, '*', TileColor::Yellow, TileColor::Default, true);
    /// Explosion.
    pub const EXPLOSION: Tile = Tile::new(TileKind::Explosion, '*', TileColor::Red, TileColor::Default, true);
    /// Boss.
    pub const BOSS: Tile = Tile::new(TileKind::Boss, '♡', TileColor::Red, TileColor::Default, true);
    /// Radioactive hazard.
    pub const HAZARD: Tile = Tile::new(TileKind::Hazard, '☢', TileColor::Green, TileColor::Default, true);

    /// Look up the catalog tile for a kind.
    #[must_use]
    pub const fn of_kind(kind: TileKind) -> Tile {
        match kind {
            TileKind::Empty => Self::EMPTY,
            TileKind::Wall => Self::WALL,
            TileKind::Vegetation => Self::VEGETATION,
            TileKind::Player => Self::PLAYER,
            TileKind::Enemy => Self::ENEMY,
            TileKind::Alien => Self::ALIEN,
            TileKind::Projectile => Self::PROJECTILE,
            TileKind::Explosion => Self::EXPLOSION,
            TileKind::Boss => Self::BOSS,
            TileKind::Hazard => Self::HAZARD,
        }
    }

    /// Whether this tile is one of the mobile actors (enemy or alien).
    #[must_use]
    pub const fn is_actor(self) -> bool {
        matches!(self.kind, TileKind::Enemy | TileKind::Alien)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::EMPTY
    }
}
