//! Game layer for gridwalk.
//!
//! Implements the simulation core:
//! - Grid of immutable tiles with bounds and tangibility queries
//! - Enemy (horizontal) and alien (vertical) bounce rules
//! - Player movement with terrain restore
//! - Damage with cooldown, shared by every collision direction
//! - The single lock guarding all of it

mod actor;
mod invariants;
mod loader;
mod map;
mod shared;
mod state;
mod tile;

pub use actor::{ActorId, ActorKind, AlienActor, EnemyActor};
pub use invariants::{InvariantViolation, check_invariants};
pub use loader::{LoadedMap, glyph_kind, load_map, parse_map};
pub use map::{Coord, Direction, Grid};
pub use shared::Game;
pub use state::{GAME_OVER_MESSAGE, GameState, HitOutcome, InputEvent, PlayerOutcome, TickOutcome};
pub use tile::{Tile, TileColor, TileKind};
