// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Gridwalk: a real-time terminal grid game with concurrently moving actors.
//!
//! Enemies patrol rows, aliens patrol columns, and a player walks the map.
//! Every actor runs on its own thread; all of them share one game state
//! behind one lock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Terminal UI (input + redraw)      │
//! ├─────────────────────────────────────┤
//! │   Driver (one thread per actor)     │
//! ├─────────────────────────────────────┤
//! │   Game (Mutex<GameState>)           │
//! ├─────────────────────────────────────┤
//! │   Rules, Grid, Tiles                │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod game;

pub use config::SimConfig;
pub use error::{GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{
    ActorId, ActorKind, Coord, Direction, Game, GameState, Grid, InputEvent, Tile, TileKind,
};
