//! Simulation configuration.

use std::time::Duration;

/// Default interval between two ticks of the same actor, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 500;

/// Default interval between two ticks of the same actor.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(DEFAULT_TICK_MS);

/// Default minimum time between two damage events, in milliseconds.
pub const DEFAULT_COOLDOWN_MS: u64 = 1000;

/// Default minimum time between two damage events.
pub const DEFAULT_DAMAGE_COOLDOWN: Duration = Duration::from_millis(DEFAULT_COOLDOWN_MS);

/// Default starting health.
pub const DEFAULT_STARTING_HEALTH: u32 = 3;

/// Largest starting health the command line accepts.
pub const MAX_STARTING_HEALTH: u32 = 99;

/// Default poll timeout of the render loop.
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(50);

/// Default map file.
pub const DEFAULT_MAP_FILE: &str = "map.txt";

/// Tunable parameters of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Sleep between two ticks of an actor.
    pub tick_interval: Duration,
    /// Minimum time between two damage events.
    pub damage_cooldown: Duration,
    /// Health at game start.
    pub starting_health: u32,
    /// How long the render loop waits for input before checking for redraws.
    pub redraw_interval: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            damage_cooldown: DEFAULT_DAMAGE_COOLDOWN,
            starting_health: DEFAULT_STARTING_HEALTH,
            redraw_interval: DEFAULT_REDRAW_INTERVAL,
        }
    }
}
