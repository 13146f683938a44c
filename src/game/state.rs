//! Game state and the rules that mutate it.
//!
//! Every method here takes `&mut self` and runs one complete
//! read-decide-write step. The state is only reachable through the lock in
//! [`crate::game::Game`], so each step is atomic with respect to every other
//! actor and the player.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::SimConfig;
use crate::game::{
    ActorId, ActorKind, AlienActor, Coord, Direction, EnemyActor, Grid, LoadedMap, Tile,
};

/// Status text once health reaches zero.
pub const GAME_OVER_MESSAGE: &str = "💀 GAME OVER";

/// Result of a collision between an actor and the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// The player lost one health point and is still alive.
    Damaged {
        /// Health after the hit.
        health: u32,
    },
    /// The player lost their last health point.
    Killed,
    /// The cooldown has not elapsed; nothing changed.
    Cooldown,
    /// The game is already over; nothing changed.
    Ignored,
}

/// Result of one actor tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The actor moved to the given cell.
    Moved(Coord),
    /// The actor was blocked by the map edge or a tangible tile and turned around.
    Turned,
    /// The actor ran into the player.
    Hit(HitOutcome),
    /// The game is over (or the actor does not exist); nothing happened.
    Halted,
}

/// Result of a player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// The player moved to the given cell.
    Moved(Coord),
    /// The destination is off the map or tangible.
    Blocked,
    /// The player ran into an actor.
    Hit(HitOutcome),
    /// The game is over; input is ignored.
    Ignored,
}

/// An input event from the keyboard collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Leave the game.
    Quit,
    /// Interact with the current cell.
    Interact,
    /// Step in a direction.
    Move(Direction),
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    player: Coord,
    /// Tile the player is standing on.
    last_occupied: Tile,
    status: String,
    enemies: Vec<EnemyActor>,
    aliens: Vec<AlienActor>,
    health: u32,
    starting_health: u32,
    last_damage: Option<Instant>,
    damage_cooldown: Duration,
}

impl GameState {
    /// Build the initial state from a loaded map.
    ///
    /// A starting health of zero yields a game that is already over.
    #[must_use]
    pub fn new(map: LoadedMap, config: &SimConfig) -> Self {
        let status = if config.starting_health == 0 {
            GAME_OVER_MESSAGE.to_owned()
        } else {
            String::new()
        };
        Self {
            grid: map.grid,
            player: map.player,
            last_occupied: Tile::EMPTY,
            status,
            enemies: map.enemies,
            aliens: map.aliens,
            health: config.starting_health,
            starting_health: config.starting_health,
            last_damage: None,
            damage_cooldown: config.damage_cooldown,
        }
    }

    /// The grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player position.
    #[must_use]
    pub const fn player(&self) -> Coord {
        self.player
    }

    /// Tile the player is currently standing on.
    #[must_use]
    pub const fn last_occupied(&self) -> Tile {
        self.last_occupied
    }

    /// Status line message.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Health at game start.
    #[must_use]
    pub const fn starting_health(&self) -> u32 {
        self.starting_health
    }

    /// Instant of the last damage event, if any.
    #[must_use]
    pub const fn last_damage(&self) -> Option<Instant> {
        self.last_damage
    }

    /// All enemies.
    #[must_use]
    pub fn enemies(&self) -> &[EnemyActor] {
        &self.enemies
    }

    /// All aliens.
    #[must_use]
    pub fn aliens(&self) -> &[AlienActor] {
        &self.aliens
    }

    /// Ids of every actor, enemies first.
    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + use<> {
        (0..self.enemies.len())
            .map(ActorId::Enemy)
            .chain((0..self.aliens.len()).map(ActorId::Alien))
    }

    /// Current position of an actor.
    #[must_use]
    pub fn actor_pos(&self, id: ActorId) -> Option<Coord> {
        match id {
            ActorId::Enemy(i) => self.enemies.get(i).map(|e| e.pos),
            ActorId::Alien(i) => self.aliens.get(i).map(|a| a.pos),
        }
    }

    /// The actor standing on `coord`, if any.
    #[must_use]
    pub fn actor_at(&self, coord: Coord) -> Option<ActorId> {
        self.actor_ids().find(|&id| self.actor_pos(id) == Some(coord))
    }

    /// Whether health has reached zero.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.health == 0
    }

    /// Apply a hit from `attacker`, honouring the damage cooldown.
    ///
    /// Used for both directions of a collision: an actor stepping onto the
    /// player and the player stepping onto an actor.
    pub fn resolve_hit(&mut self, attacker: ActorKind, now: Instant) -> HitOutcome {
        if self.is_game_over() {
            return HitOutcome::Ignored;
        }
        if let Some(last) = self.last_damage
            && now.saturating_duration_since(last) < self.damage_cooldown
        {
            return HitOutcome::Cooldown;
        }

        self.health = self.health.saturating_sub(1);
        self.last_damage = Some(now);

        if self.health == 0 {
            GAME_OVER_MESSAGE.clone_into(&mut self.status);
            info!(%attacker, "player killed");
            return HitOutcome::Killed;
        }

        self.status = match attacker {
            ActorKind::Enemy => format!("☠ Hit by an enemy! Health: {}", self.health),
            ActorKind::Alien => format!("Ψ An alien hit you! Health: {}", self.health),
        };
        info!(%attacker, health = self.health, "player damaged");
        HitOutcome::Damaged {
            health: self.health,
        }
    }

    /// Advance one enemy by one step.
    pub fn tick_enemy(&mut self, index: usize, now: Instant) -> TickOutcome {
        self.tick_actor(ActorId::Enemy(index), now)
    }

    /// Advance one alien by one step.
    pub fn tick_alien(&mut self, index: usize, now: Instant) -> TickOutcome {
        self.tick_actor(ActorId::Alien(index), now)
    }

    /// Advance one actor by one step of its bounce pattern.
    ///
    /// Off-map or tangible destinations turn the actor around. Running into
    /// the player goes through [`GameState::resolve_hit`]; the actor never
    /// enters the player's cell and turns around when the hit is still on
    /// cooldown.
    pub fn tick_actor(&mut self, id: ActorId, now: Instant) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Halted;
        }
        let (pos, (dx, dy)) = match id {
            ActorId::Enemy(i) => match self.enemies.get(i) {
                Some(enemy) => (enemy.pos, (enemy.dx(), 0)),
                None => return TickOutcome::Halted,
            },
            ActorId::Alien(i) => match self.aliens.get(i) {
                Some(alien) => (alien.pos, (0, alien.dy())),
                None => return TickOutcome::Halted,
            },
        };

        let Some(target) = pos.offset(dx, dy).filter(|&c| self.grid.in_bounds(c)) else {
            self.turn(id);
            debug!(actor = %id, "turned at map edge");
            return TickOutcome::Turned;
        };

        // The player's own tile is tangible, so this comes before the tangibility check
        if target == self.player {
            let hit = self.resolve_hit(id.kind(), now);
            if hit == HitOutcome::Cooldown {
                self.turn(id);
            }
            return TickOutcome::Hit(hit);
        }

        if self.grid.is_tangible(target) {
            self.turn(id);
            debug!(actor = %id, x = target.x, y = target.y, "turned at obstacle");
            return TickOutcome::Turned;
        }

        self.grid.set(pos, Tile::EMPTY);
        self.grid.set(target, id.kind().tile());
        match id {
            ActorId::Enemy(i) => self.enemies[i].pos = target,
            ActorId::Alien(i) => self.aliens[i].pos = target,
        }
        TickOutcome::Moved(target)
    }

    fn turn(&mut self, id: ActorId) {
        match id {
            ActorId::Enemy(i) => self.enemies[i].turn(),
            ActorId::Alien(i) => self.aliens[i].turn(),
        }
    }

    /// Move the player one step.
    ///
    /// Stepping onto an actor is a hit. The player only moves onto in-bounds,
    /// non-tangible cells, carrying the tile underneath along in the
    /// last-occupied slot.
    pub fn move_player(&mut self, direction: Direction, now: Instant) -> PlayerOutcome {
        if self.is_game_over() {
            return PlayerOutcome::Ignored;
        }
        let Some(target) = self.player.step(direction) else {
            return PlayerOutcome::Blocked;
        };

        let hit = self
            .actor_at(target)
            .map(|id| self.resolve_hit(id.kind(), now));
        if self.is_game_over() {
            return hit.map_or(PlayerOutcome::Ignored, PlayerOutcome::Hit);
        }

        if !self.grid.in_bounds(target) || self.grid.is_tangible(target) {
            return hit.map_or(PlayerOutcome::Blocked, PlayerOutcome::Hit);
        }

        self.grid
            .move_tile(self.player, target, &mut self.last_occupied);
        self.player = target;
        PlayerOutcome::Moved(target)
    }

    /// Describe the current cell in the status line.
    pub fn interact(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.status = format!("Interacting at ({}, {})", self.player.x, self.player.y);
    }

    /// Apply one input event.
    ///
    /// Returns `false` when the game should stop.
    pub fn apply_input(&mut self, event: InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::Quit => return false,
            InputEvent::Interact => self.interact(),
            InputEvent::Move(direction) => {
                let outcome = self.move_player(direction, now);
                debug!(?direction, ?outcome, "player move");
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parse_map;

    fn state(text: &str) -> GameState {
        GameState::new(parse_map(text).unwrap(), &SimConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let game = state("▤☺ ☠▤");
        assert_eq!(game.health(), 3);
        assert_eq!(game.player(), Coord::new(1, 0));
        assert_eq!(game.last_occupied(), Tile::EMPTY);
        assert!(game.status().is_empty());
        assert!(!game.is_game_over());
        assert_eq!(game.actor_at(Coord::new(3, 0)), Some(ActorId::Enemy(0)));
    }

    #[test]
    fn test_enemy_moves_and_clears_cell() {
        let mut game = state("☺▤☠  ▤");
        let now = Instant::now();
        assert_eq!(game.tick_enemy(0, now), TickOutcome::Moved(Coord::new(3, 0)));
        assert_eq!(game.grid().get(Coord::new(2, 0)), Some(Tile::EMPTY));
        assert_eq!(game.grid().get(Coord::new(3, 0)), Some(Tile::ENEMY));
        assert_eq!(game.enemies()[0].pos, Coord::new(3, 0));
    }

    #[test]
    fn test_enemy_turns_at_wall() {
        let mut game = state("☺ ☠▤");
        let now = Instant::now();
        assert_eq!(game.tick_enemy(0, now), TickOutcome::Turned);
        assert!(!game.enemies()[0].facing_right);
        assert_eq!(game.enemies()[0].pos, Coord::new(2, 0));
    }

    #[test]
    fn test_enemy_turns_at_edge() {
        let mut game = state("☺☠");
        let now = Instant::now();
        assert_eq!(game.tick_enemy(0, now), TickOutcome::Turned);
        assert_eq!(game.tick_enemy(0, now), TickOutcome::Hit(HitOutcome::Damaged { health: 2 }));
    }

    #[test]
    fn test_alien_jagged_column() {
        // Row 1 is too short for the alien's column
        let mut game = state("☺ Ψ\n \n   ");
        let now = Instant::now();
        assert_eq!(game.tick_alien(0, now), TickOutcome::Turned);
        assert!(game.aliens()[0].ascending);
        assert_eq!(game.tick_alien(0, now), TickOutcome::Turned);
        assert!(!game.aliens()[0].ascending);
    }

    #[test]
    fn test_cooldown_blocks_and_turns() {
        let mut game = state("   \n Ψ \n ☺ ");
        let start = Instant::now();
        assert_eq!(
            game.tick_alien(0, start),
            TickOutcome::Hit(HitOutcome::Damaged { health: 2 })
        );
        assert!(!game.aliens()[0].ascending);
        assert_eq!(
            game.tick_alien(0, start + Duration::from_millis(500)),
            TickOutcome::Hit(HitOutcome::Cooldown)
        );
        assert!(game.aliens()[0].ascending);
        assert_eq!(game.health(), 2);
        assert_eq!(game.aliens()[0].pos, Coord::new(1, 1));
    }

    #[test]
    fn test_cooldown_expires() {
        let mut game = state("☺Ψ");
        let start = Instant::now();
        assert_eq!(game.resolve_hit(ActorKind::Alien, start), HitOutcome::Damaged { health: 2 });
        assert_eq!(
            game.resolve_hit(ActorKind::Enemy, start + Duration::from_millis(999)),
            HitOutcome::Cooldown
        );
        assert_eq!(
            game.resolve_hit(ActorKind::Enemy, start + Duration::from_secs(1)),
            HitOutcome::Damaged { health: 1 }
        );
        assert!(game.status().contains("enemy"));
        assert_eq!(
            game.resolve_hit(ActorKind::Enemy, start + Duration::from_secs(2)),
            HitOutcome::Killed
        );
        assert_eq!(game.status(), GAME_OVER_MESSAGE);
        assert_eq!(
            game.resolve_hit(ActorKind::Enemy, start + Duration::from_secs(3)),
            HitOutcome::Ignored
        );
        assert_eq!(game.health(), 0);
    }

    #[test]
    fn test_player_walks_over_vegetation() {
        let mut game = state("☺♣ ");
        let now = Instant::now();
        assert_eq!(game.move_player(Direction::Right, now), PlayerOutcome::Moved(Coord::new(1, 0)));
        assert_eq!(game.last_occupied(), Tile::VEGETATION);
        assert_eq!(game.move_player(Direction::Right, now), PlayerOutcome::Moved(Coord::new(2, 0)));
        assert_eq!(game.grid().get(Coord::new(1, 0)), Some(Tile::VEGETATION));
        assert_eq!(game.grid().get(Coord::new(0, 0)), Some(Tile::EMPTY));
    }

    #[test]
    fn test_player_blocked() {
        let mut game = state("☺▤");
        let now = Instant::now();
        assert_eq!(game.move_player(Direction::Right, now), PlayerOutcome::Blocked);
        assert_eq!(game.move_player(Direction::Left, now), PlayerOutcome::Blocked);
        assert_eq!(game.move_player(Direction::Down, now), PlayerOutcome::Blocked);
        assert_eq!(game.player(), Coord::new(0, 0));
    }

    #[test]
    fn test_player_hits_actor() {
        let mut game = state("☺☠");
        let now = Instant::now();
        assert_eq!(
            game.move_player(Direction::Right, now),
            PlayerOutcome::Hit(HitOutcome::Damaged { health: 2 })
        );
        assert_eq!(game.player(), Coord::new(0, 0));
        assert_eq!(game.move_player(Direction::Right, now), PlayerOutcome::Hit(HitOutcome::Cooldown));
        assert_eq!(game.health(), 2);
    }

    #[test]
    fn test_explosion_glyph_does_not_hurt() {
        let mut game = state("☺ ");
        assert!(game.grid.set(Coord::new(1, 0), Tile::EXPLOSION));
        assert_eq!(game.move_player(Direction::Right, Instant::now()), PlayerOutcome::Blocked);
        assert_eq!(game.health(), 3);
    }

    #[test]
    fn test_input_events() {
        let mut game = state(" ☺ ");
        let now = Instant::now();
        assert!(game.apply_input(InputEvent::Interact, now));
        assert_eq!(game.status(), "Interacting at (1, 0)");
        assert!(game.apply_input(InputEvent::Move(Direction::Left), now));
        assert_eq!(game.player(), Coord::new(0, 0));
        assert!(!game.apply_input(InputEvent::Quit, now));
    }

    #[test]
    fn test_game_over_halts_everything() {
        let config = SimConfig {
            damage_cooldown: Duration::ZERO,
            ..SimConfig::default()
        };
        let mut game = GameState::new(parse_map("☺☠ \n   ").unwrap(), &config);
        let now = Instant::now();
        for _ in 0..3 {
            game.move_player(Direction::Right, now);
        }
        assert!(game.is_game_over());
        assert_eq!(game.status(), GAME_OVER_MESSAGE);
        assert_eq!(game.move_player(Direction::Down, now), PlayerOutcome::Ignored);
        assert_eq!(game.tick_enemy(0, now), TickOutcome::Halted);
        game.interact();
        assert_eq!(game.status(), GAME_OVER_MESSAGE);
        assert_eq!(game.player(), Coord::new(0, 0));
    }

    #[test]
    fn test_zero_starting_health_is_game_over() {
        let config = SimConfig {
            starting_health: 0,
            ..SimConfig::default()
        };
        let mut game = GameState::new(parse_map("☺ ☠").unwrap(), &config);
        assert!(game.is_game_over());
        assert_eq!(game.status(), GAME_OVER_MESSAGE);
        assert_eq!(game.tick_enemy(0, Instant::now()), TickOutcome::Halted);
        assert_eq!(game.move_player(Direction::Right, Instant::now()), PlayerOutcome::Ignored);
    }

    #[test]
    fn test_unknown_actor_is_halted() {
        let mut game = state("☺");
        assert_eq!(game.tick_enemy(3, Instant::now()), TickOutcome::Halted);
    }
}
