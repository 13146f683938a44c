//! Mobile actors.

use std::fmt;

use crate::game::{Coord, Tile};

/// Kind of a mobile actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    /// Horizontal patroller.
    Enemy,
    /// Vertical oscillator.
    Alien,
}

impl ActorKind {
    /// Tile drawn at the actor's cell.
    #[must_use]
    pub const fn tile(self) -> Tile {
        match self {
            ActorKind::Enemy => Tile::ENEMY,
            ActorKind::Alien => Tile::ALIEN,
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorKind::Enemy => write!(f, "enemy"),
            ActorKind::Alien => write!(f, "alien"),
        }
    }
}

/// Identifies one actor inside a game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorId {
    /// Index into the enemy list.
    Enemy(usize),
    /// Index into the alien list.
    Alien(usize),
}

impl ActorId {
    /// Kind of the identified actor.
    #[must_use]
    pub const fn kind(self) -> ActorKind {
        match self {
            ActorId::Enemy(_) => ActorKind::Enemy,
            ActorId::Alien(_) => ActorKind::Alien,
        }
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorId::Enemy(i) => write!(f, "enemy-{i}"),
            ActorId::Alien(i) => write!(f, "alien-{i}"),
        }
    }
}

/// An enemy bouncing left and right along its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyActor {
    /// Current cell.
    pub pos: Coord,
    /// Moving towards higher columns.
    pub facing_right: bool,
}

impl EnemyActor {
    /// Create an enemy facing right.
    #[must_use]
    pub const fn new(pos: Coord) -> Self {
        Self {
            pos,
            facing_right: true,
        }
    }

    /// Column delta of the next step.
    #[must_use]
    pub const fn dx(&self) -> isize {
        if self.facing_right { 1 } else { -1 }
    }

    /// Reverse direction.
    pub fn turn(&mut self) {
        self.facing_right = !self.facing_right;
    }
}

/// An alien bouncing up and down along its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlienActor {
    /// Current cell.
    pub pos: Coord,
    /// Moving towards row 0.
    pub ascending: bool,
}

impl AlienActor {
    /// Create an alien that descends first.
    #[must_use]
    pub const fn new(pos: Coord) -> Self {
        Self {
            pos,
            ascending: false,
        }
    }

    /// Row delta of the next step.
    #[must_use]
    pub const fn dy(&self) -> isize {
        if self.ascending { -1 } else { 1 }
    }

    /// Reverse direction.
    pub fn turn(&mut self) {
        self.ascending = !self.ascending;
    }
}
