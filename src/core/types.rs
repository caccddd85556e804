//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// A cell on the dungeon grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two cells
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Sign-clamped unit delta from `self` toward `target`
    ///
    /// Each component is -1, 0 or 1.
    pub fn step_toward(&self, target: &Self) -> (i32, i32) {
        ((target.x - self.x).signum(), (target.y - self.y).signum())
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Display color tag, mapped to concrete terminal colors by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Player,
    Goblin,
    Orc,
    Troll,
    Dragon,
    Treasure,
}

/// Glyph and color an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub glyph: char,
    pub color: ColorTag,
}

impl Appearance {
    pub const fn new(glyph: char, color: ColorTag) -> Self {
        Self { glyph, color }
    }
}

/// Dungeon depth counter (monotonically increasing, starts at 1)
pub type Depth = u32;
