//! Treasure pickups with depth-scaled one-shot bonuses

use rand::Rng;

use crate::core::{Appearance, ColorTag, Depth, Point};
use crate::entity::EntityCore;

/// One-shot stat increment carried by a treasure
///
/// Exactly one field is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bonus {
    pub health: i32,
    pub attack: i32,
    pub exp: i32,
}

/// A non-combat pickup on the dungeon floor
///
/// Zero health and attack: a treasure is never alive and never fights.
#[derive(Debug, Clone)]
pub struct Treasure {
    pub core: EntityCore,
    bonus: Bonus,
}

impl Treasure {
    /// Roll a treasure for the given depth
    ///
    /// The bonus magnitude is `growth^depth`, rounded up, applied to one of
    /// health, attack or experience chosen uniformly.
    pub fn roll(position: Point, depth: Depth, growth: f64, rng: &mut impl Rng) -> Self {
        let magnitude = growth.powi(depth as i32).ceil() as i32;
        let mut bonus = Bonus::default();
        match rng.gen_range(0..3) {
            0 => bonus.health = magnitude,
            1 => bonus.attack = magnitude,
            _ => bonus.exp = magnitude,
        }
        Self {
            core: EntityCore::new(position, 0, 0, Appearance::new('$', ColorTag::Treasure)),
            bonus,
        }
    }

    pub fn bonus(&self) -> Bonus {
        self.bonus
    }
}
