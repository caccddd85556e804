//! The player entity

use crate::core::{Appearance, ColorTag, Point};
use crate::entity::EntityCore;

const PLAYER_HEALTH: i32 = 100;
const PLAYER_ATTACK: i32 = 5;

#[derive(Debug, Clone)]
pub struct Player {
    pub core: EntityCore,
    exp: i32,
}

impl Player {
    pub fn new(position: Point) -> Self {
        Self {
            core: EntityCore::new(
                position,
                PLAYER_HEALTH,
                PLAYER_ATTACK,
                Appearance::new('@', ColorTag::Player),
            ),
            exp: 0,
        }
    }

    pub fn exp(&self) -> i32 {
        self.exp
    }

    pub fn gain_exp(&mut self, amount: i32) {
        self.exp += amount;
    }

    pub fn name(&self) -> &'static str {
        "Player"
    }
}
