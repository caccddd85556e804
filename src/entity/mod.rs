//! Entity model: the base movable/attackable unit and its variants

pub mod monster;
pub mod player;
pub mod roster;
pub mod treasure;

pub use monster::{Monster, Pursuit, Species};
pub use player::Player;
pub use roster::{MonsterId, Roster};
pub use treasure::{Bonus, Treasure};

use crate::core::{Appearance, Point};

/// State shared by every entity: position, health, attack power, appearance
///
/// Health is stored signed and may go negative internally; the observable
/// accessor clamps at zero, and "alive" means strictly positive.
#[derive(Debug, Clone)]
pub struct EntityCore {
    position: Point,
    health: i32,
    attack: i32,
    appearance: Appearance,
}

impl EntityCore {
    pub fn new(position: Point, health: i32, attack: i32, appearance: Appearance) -> Self {
        Self { position, health, attack, appearance }
    }

    /// Apply a raw offset, no bounds or collision check
    ///
    /// Validation is the movement resolver's job.
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Observable health, never negative
    pub fn health(&self) -> i32 {
        self.health.max(0)
    }

    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn raise_attack(&mut self, amount: i32) {
        self.attack += amount;
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Appearance, ColorTag};

    fn core(health: i32) -> EntityCore {
        EntityCore::new(Point::new(0, 0), health, 3, Appearance::new('x', ColorTag::Goblin))
    }

    #[test]
    fn alive_iff_health_positive() {
        let mut e = core(2);
        assert!(e.is_alive());
        e.take_damage(2);
        assert!(!e.is_alive());
        assert_eq!(e.health(), 0);
    }

    #[test]
    fn observable_health_clamps_at_zero() {
        let mut e = core(1);
        e.take_damage(100);
        assert_eq!(e.health(), 0);
        assert!(!e.is_alive());
    }

    #[test]
    fn shift_is_unconditional() {
        let mut e = core(1);
        e.shift(-5, 3);
        assert_eq!(e.position(), Point::new(-5, 3));
    }
}
