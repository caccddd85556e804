//! Monster species and the pursuit capability

use std::collections::VecDeque;

use crate::core::{Appearance, ColorTag, Point};
use crate::entity::EntityCore;

/// Monster species with fixed base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Goblin,
    Orc,
    Troll,
    Dragon,
}

impl Species {
    pub fn base_health(&self) -> i32 {
        match self {
            Species::Goblin => 10,
            Species::Orc => 15,
            Species::Troll => 25,
            Species::Dragon => 40,
        }
    }

    pub fn base_attack(&self) -> i32 {
        match self {
            Species::Goblin => 2,
            Species::Orc => 3,
            Species::Troll => 4,
            Species::Dragon => 6,
        }
    }

    pub fn appearance(&self) -> Appearance {
        match self {
            Species::Goblin => Appearance::new('g', ColorTag::Goblin),
            Species::Orc => Appearance::new('o', ColorTag::Orc),
            Species::Troll => Appearance::new('t', ColorTag::Troll),
            Species::Dragon => Appearance::new('d', ColorTag::Dragon),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Species::Goblin => "Goblin",
            Species::Orc => "Orc",
            Species::Troll => "Troll",
            Species::Dragon => "Dragon",
        }
    }
}

/// Pursuit state owned by monsters that chase along computed routes
///
/// `pending` holds the sequence number of the in-flight background path
/// request; a result carrying any other sequence is stale and discarded.
#[derive(Debug, Clone, Default)]
pub struct Pursuit {
    pub path: VecDeque<Point>,
    pub pending: Option<u64>,
}

/// A monster on the current level
///
/// Only orcs carry a pursuit capability; everything else about a monster is
/// uniform across species.
#[derive(Debug, Clone)]
pub struct Monster {
    pub core: EntityCore,
    pub species: Species,
    pub pursuit: Option<Pursuit>,
}

impl Monster {
    pub fn new(species: Species, position: Point) -> Self {
        let pursuit = match species {
            Species::Orc => Some(Pursuit::default()),
            _ => None,
        };
        Self {
            core: EntityCore::new(
                position,
                species.base_health(),
                species.base_attack(),
                species.appearance(),
            ),
            species,
            pursuit,
        }
    }

    pub fn name(&self) -> &'static str {
        self.species.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_orcs_have_pursuit() {
        let at = Point::new(1, 1);
        assert!(Monster::new(Species::Orc, at).pursuit.is_some());
        assert!(Monster::new(Species::Goblin, at).pursuit.is_none());
        assert!(Monster::new(Species::Troll, at).pursuit.is_none());
        assert!(Monster::new(Species::Dragon, at).pursuit.is_none());
    }

    #[test]
    fn species_stats_are_ordered() {
        let species = [Species::Goblin, Species::Orc, Species::Troll, Species::Dragon];
        for pair in species.windows(2) {
            assert!(pair[0].base_health() < pair[1].base_health());
            assert!(pair[0].base_attack() < pair[1].base_attack());
        }
    }
}
