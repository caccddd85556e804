//! Generation-tagged slot arena for the monster roster
//!
//! Slots are reused across level loads, so every id carries the generation
//! it was issued under. A background path result addressed to a monster
//! that has since been removed resolves to `None` instead of aliasing
//! whatever now occupies the slot.

use crate::entity::Monster;

/// Stable handle to a roster slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonsterId {
    index: u32,
    generation: u32,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    monster: Option<Monster>,
}

/// Ordered collection of the current level's monsters
#[derive(Debug, Default)]
pub struct Roster {
    slots: Vec<Slot>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, monster: Monster) -> MonsterId {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.monster.is_none() {
                slot.generation += 1;
                slot.monster = Some(monster);
                return MonsterId { index: index as u32, generation: slot.generation };
            }
        }
        self.slots.push(Slot { generation: 0, monster: Some(monster) });
        MonsterId { index: (self.slots.len() - 1) as u32, generation: 0 }
    }

    pub fn get(&self, id: MonsterId) -> Option<&Monster> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.monster.as_ref()
    }

    pub fn get_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.monster.as_mut()
    }

    pub fn remove(&mut self, id: MonsterId) -> Option<Monster> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.monster.take()
    }

    /// Drop every monster whose health has reached zero
    pub fn prune_dead(&mut self) {
        for slot in &mut self.slots {
            if matches!(&slot.monster, Some(m) if !m.core.is_alive()) {
                slot.monster = None;
            }
        }
    }

    /// Remove everything; outstanding ids all become stale
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if slot.monster.take().is_some() {
                slot.generation += 1;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.monster.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn ids(&self) -> Vec<MonsterId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.monster.is_some())
            .map(|(index, slot)| MonsterId { index: index as u32, generation: slot.generation })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.slots.iter().filter_map(|slot| slot.monster.as_ref())
    }
}
