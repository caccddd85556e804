//! Movement and collision resolution
//!
//! `update_entity_position` is the single path by which any entity, player
//! or monster, changes position: apply the raw offset, then revert if the
//! destination is not free. A blocked move is a silent no-op, not an error.
//! The monster variant additionally owns pursuit upkeep: requesting fresh
//! background routes for orcs and consuming waypoints step by step.

use crate::core::{GameConfig, Point};
use crate::entity::{EntityCore, Monster, MonsterId};
use crate::path::PathService;
use crate::world::DungeonMap;

/// Result of a movement attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveOutcome {
    pub moved: bool,
    pub reverted: bool,
}

pub fn update_entity_position(
    map: &DungeonMap,
    entity: &mut EntityCore,
    dx: i32,
    dy: i32,
) -> MoveOutcome {
    if dx == 0 && dy == 0 {
        return MoveOutcome::default();
    }

    let old = entity.position();
    entity.shift(dx, dy);

    if !map.is_position_free(entity.position()) {
        entity.set_position(old);
        return MoveOutcome { moved: false, reverted: true };
    }

    MoveOutcome { moved: true, reverted: false }
}

/// Advance one monster a single step
///
/// Pursuers (orcs) follow their computed route, requesting a refresh in the
/// background when the route is spent or the player is closer than the
/// repath range. Everything else steps toward the player inside the
/// vicinity radius and drifts diagonally outside it.
pub fn update_monster_position(
    map: &DungeonMap,
    paths: &mut PathService,
    config: &GameConfig,
    id: MonsterId,
    monster: &mut Monster,
    player_pos: Point,
) -> MoveOutcome {
    let pos = monster.core.position();

    if let Some(pursuit) = monster.pursuit.as_mut() {
        // drop waypoints already reached
        while pursuit.path.front() == Some(&pos) {
            pursuit.path.pop_front();
        }
        let close = pos.distance(&player_pos) < config.repath_range;
        if pursuit.pending.is_none() && (pursuit.path.is_empty() || close) {
            let seq = paths.request(id, pos, player_pos, map.snapshot());
            pursuit.pending = Some(seq);
        }
    }

    let waypoint = monster
        .pursuit
        .as_ref()
        .and_then(|pursuit| pursuit.path.front().copied());

    let (dx, dy) = match waypoint {
        Some(wp) => pos.step_toward(&wp),
        None if pos.distance(&player_pos) <= config.vicinity_radius => {
            pos.step_toward(&player_pos)
        }
        None => (1, 1),
    };

    let outcome = update_entity_position(map, &mut monster.core, dx, dy);

    if outcome.moved {
        let now = monster.core.position();
        if let Some(pursuit) = monster.pursuit.as_mut() {
            if pursuit.path.front() == Some(&now) {
                pursuit.path.pop_front();
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Appearance, ColorTag, Point};
    use crate::entity::Species;
    use crate::world::DungeonMap;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn entity_at(p: Point) -> EntityCore {
        EntityCore::new(p, 10, 2, Appearance::new('x', ColorTag::Goblin))
    }

    fn open_map(width: i32, height: i32) -> DungeonMap {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        DungeonMap::generate(width, height, 0.0, &mut rng)
    }

    #[test]
    fn blocked_move_reverts_exactly() {
        let map = open_map(10, 10);
        let mut e = entity_at(Point::new(1, 1));
        let outcome = update_entity_position(&map, &mut e, -1, 0); // into the border wall
        assert!(outcome.reverted);
        assert_eq!(e.position(), Point::new(1, 1));
    }

    #[test]
    fn free_move_applies_offset() {
        let map = open_map(10, 10);
        let mut e = entity_at(Point::new(3, 3));
        let outcome = update_entity_position(&map, &mut e, 1, -1);
        assert!(outcome.moved);
        assert_eq!(e.position(), Point::new(4, 2));
    }

    #[test]
    fn far_monster_without_path_drifts_diagonally() {
        let map = open_map(40, 20);
        let mut paths = PathService::new();
        let config = GameConfig::default();
        let mut troll = Monster::new(Species::Troll, Point::new(2, 2));
        let mut roster = crate::entity::Roster::new();
        let id = roster.insert(troll.clone());
        update_monster_position(&map, &mut paths, &config, id, &mut troll, Point::new(35, 18));
        assert_eq!(troll.core.position(), Point::new(3, 3));
    }

    #[test]
    fn near_monster_steps_toward_player() {
        let map = open_map(40, 20);
        let mut paths = PathService::new();
        let config = GameConfig::default();
        let mut goblin = Monster::new(Species::Goblin, Point::new(10, 10));
        let mut roster = crate::entity::Roster::new();
        let id = roster.insert(goblin.clone());
        update_monster_position(&map, &mut paths, &config, id, &mut goblin, Point::new(5, 10));
        assert_eq!(goblin.core.position(), Point::new(9, 10));
    }

    #[test]
    fn orc_with_a_route_follows_it_and_consumes_waypoints() {
        let map = open_map(40, 20);
        let mut paths = PathService::new();
        let config = GameConfig::default();
        let mut orc = Monster::new(Species::Orc, Point::new(5, 5));
        let mut roster = crate::entity::Roster::new();
        let id = roster.insert(orc.clone());
        let pursuit = orc.pursuit.as_mut().unwrap();
        pursuit.path = vec![Point::new(6, 5), Point::new(7, 5)].into();
        pursuit.pending = Some(0); // suppress a refresh request

        update_monster_position(&map, &mut paths, &config, id, &mut orc, Point::new(30, 5));
        assert_eq!(orc.core.position(), Point::new(6, 5));
        assert_eq!(
            orc.pursuit.as_ref().unwrap().path.front(),
            Some(&Point::new(7, 5))
        );
    }

    #[test]
    fn orc_with_spent_route_requests_a_refresh() {
        let map = open_map(40, 20);
        let mut paths = PathService::new();
        let config = GameConfig::default();
        let mut orc = Monster::new(Species::Orc, Point::new(5, 5));
        let mut roster = crate::entity::Roster::new();
        let id = roster.insert(orc.clone());

        update_monster_position(&map, &mut paths, &config, id, &mut orc, Point::new(30, 5));
        assert!(orc.pursuit.as_ref().unwrap().pending.is_some());
    }

    proptest! {
        /// Either the entity lands on a free cell or it ends up exactly
        /// where it started, for any starting cell and unit offset.
        #[test]
        fn position_is_free_or_unchanged(
            x in 1i32..19, y in 1i32..9,
            dx in -1i32..=1, dy in -1i32..=1,
            seed in 0u64..32,
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let map = DungeonMap::generate(20, 10, 0.2, &mut rng);
            let start = Point::new(x, y);
            prop_assume!(map.is_position_free(start));
            let mut e = entity_at(start);
            update_entity_position(&map, &mut e, dx, dy);
            prop_assert!(map.is_position_free(e.position()) || e.position() == start);
            if !map.is_position_free(start.offset(dx, dy)) {
                prop_assert_eq!(e.position(), start);
            }
        }
    }
}
