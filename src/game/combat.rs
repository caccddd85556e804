//! Combat resolution
//!
//! An alternating exchange loop: each half-round the acting side lands its
//! full attack power with probability 2/3, otherwise it misses. Both halves
//! run every round, so mutual death is possible. The report is display
//! data for the fight log, never a control-flow signal.

use rand::Rng;

use crate::entity::EntityCore;

/// Ordered textual record of one fight, ending in death line(s)
#[derive(Debug, Clone, Default)]
pub struct FightReport {
    pub lines: Vec<String>,
}

/// Chance of landing a blow: 2 in 3
fn roll_hit(rng: &mut impl Rng) -> bool {
    rng.gen_range(0..3) != 0
}

/// Resolve a fight to the death between two entities
///
/// The attacker strikes first in each round. Callers handle all
/// bookkeeping afterwards (experience, roster pruning, game over).
pub fn fight(
    rng: &mut impl Rng,
    attacker: &mut EntityCore,
    attacker_name: &str,
    defender: &mut EntityCore,
    defender_name: &str,
) -> FightReport {
    let mut report = FightReport::default();
    report.lines.push(format!("{attacker_name} attacks {defender_name}!"));

    while attacker.is_alive() && defender.is_alive() {
        if roll_hit(rng) {
            defender.take_damage(attacker.attack());
            report
                .lines
                .push(format!("{defender_name} loses {} HP!", attacker.attack()));
        } else {
            report.lines.push(format!("{attacker_name} misses!"));
        }
        if roll_hit(rng) {
            attacker.take_damage(defender.attack());
            report
                .lines
                .push(format!("{attacker_name} loses {} HP!", defender.attack()));
        } else {
            report.lines.push(format!("{defender_name} misses!"));
        }
    }

    if !defender.is_alive() {
        report.lines.push(format!("{defender_name} is dead!"));
    }
    if !attacker.is_alive() {
        report.lines.push(format!("{attacker_name} is dead!"));
    }
    tracing::debug!(
        attacker = attacker_name,
        defender = defender_name,
        lines = report.lines.len(),
        "fight resolved"
    );
    report
}
