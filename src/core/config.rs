//! Game configuration with documented constants
//!
//! All tunable magic numbers are collected here with explanations of their
//! purpose. Values can be overridden from a TOML file and from the command
//! line; the defaults reproduce the classic balance.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::{GameError, Result};

/// Configuration for a game session
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Dungeon width in cells, including the outer wall
    pub map_width: i32,

    /// Dungeon height in cells, including the outer wall
    pub map_height: i32,

    /// Seed for the session RNG (map layout, spawns, combat rolls)
    ///
    /// Two sessions with the same seed and the same command sequence play
    /// out identically.
    pub seed: u64,

    /// Probability that an interior cell is generated as a wall
    pub wall_density: f64,

    /// Monster population baseline
    ///
    /// A level at depth `d` spawns `base_monster_count + 2^(d-1)` monsters,
    /// split half goblins, one third orcs, one sixth trolls, remainder
    /// dragons.
    pub base_monster_count: u32,

    /// Distance under which a monster actively steps toward the player
    ///
    /// Monsters outside this radius drift diagonally instead of pursuing.
    pub vicinity_radius: f64,

    /// Distance under which an orc refreshes its pursuit path
    ///
    /// An orc also refreshes whenever its path is empty. Fixed, does not
    /// scale with depth.
    pub repath_range: f64,

    /// Experience awarded to the player for surviving a fight
    pub xp_per_kill: i32,

    /// Exponential base for treasure bonus scaling
    ///
    /// A treasure found at depth `d` grants a bonus of `1.25^d` (rounded
    /// up) to exactly one of health, attack or experience.
    pub treasure_growth: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_width: 80,
            map_height: 24,
            seed: 12345,
            wall_density: 0.08,
            base_monster_count: 10,
            vicinity_radius: 10.0,
            repath_range: 8.0,
            xp_per_kill: 10,
            treasure_growth: 1.25,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing fields fall back to their defaults. Values are validated
    /// before the config is handed out.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    ///
    /// Level generation needs room for the start and end cells plus the
    /// outer wall, the wall density is a probability, and a treasure growth
    /// below 1 would roll zero-value bonuses.
    pub fn validate(&self) -> Result<()> {
        if self.map_width < 5 || self.map_height < 5 {
            return Err(GameError::InvalidConfig(format!(
                "map must be at least 5x5 cells, got {}x{}",
                self.map_width, self.map_height
            )));
        }
        if !(0.0..=1.0).contains(&self.wall_density) {
            return Err(GameError::InvalidConfig(format!(
                "wall_density must be between 0.0 and 1.0, got {}",
                self.wall_density
            )));
        }
        if self.treasure_growth < 1.0 {
            return Err(GameError::InvalidConfig(format!(
                "treasure_growth must be at least 1.0, got {}",
                self.treasure_growth
            )));
        }
        Ok(())
    }

    /// Merge command-line overrides into the loaded configuration
    pub fn apply_overrides(
        &mut self,
        seed: Option<u64>,
        width: Option<i32>,
        height: Option<i32>,
    ) {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        if let Some(width) = width {
            self.map_width = width;
        }
        if let Some(height) = height {
            self.map_height = height;
        }
    }

    /// Total monster population for a level at the given depth
    pub fn monster_count(&self, depth: u32) -> u32 {
        self.base_monster_count + 2u32.saturating_pow(depth.saturating_sub(1))
    }
}
