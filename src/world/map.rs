//! Dungeon level layout
//!
//! Deliberately simple generation: a bordered grid with scattered interior
//! walls, regenerated until the exit is reachable from the start. The
//! simulation core only consumes the occupancy interface; nothing here is
//! load-bearing for the turn loop.

use std::sync::Arc;

use rand::Rng;

use crate::core::Point;
use crate::path;
use crate::world::{Tile, TileGrid};

const GENERATION_ATTEMPTS: u32 = 32;

/// The current level: tile occupancy plus designated start and end cells
#[derive(Debug, Clone)]
pub struct DungeonMap {
    tiles: Arc<TileGrid>,
    start: Point,
    end: Point,
}

impl DungeonMap {
    /// Generate a fresh level
    ///
    /// Retries until start and end are mutually reachable, falling back to
    /// an unobstructed grid if random placement keeps failing.
    pub fn generate(width: i32, height: i32, wall_density: f64, rng: &mut impl Rng) -> Self {
        // dimensions and density are validated at the config boundary
        let start = Point::new(1, height / 2);
        let end = Point::new(width - 2, height / 2);

        for _ in 0..GENERATION_ATTEMPTS {
            let mut tiles = Vec::with_capacity((width * height) as usize);
            for y in 0..height {
                for x in 0..width {
                    let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                    let p = Point::new(x, y);
                    if border {
                        tiles.push(Tile::Wall);
                    } else if p == start || p == end {
                        tiles.push(Tile::Floor);
                    } else if rng.gen_bool(wall_density) {
                        tiles.push(Tile::Wall);
                    } else {
                        tiles.push(Tile::Floor);
                    }
                }
            }
            let grid = TileGrid::new(width, height, tiles);
            if path::find_path(&grid, start, end).is_some() {
                return Self { tiles: Arc::new(grid), start, end };
            }
        }

        tracing::warn!(width, height, "level generation kept sealing the exit, using open layout");
        Self { tiles: Arc::new(TileGrid::open(width, height)), start, end }
    }

    /// Regenerate the layout in place
    ///
    /// The previous snapshot stays valid for any background worker still
    /// holding an `Arc` to it; its results are discarded by the staleness
    /// checks upstream.
    pub fn load_level(&mut self, wall_density: f64, rng: &mut impl Rng) {
        let fresh = Self::generate(self.tiles.width(), self.tiles.height(), wall_density, rng);
        *self = fresh;
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn is_position_free(&self, p: Point) -> bool {
        self.tiles.is_free(p)
    }

    /// Uniformly sampled free interior cell
    pub fn random_free_position(&self, rng: &mut impl Rng) -> Point {
        loop {
            let p = Point::new(
                rng.gen_range(1..self.tiles.width() - 1),
                rng.gen_range(1..self.tiles.height() - 1),
            );
            if self.tiles.is_free(p) && p != self.start && p != self.end {
                return p;
            }
        }
    }

    /// Immutable occupancy snapshot shared with background path workers
    pub fn snapshot(&self) -> Arc<TileGrid> {
        Arc::clone(&self.tiles)
    }
}
