//! Immutable tile grid snapshot
//!
//! The grid is built once per level and never mutated afterwards; the map
//! hands `Arc` clones of it to background pathfinding workers, so readers
//! never contend with the main loop.

use crate::core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
}

/// Flat row-major tile storage with bounds-checked queries
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn new(width: i32, height: i32, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), (width * height) as usize);
        Self { width, height, tiles }
    }

    /// All-floor grid with a wall border
    pub fn open(width: i32, height: i32) -> Self {
        let mut tiles = vec![Tile::Floor; (width * height) as usize];
        for x in 0..width {
            tiles[x as usize] = Tile::Wall;
            tiles[((height - 1) * width + x) as usize] = Tile::Wall;
        }
        for y in 0..height {
            tiles[(y * width) as usize] = Tile::Wall;
            tiles[(y * width + width - 1) as usize] = Tile::Wall;
        }
        Self { width, height, tiles }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn get(&self, p: Point) -> Option<Tile> {
        if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
            return None;
        }
        Some(self.tiles[(p.y * self.width + p.x) as usize])
    }

    /// In bounds and not a wall
    pub fn is_free(&self, p: Point) -> bool {
        matches!(self.get(p), Some(Tile::Floor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_not_free() {
        let grid = TileGrid::open(5, 5);
        assert!(!grid.is_free(Point::new(-1, 2)));
        assert!(!grid.is_free(Point::new(5, 2)));
        assert!(!grid.is_free(Point::new(2, 5)));
    }

    #[test]
    fn open_grid_has_wall_border() {
        let grid = TileGrid::open(4, 3);
        assert!(!grid.is_free(Point::new(0, 1)));
        assert!(!grid.is_free(Point::new(3, 1)));
        assert!(!grid.is_free(Point::new(1, 0)));
        assert!(!grid.is_free(Point::new(1, 2)));
        assert!(grid.is_free(Point::new(1, 1)));
    }
}
