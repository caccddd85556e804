//! Level layout and occupancy

pub mod map;
pub mod tiles;

pub use map::DungeonMap;
pub use tiles::{Tile, TileGrid};
