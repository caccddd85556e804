//! Route computation: the A* engine and its background service

pub mod astar;
pub mod service;

pub use astar::find_path;
pub use service::{PathResult, PathService};
