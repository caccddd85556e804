//! Gloomdelve - turn-based terminal dungeon crawler
//!
//! The simulation core lives in [`game`]; [`path`] provides the A* engine
//! and its background service, [`entity`] the player/monster model and
//! [`world`] the level layout. Terminal input and rendering are thin
//! crossterm wrappers in [`ui`].

pub mod core;
pub mod entity;
pub mod game;
pub mod path;
pub mod ui;
pub mod world;
