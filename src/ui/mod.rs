//! Terminal input and rendering seams

pub mod input;
pub mod terminal;

pub use input::{InputSource, TerminalInput};
pub use terminal::{Renderer, TerminalRenderer};
