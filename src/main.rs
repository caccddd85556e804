//! Gloomdelve - entry point
//!
//! Loads configuration, sets up logging and the terminal, then drives the
//! fixed turn loop: render, read one command, advance the simulation.
//! Quit and game over are the only exits.

use std::path::PathBuf;

use clap::Parser;

use gloomdelve::core::{GameConfig, Result};
use gloomdelve::game::Game;
use gloomdelve::ui::{InputSource, Renderer, TerminalInput, TerminalRenderer};

#[derive(Debug, Parser)]
#[command(name = "gloomdelve", about = "Turn-based terminal dungeon crawler")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the session seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the map width
    #[arg(long)]
    width: Option<i32>,

    /// Override the map height
    #[arg(long)]
    height: Option<i32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gloomdelve=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.apply_overrides(args.seed, args.width, args.height);
    config.validate()?;

    tracing::info!(seed = config.seed, "starting session");

    let mut game = Game::new(config);
    let mut input = TerminalInput;
    let mut renderer = TerminalRenderer::new()?;

    loop {
        renderer.draw(&game)?;
        if game.should_quit() {
            break;
        }
        let command = input.next_command()?;
        game.step(command);
        if game.is_game_over() {
            // show the final frame and wait for one last key
            renderer.draw(&game)?;
            let _ = input.next_command()?;
            break;
        }
    }
    Ok(())
}
