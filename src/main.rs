//! Terminal Pong runner (default binary).
//!
//! Two paddles, two balls, one life: the game ends as soon as any ball
//! leaves the field on the left or right.
//!
//! Controls: `W`/`S` move the left paddle, `I`/`K` the right one.
//! `Esc`, `q` or `Ctrl+C` quit.
//!
//! Logging goes to stderr and is off unless `RUST_LOG` is set, because
//! stderr shares the terminal with the play field.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tui_pong::core::Scene;
use tui_pong::engine::Game;
use tui_pong::term::TerminalPlatform;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut game = Game::initialize(TerminalPlatform::new(), Scene::default())?;
    let reason = game.run_loop();
    tracing::info!(?reason, "exiting");
    Ok(())
}
