/// Ministry: a small narrative game of rooms, telescreens and loyalty
///
/// Architecture:
///   engine/   window, input polling, pause menu, bitmap font
///   game/     rooms, avatar, dialog choices, scores, game over

mod engine;
mod game;

use anyhow::{Context, Result};
use ministry_common::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Optional first argument: path to a config file
    let explicit = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::discover(explicit.as_deref()).context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Ministry v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Config: language {}, scale {}x, {} fps, notices {} frames",
        config.language.code(),
        config.window_scale,
        config.fps,
        config.notice_frames
    );

    engine::run(&config)
}
