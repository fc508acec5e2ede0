//! Terminal entry point.
use std::io;

use anyhow::Result;
use arena_client::{ArenaApp, CliConfig, logging};
use arena_core::PcgRng;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    let seed = config.resolve_seed();
    tracing::info!(seed, "starting arena");

    let mut app = ArenaApp::new(io::stdin().lock(), io::stdout().lock());
    let winner = app.run(PcgRng::new(seed))?;

    tracing::info!(winner = winner.name(), "match over");
    Ok(())
}
