use anyhow::{Context, Result};
use band_seating::{Config, Console};
use log::info;
use std::io;

fn main() -> Result<()> {
    // Logs go to stderr; keep them quiet unless RUST_LOG asks so prompts stay readable
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Band seating starting...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock())
        .run(&config)
        .context("Console session failed")?;

    info!("Session ended");
    Ok(())
}
