use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use torus_snake::game::{seed_from_clock, GameConfig, GameEngine};
use torus_snake::modes::AutoplayMode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Self-running snake on a wrap-around grid")]
struct Cli {
    /// JSON file with a game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_ms = tick_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so the board on stdout stays intact.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let seed = cli.seed.unwrap_or_else(seed_from_clock);

    info!(
        width = config.grid_width,
        height = config.grid_height,
        tick_ms = config.tick_ms,
        seed,
        "starting run"
    );

    let mut mode = AutoplayMode::new(GameEngine::new(config, seed)?);
    mode.run(&mut stdout().lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = Cli::parse_from(["torus_snake"]);
        assert_eq!(cli.resolve_config().unwrap(), GameConfig::default());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "torus_snake",
            "--width",
            "12",
            "--tick-ms",
            "30",
            "--seed",
            "4",
        ]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.tick_ms, 30);
        assert_eq!(cli.seed, Some(4));
    }

    #[test]
    fn test_invalid_size_rejected() {
        let cli = Cli::parse_from(["torus_snake", "--height", "0"]);
        assert!(cli.resolve_config().is_err());
    }
}
