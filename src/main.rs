use anyhow::Result;
use clap::Parser;
use snake_arena::game::{DeathPolicy, GameConfig};
use snake_arena::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake-arena")]
#[command(version, about = "Out-eat rival snakes to the level quota")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "40")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "30")]
    height: usize,

    /// What death does to a snake
    #[arg(long, value_enum, default_value_t = DeathPolicy::Respawn)]
    death_policy: DeathPolicy,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet unless RUST_LOG is set, so logs don't fight the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        death_policy: cli.death_policy,
        ..GameConfig::default()
    };

    let mut human_mode = HumanMode::new(config, cli.seed);
    human_mode.run().await?;

    Ok(())
}
