use anyhow::Result;
use clap::Parser;
use rand::Rng;

use snake_arcade::app::App;
use snake_arcade::game::GameConfig;

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Terminal snake arcade game")]
struct Cli {
    /// Seed for the food spawner's RNG (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stdout; the TUI renders on stderr, so RUST_LOG output can
    // be redirected without disturbing the screen
    init_tracing();

    let config = GameConfig::default();
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());

    tracing::info!(
        cols = config.grid_cols(),
        rows = config.grid_rows(),
        seed,
        "starting session"
    );

    let mut app = App::new(config, seed);
    app.run().await
}
