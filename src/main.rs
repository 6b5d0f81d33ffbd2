use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use phrasetrain::app::App;
use phrasetrain::config::Config;
use phrasetrain::session::{Randomizer, SeededRandomizer};
use phrasetrain::store::ListStore;
use phrasetrain::ui::console::TerminalConsole;

#[derive(Parser)]
#[command(name = "phrasetrain", version, about = "Terminal phrase list trainer for language learning")]
struct Cli {
    #[arg(short, long, help = "Directory holding the phrase lists")]
    dir: Option<PathBuf>,

    #[arg(short, long, help = "Seed for reproducible practice order")]
    seed: Option<u64>,

    #[arg(long, help = "Do not clear the screen or set the terminal title")]
    no_clear: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("phrasetrain=warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        Config::default()
    });
    if let Some(dir) = cli.dir {
        config.storage_dir = dir;
    }
    if cli.no_clear {
        config.clear_screen = false;
    }

    let store = ListStore::new(&config.storage_dir, &config.extension)?;
    let rng: Box<dyn Randomizer> = match cli.seed {
        Some(seed) => Box::new(SeededRandomizer::from_seed(seed)),
        None => Box::new(SeededRandomizer::from_entropy()),
    };
    let console = TerminalConsole::new(io::stdin().lock(), io::stdout(), config.clear_screen);

    let mut app = App::new(config, store, console, rng);
    app.run()
}
