use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use todokit::app::{log_state_observer, AppState, AppStore};
use todokit::config::Config;
use todokit::ids::generate_id;
use todokit::logging::{init_tracing, LogTarget};
use todokit::replay::{read_actions, replay};

#[derive(Parser)]
#[command(name = "todokit", version, about = "Todo and goal lists driven by a single state store")]
struct Cli {
    /// Path to config file (default: <config dir>/todokit/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Dispatch JSON actions from a file (one per line, `-` for stdin) and print the final state
    Replay {
        input: PathBuf,
        /// Print the state after every dispatch
        #[arg(long)]
        print_each: bool,
    },
    /// Print a freshly generated record id
    Id,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(&config),
        Command::Replay { input, print_each } => run_replay(&config, input, print_each),
        Command::Id => {
            println!("{}", generate_id());
            Ok(())
        }
    }
}

fn run_tui(config: &Config) -> anyhow::Result<()> {
    let log_path = config.logging.file_path();
    init_tracing(&config.logging, LogTarget::File(log_path.clone()))
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let store = Arc::new(AppStore::new());
    if config.logging.log_state {
        store.subscribe(log_state_observer());
    }
    todokit::ui::run(store, &config.ui).context("Terminal UI failed")
}

fn run_replay(config: &Config, input: PathBuf, print_each: bool) -> anyhow::Result<()> {
    init_tracing(&config.logging, LogTarget::Stderr).context("Failed to initialise logging")?;

    let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&input)
            .with_context(|| format!("Failed to open '{}'", input.display()))?;
        Box::new(BufReader::new(file))
    };
    let actions = read_actions(reader)?;

    let store = AppStore::new();
    if config.logging.log_state {
        store.subscribe(log_state_observer());
    }
    if print_each {
        store.subscribe(|state: &AppState| match serde_json::to_string(state) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::warn!("Failed to serialize state: {}", err),
        });
    }

    let applied = replay(&store, actions)?;
    tracing::info!(applied, "Replay complete");

    let state = store.get_state();
    println!("{}", serde_json::to_string_pretty(&*state)?);
    Ok(())
}
