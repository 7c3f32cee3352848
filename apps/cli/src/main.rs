//! `labwork` command-line front end.
//!
//! Usage examples:
//!   labwork madlib silly cat jumped
//!   labwork guess --max 20
//!   labwork common 1,2,3 3,4,1 --unique
//!   labwork evens 1 2 3 4
//!   labwork --config labwork.json lookup users.json alice bob

mod commands;
mod config;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use labwork_lookup::IndexCache;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "labwork", version, about = "Introductory programming labs")]
struct Args {
    /// JSON config file with `lookup` and `game` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill in a short story
    Madlib {
        adjective: String,
        noun: String,
        /// Past-tense verb, e.g. "jumped"
        verb: String,
    },

    /// Play the number guessing game on stdin/stdout
    Guess {
        /// Lowest possible secret (overrides config)
        #[arg(long)]
        min: Option<i64>,
        /// Highest possible secret (overrides config)
        #[arg(long)]
        max: Option<i64>,
        /// Use a fixed secret instead of a random one
        #[arg(long)]
        secret: Option<i64>,
    },

    /// Print integers present in both comma-separated lists
    Common {
        a: String,
        b: String,
        /// Drop duplicates and sort the result
        #[arg(long)]
        unique: bool,
    },

    /// Print the even numbers, in order
    Evens {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Look up records by key in a JSON array file
    Lookup {
        path: PathBuf,
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,labwork=info")),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?;
    let stdout = io::stdout().lock();

    match args.command {
        Command::Madlib {
            adjective,
            noun,
            verb,
        } => commands::madlib(&adjective, &noun, &verb, stdout),
        Command::Guess { min, max, secret } => {
            let mut game = config.game;
            game.min = min.unwrap_or(game.min);
            game.max = max.unwrap_or(game.max);
            commands::guess(game, secret, io::stdin().lock(), stdout)
        }
        Command::Common { a, b, unique } => commands::common(&a, &b, unique, stdout),
        Command::Evens { numbers } => commands::evens(&numbers, stdout),
        Command::Lookup { path, keys } => {
            let cache = IndexCache::with_config(config.lookup);
            commands::lookup(&cache, &path, &keys, stdout)
        }
    }
}
