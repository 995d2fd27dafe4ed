// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rb - Conference room booking tracker

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod config;
mod error;
mod output;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{book, history};
use std::path::PathBuf;

use crate::config::{Config, Overrides};

#[derive(Parser)]
#[command(
    name = "rb",
    version,
    about = "Conference room booking tracker"
)]
struct Cli {
    /// Booking record file [default: conferences.csv]
    #[arg(long, global = true, env = "RB_RECORDS")]
    records: Option<PathBuf>,

    /// Number of bookable room slots per session (1-15)
    #[arg(long, global = true, env = "RB_CAPACITY")]
    capacity: Option<u8>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Book conferences interactively (default)
    Book,
    /// Show every booking in the record file
    History(history::HistoryArgs),
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let overrides = Overrides {
        records: cli.records,
        capacity: cli.capacity,
    };
    let config = Config::load(&std::env::current_dir()?, overrides)?;

    match cli.command.unwrap_or(Commands::Book) {
        Commands::Book => book::handle(&config),
        Commands::History(args) => history::handle(&config, args),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only)
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
