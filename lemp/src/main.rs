// External crates
use clap::Parser;
use tracing::debug;

// Internal imports
use lemp_core::{lemp_error, lemp_warning};

// Local modules
mod cli;
mod commands;

use cli::Args;
use commands::execute_command;

fn main() {
    if lemp_logging::init_subscriber().is_err() {
        lemp_warning!("Failed to initialize logging, continuing without diagnostics");
    }

    let args = Args::parse();

    if args.debug {
        debug!(command = ?args.command, "starting lemp");
    }

    if let Err(e) = execute_command(args) {
        lemp_error!("{}", e);
        std::process::exit(1);
    }
}
