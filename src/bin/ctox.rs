// src/bin/ctox.rs

use clap::Parser;
use colored::*;
use ctox::cli::{Cli, dispatcher};

/// The main entry point of the `ctox` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = dispatcher::dispatch(Cli::parse()) {
        // A clap error from a handler's own arguments (including `--help`) prints itself.
        if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }

        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}
