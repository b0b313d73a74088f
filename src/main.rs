mod actions;
mod cli;
mod error;
mod manifest;
mod models;
mod templates;
mod utils;

use env_logger::{Builder, Env};
use log::error;
use std::process::exit;

fn main() {
    // Initialize logger with default info level
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run() {
        error!("Error: {}", e);
        exit(1);
    }
}

fn run() -> crate::error::Result<()> {
    let _args = cli::run()?;
    Ok(())
}
