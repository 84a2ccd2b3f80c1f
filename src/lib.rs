//! brandboard library root.
//! Exposes the chat parser and attendance reporter, the assignment sheet
//! queries, and the CLI dispatcher used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::login;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Brands { .. } => cli::commands::brands::handle(cli, cfg, &login(cli, cfg)?),
        Commands::Chats { .. } => cli::commands::chats::handle(cli, cfg, &login(cli, cfg)?),
        Commands::Report { .. } => cli::commands::report::handle(cli, cfg, &login(cli, cfg)?),
        Commands::Export { .. } => cli::commands::export::handle(cli, &login(cli, cfg)?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config wins over the per-user file
    let cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
