//! worklog library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Delete { .. } => cli::commands::delete::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
    }
}

/// Route diagnostics to stderr; `-v` raises and `-q` silences them.
pub fn init_logging(cli: &Cli) -> AppResult<()> {
    stderrlog::new()
        .module(module_path!())
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .init()?;
    Ok(())
}

/// Entry point used by main.rs
pub fn run(cli: &Cli) -> AppResult<()> {
    // load config once
    let path = Config::config_file(cli.config.as_deref());
    let cfg = Config::load(&path)?;

    dispatch(cli, &cfg)
}
