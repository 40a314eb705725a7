pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// A dashboard view (or action) selected on the command line.
#[derive(Debug)]
pub enum AppCommand {
    Dashboard,
    Budget,
    Savings,
    Investments,
    Debt,
    Tax,
    Education,
    Profile,
    Export { output: Option<PathBuf> },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("FinMate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Dashboard => cli::dashboard::run(&config),
        AppCommand::Budget => cli::budget::run(&config),
        AppCommand::Savings => cli::savings::run(&config),
        AppCommand::Investments => cli::investments::run(&config),
        AppCommand::Debt => cli::debt::run(&config),
        AppCommand::Tax => cli::tax::run(&config),
        AppCommand::Education => cli::education::run(&config),
        AppCommand::Profile => cli::profile::run(&config),
        AppCommand::Export { output } => cli::export::run(&config, output.as_deref()),
    }
}
