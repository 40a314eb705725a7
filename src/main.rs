use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use finmate::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for finmate::AppCommand {
    fn from(cmd: Commands) -> finmate::AppCommand {
        match cmd {
            Commands::Dashboard => finmate::AppCommand::Dashboard,
            Commands::Budget => finmate::AppCommand::Budget,
            Commands::Savings => finmate::AppCommand::Savings,
            Commands::Investments => finmate::AppCommand::Investments,
            Commands::Debt => finmate::AppCommand::Debt,
            Commands::Tax => finmate::AppCommand::Tax,
            Commands::Education => finmate::AppCommand::Education,
            Commands::Profile => finmate::AppCommand::Profile,
            Commands::Export { output } => finmate::AppCommand::Export { output },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the financial overview
    Dashboard,
    /// Display budget and cash flow
    Budget,
    /// Display savings goals
    Savings,
    /// Display the investment portfolio
    Investments,
    /// Display loans and repayment progress
    Debt,
    /// Display tax deductions and insurance
    Tax,
    /// Display learning progress
    Education,
    /// Display profile and settings
    Profile,
    /// Export the dataset and derived metrics as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => finmate::cli::setup::setup(),
        Some(cmd) => finmate::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
