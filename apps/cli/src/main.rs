use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use pingtower_checks::CheckType;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "pingtower", version, about = "Validate and submit PingTower checks")]
struct Cli {
    /// Config file, defaults to $XDG_CONFIG_HOME/pingtower/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a JSON check payload
    Validate {
        file: PathBuf,
        /// Treat the payload as a partial update
        #[arg(long)]
        update: bool,
    },
    /// Print a ready to edit check payload
    Template {
        /// http, tcp or ping
        kind: CheckType,
        #[arg(long, default_value = "basic")]
        variant: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        target: Option<String>,
    },
    /// Check a target and suggest fixes
    Suggest { kind: CheckType, target: String },
    /// Validate a payload and create the check through the API
    Submit { file: PathBuf },
    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logger::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file, update } => commands::validate(&file, update),
        Command::Template { kind, variant, name, target } => {
            commands::template(kind, &variant, name, target)
        }
        Command::Suggest { kind, target } => Ok(commands::suggest(kind, &target)),
        Command::Submit { file } => {
            let config = config::Config::from_config(cli.config.as_ref())?;
            commands::submit(&config, &file).await
        }
        Command::Config => {
            let config = config::Config::from_config(cli.config.as_ref())?;
            print!("{config}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
