use appreg::commands;

use clap::{Parser, Subcommand};
use colored::*;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "provision",
        about = "Create or reuse the front-end and API app registrations"
    )]
    Provision(commands::provision::ProvisionArgs),

    #[command(name = "check", about = "Run pre-flight checks")]
    Check(commands::check::CheckArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Provision(args) => commands::provision::run(args).await,
        Commands::Check(args) => commands::check::run(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(appreg::error::exit_code(&e))
        }
    }
}
