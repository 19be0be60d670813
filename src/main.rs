mod cli;
mod config;
mod date;
mod desktop;
mod error;
mod fetch;
mod logging;
mod resolver;
mod run;
mod state;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "daily-wallpaper")]
#[command(about = "Set today's wallpaper from a remote image host, once per day", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: cli::run::RunArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// State management commands
    State {
        #[command(subcommand)]
        command: StateCommands,
    },
}

#[derive(Subcommand)]
enum StateCommands {
    /// Show the state file location and the last applied date
    Show {
        /// Path to the state file
        #[arg(long)]
        state_file: Option<PathBuf>,
    },
    /// Forget the last applied date so the next run changes the wallpaper
    Reset {
        /// Path to the state file
        #[arg(long)]
        state_file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let result = match cli.command {
        Some(Commands::State { command }) => match command {
            StateCommands::Show { state_file } => cli::state::show(state_file),
            StateCommands::Reset { state_file } => cli::state::reset(state_file),
        }
        .map(|()| ExitCode::SUCCESS),
        None => cli::run::run(cli.run),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
