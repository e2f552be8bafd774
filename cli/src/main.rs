mod cli;
mod error;
mod interactive;
mod notes;
mod package;
mod progress;
mod publish;
mod release;
mod ui;
mod webex;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Release {
            version_type,
            force,
            verbose,
        } => release::execute(version_type, force, verbose),
        Commands::Notes { version, verbose } => notes::execute(version, verbose),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
