mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::update_cmd::update_command;
use crate::services::reporter::{ConsoleReporter, Reporter};

fn main() {
    let args = CliArgs::parse();
    let reporter = ConsoleReporter;

    match args.command {
        cmd @ Commands::Update { .. } => {
            if let Err(e) = update_command(cmd, &reporter) {
                reporter.error(&format!("Update failed: {e}"));
                std::process::exit(1);
            }
        }
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
