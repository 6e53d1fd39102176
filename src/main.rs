mod commands;
mod domain;
mod services;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::forecast_cmd::forecast_command;
use crate::commands::simulate_cmd::simulate_command;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Forecast { .. } => forecast_command(cmd),
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
