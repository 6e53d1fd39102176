use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast completion dates from a settings YAML file
    Forecast {
        /// Path to settings YAML
        #[arg(short, long)]
        config: String,
    },
    /// Simulate completion dates directly from a history CSV
    Simulate {
        /// History CSV file, one "date,count" row per observed date
        #[arg(short, long)]
        data: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of additional items to forecast
        #[arg(short = 'n', long)]
        number_of_items: usize,
        /// Number of simulation trials
        #[arg(short, long, default_value_t = 10000)]
        iterations: usize,
        /// Seed the random source for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
