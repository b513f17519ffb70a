mod cli;
mod commands;
mod logger;

use cli::{Cli, Commands};
use commands::{aggregate, compare, districts, years};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logger::setup(cli.verbose);
    match &cli.command {
        Commands::Years(args) => years::run(&cli, args),
        Commands::Districts(args) => districts::run(&cli, args),
        Commands::Compare(args) => compare::run(&cli, args),
        Commands::Aggregate(args) => aggregate::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
