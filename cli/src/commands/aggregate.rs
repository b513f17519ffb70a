use anyhow::Result;
use boundary_shift::{ResultsTable, Year};
use log::info;

use super::check_output;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::AggregateArgs) -> Result<()> {
    check_output(&args.output, args.force)?;

    info!("[aggregate] reading candidate results from {}", args.input.display());
    let table = ResultsTable::from_candidates_csv(&args.input, Year(args.min_year))?;

    info!("[aggregate] writing {} districts to {}", table.len(), args.output.display());
    table.write_csv(&args.output)
}
