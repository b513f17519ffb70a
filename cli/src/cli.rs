use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Electoral boundary change CLI
#[derive(Parser, Debug)]
#[command(name = "boundary-shift", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the election years in a dataset
    Years(DatasetArgs),

    /// List district names, for all years or one
    Districts(DistrictsArgs),

    /// Show how a district's boundary changed between two years
    Compare(CompareArgs),

    /// Aggregate per-candidate results into per-district info
    Aggregate(AggregateArgs),
}

#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Dataset config (JSON listing boundary files per year)
    #[arg(value_hint = ValueHint::FilePath)]
    pub dataset: PathBuf,
}

#[derive(Args, Debug)]
pub struct DistrictsArgs {
    /// Dataset config (JSON listing boundary files per year)
    #[arg(value_hint = ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// Only list districts of this year
    #[arg(long)]
    pub year: Option<u16>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, ValueEnum)]
pub enum ViewArg {
    /// Static Year vs Year
    #[default]
    Static,
    /// Changes Year over Year
    Changes,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Dataset config (JSON listing boundary files per year)
    #[arg(value_hint = ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// Baseline election year
    pub baseline: u16,

    /// Comparison election year
    pub comparison: u16,

    /// District name (any case / hyphen spacing)
    pub district: String,

    /// Which view to build
    #[arg(long, value_enum, default_value_t)]
    pub mode: ViewArg,

    /// Override the scaled-fallback factor from the dataset config
    #[arg(long)]
    pub scale: Option<f64>,

    /// Output JSON file (stdout if omitted)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Per-candidate results CSV
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output constituency info CSV
    #[arg(value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Drop elections before this year
    #[arg(long, default_value_t = 2006)]
    pub min_year: u16,

    /// Overwrite if the file exists
    #[arg(long)]
    pub force: bool,
}
