use anyhow::Result;
use boundary_shift::{BoundaryStore, DatasetConfig};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::DatasetArgs) -> Result<()> {
    let config = DatasetConfig::from_path(&args.dataset)?;
    let store = BoundaryStore::load(&config)?;

    for year in store.years() {
        let count = store.polygons_for_year(year).map_or(0, |y| y.len());
        println!("{year}\t{count} districts");
    }
    Ok(())
}
