use anyhow::{Context, Result};
use boundary_shift::{BoundaryStore, DatasetConfig, District, Year};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::DistrictsArgs) -> Result<()> {
    let config = DatasetConfig::from_path(&args.dataset)?;
    let store = BoundaryStore::load(&config)?;

    let labels = match args.year.map(Year) {
        Some(year) => {
            let boundary = store.polygons_for_year(year)
                .with_context(|| format!("[districts] No boundaries loaded for year {year}"))?;
            let mut labels = boundary.iter().map(District::label).collect::<Vec<_>>();
            labels.sort_unstable();
            labels
        }
        None => store.districts(),
    };

    for label in labels {
        println!("{label}");
    }
    Ok(())
}
