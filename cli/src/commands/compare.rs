use std::fs::File;

use anyhow::{Context, Result};
use boundary_shift::{BoundaryStore, DatasetConfig, EngineConfig, IntersectionEngine, ViewMode, Year};
use log::{info, warn};

use crate::cli::ViewArg;
use super::check_output;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::CompareArgs) -> Result<()> {
    let config = DatasetConfig::from_path(&args.dataset)?;
    let engine_config = match args.scale {
        Some(scale) => EngineConfig::new(scale).context("[compare] Invalid --scale")?,
        None => config.engine,
    };

    info!("[compare] loading boundaries from {}", args.dataset.display());
    let store = BoundaryStore::load(&config)?;
    let engine = IntersectionEngine::new(engine_config);

    let (baseline, comparison) = (Year(args.baseline), Year(args.comparison));
    let result = store.compare(&engine, baseline, comparison, &args.district)?;
    if !result.has_direct_comparison() {
        warn!("[compare] {} is missing in {baseline} or {comparison}; showing scaled-fallback matches",
            result.label());
    }

    let mode = match args.mode {
        ViewArg::Static => ViewMode::Static,
        ViewArg::Changes => ViewMode::Changes,
    };
    let view = result.view(mode);

    match &args.output {
        Some(path) => {
            check_output(path, args.force)?;
            info!("[compare] writing view to {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("[compare] Failed to create {}", path.display()))?;
            serde_json::to_writer_pretty(file, &view)
                .with_context(|| format!("[compare] Failed to write {}", path.display()))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}
