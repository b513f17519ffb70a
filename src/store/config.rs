use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::boundary::Year;
use crate::engine::EngineConfig;

/// Earliest election year kept from the per-candidate results by default.
pub const DEFAULT_MIN_YEAR: Year = Year(2006);

/// Boundary file for one election year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSource {
    pub year: Year,
    /// GeoJSON FeatureCollection of that year's districts (EPSG:4326).
    pub path: PathBuf,
}

/// Where a dataset's boundaries and election results live, plus engine tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub years: Vec<YearSource>,
    /// Per-candidate election results CSV, aggregated on load.
    #[serde(default)]
    pub results: Option<PathBuf>,
    /// Pre-aggregated `constituency_info` CSV; takes precedence over `results`.
    #[serde(default)]
    pub constituency_info: Option<PathBuf>,
    #[serde(default = "default_min_year")]
    pub min_year: Year,
    #[serde(flatten)]
    pub engine: EngineConfig,
}

fn default_min_year() -> Year { DEFAULT_MIN_YEAR }

impl DatasetConfig {
    /// Read a JSON dataset config. Relative paths inside it are resolved
    /// against the config file's directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("[store::config] Failed to read dataset config: {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&text)
            .with_context(|| format!("[store::config] Failed to parse dataset config {:?}", path))?;
        config.engine.validate()
            .with_context(|| format!("[store::config] Invalid engine settings in {:?}", path))?;

        let base = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(base);
        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| if p.is_relative() { *p = base.join(&*p) };
        self.years.iter_mut().for_each(|source| resolve(&mut source.path));
        self.results.iter_mut().for_each(resolve);
        self.constituency_info.iter_mut().for_each(resolve);
    }
}
