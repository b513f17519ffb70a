#![doc = "Electoral boundary change detection across redistricting cycles"]
mod boundary;
mod engine;
mod geom;
mod store;
mod view;

#[doc(inline)]
pub use boundary::{normalize_label, BoundaryError, BoundaryYear, District, DistrictInfo, Year};

#[doc(inline)]
pub use engine::{
    Comparison, ConfigError, Direction, EngineConfig, IntersectionEngine, Overlap, QueryError,
    DEFAULT_SCALE_FACTOR,
};

#[doc(inline)]
pub use store::{load_year, BoundaryStore, DatasetConfig, ResultsTable, YearSource, DEFAULT_MIN_YEAR};

#[doc(inline)]
pub use view::{Change, ComparisonView, MapPanel, ViewMode};
