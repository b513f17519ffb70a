mod config;
mod overlap;
mod query;

pub use config::{ConfigError, EngineConfig, DEFAULT_SCALE_FACTOR};
pub use overlap::Overlap;
pub use query::{Comparison, Direction, QueryError};

/// Computes where district boundaries overlap between two election years.
///
/// Stateless apart from its configuration: every call works only on the
/// boundary sets it is given, so one engine can serve any number of queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionEngine {
    config: EngineConfig,
}

impl IntersectionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline] pub fn config(&self) -> &EngineConfig { &self.config }
}
