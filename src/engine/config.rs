use std::fmt;

use serde::{Deserialize, Serialize};

/// Linear extent kept by the shrunk counterpart in the scaled fallback.
///
/// Tuned by hand: small enough that a district sharing only a border with the
/// counterpart is rejected, large enough that the district the counterpart
/// was carved from still overlaps it.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.31;

/// Tunable parameters of the intersection engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Uniform scale applied about the centroid of the counterpart district
    /// before the fallback intersection test. Must lie in `(0, 1]`.
    pub scale_factor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { scale_factor: DEFAULT_SCALE_FACTOR }
    }
}

impl EngineConfig {
    /// Create a config with the given fallback scale factor.
    pub fn new(scale_factor: f64) -> Result<Self, ConfigError> {
        let config = Self { scale_factor };
        config.validate()?;
        Ok(config)
    }

    /// Check that the parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale_factor > 0.0 && self.scale_factor <= 1.0) {
            return Err(ConfigError::ScaleFactorOutOfRange(self.scale_factor));
        }
        Ok(())
    }
}

/// Rejected engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ScaleFactorOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScaleFactorOutOfRange(factor) =>
                write!(f, "scale factor {factor} is outside (0, 1]"),
        }
    }
}

impl std::error::Error for ConfigError {}
