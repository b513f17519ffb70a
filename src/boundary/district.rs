use std::sync::Arc;

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};

use super::Year;

/// Election attributes joined onto a district from the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictInfo {
    /// Constituency kind, e.g. `GRC` or `SMC`.
    pub constituency_type: String,
    /// Number of seats contested (candidates per slate).
    pub pax_number: u32,
    /// `"; "`-joined `"PARTY: VOTES (PCT%)"` entries.
    pub result: String,
}

/// A district's boundary for one election year.
#[derive(Debug, Clone)]
pub struct District {
    label: Arc<str>,
    year: Year,
    shape: MultiPolygon<f64>,
    info: Option<DistrictInfo>,
}

impl District {
    pub fn new(year: Year, label: impl Into<Arc<str>>, shape: MultiPolygon<f64>) -> Self {
        Self { label: label.into(), year, shape, info: None }
    }

    /// Attach election attributes.
    pub fn with_info(mut self, info: Option<DistrictInfo>) -> Self {
        self.info = info;
        self
    }

    #[inline] pub fn label(&self) -> &str { &self.label }

    #[inline] pub(crate) fn label_arc(&self) -> &Arc<str> { &self.label }

    #[inline] pub fn year(&self) -> Year { self.year }

    #[inline] pub fn shape(&self) -> &MultiPolygon<f64> { &self.shape }

    #[inline] pub fn info(&self) -> Option<&DistrictInfo> { self.info.as_ref() }
}
