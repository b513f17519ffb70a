use std::fmt;

use super::Year;

/// Errors raised while assembling a year of district boundaries.
///
/// These are data-integrity failures in the upstream boundary files; nothing
/// here is repaired automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryError {
    /// Two districts in the same year share a label.
    DuplicateLabel { year: Year, label: String },
    /// A district's geometry is empty, degenerate, or self-intersecting.
    InvalidGeometry { year: Year, label: String, reason: String },
    /// A district tagged with one year was added to another year's set.
    YearMismatch { expected: Year, found: Year, label: String },
    /// A year string could not be parsed.
    InvalidYear(String),
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel { year, label } =>
                write!(f, "duplicate district label {label:?} in year {year}"),
            Self::InvalidGeometry { year, label, reason } =>
                write!(f, "invalid geometry for {label:?} in year {year}: {reason}"),
            Self::YearMismatch { expected, found, label } =>
                write!(f, "district {label:?} is tagged {found} but was added to year {expected}"),
            Self::InvalidYear(raw) =>
                write!(f, "invalid election year {raw:?}"),
        }
    }
}

impl std::error::Error for BoundaryError {}
