use std::fmt;

use log::{debug, info};

use crate::boundary::{BoundaryYear, District, Year};
use super::{IntersectionEngine, Overlap};

/// What the engine found for the selected district in one of the two years.
#[derive(Debug, Clone, PartialEq)]
pub enum Direction {
    /// The district exists in this year at position `target`. `overlaps`
    /// index into the *other* year: the districts there that cover part of
    /// it. An empty list is a valid zero-overlap result.
    Overlaps { target: usize, overlaps: Vec<Overlap> },
    /// The district does not exist in this year. Its polygon in the other
    /// year (position `counterpart` there) was shrunk and matched against
    /// this year; `matches` index into *this* year. An empty list means no
    /// equivalent district was found.
    Fallback { counterpart: usize, matches: Vec<usize> },
}

impl Direction {
    /// True when the district had no same-named entry in this year.
    #[inline]
    pub fn is_fallback(&self) -> bool { matches!(self, Self::Fallback { .. }) }
}

/// Boundary changes of one district between a baseline and a comparison year.
#[derive(Debug, Clone)]
pub struct Comparison<'a> {
    label: String,
    baseline: &'a BoundaryYear,
    comparison: &'a BoundaryYear,
    /// Baseline-year view: parts of the district that went to other districts.
    pub removed: Direction,
    /// Comparison-year view: parts of the district that came from other districts.
    pub added: Direction,
}

impl<'a> Comparison<'a> {
    #[inline] pub fn label(&self) -> &str { &self.label }

    #[inline] pub fn baseline(&self) -> &'a BoundaryYear { self.baseline }

    #[inline] pub fn comparison(&self) -> &'a BoundaryYear { self.comparison }

    /// The district's own boundary in the baseline year, if it existed then.
    pub fn baseline_district(&self) -> Option<&'a District> {
        self.baseline.find(&self.label)
    }

    /// The district's own boundary in the comparison year, if it exists then.
    pub fn comparison_district(&self) -> Option<&'a District> {
        self.comparison.find(&self.label)
    }

    /// Baseline districts matched by the scaled fallback (the district is new).
    pub fn predecessors(&self) -> Vec<&'a District> {
        fallback_districts(&self.removed, self.baseline)
    }

    /// Comparison districts matched by the scaled fallback (the district was removed).
    pub fn successors(&self) -> Vec<&'a District> {
        fallback_districts(&self.added, self.comparison)
    }

    /// True when the district exists in both years, so a change view is meaningful.
    pub fn has_direct_comparison(&self) -> bool {
        !self.removed.is_fallback() && !self.added.is_fallback()
    }
}

fn fallback_districts<'a>(direction: &Direction, year: &'a BoundaryYear) -> Vec<&'a District> {
    match direction {
        Direction::Fallback { matches, .. } => matches.iter().filter_map(|&i| year.get(i)).collect(),
        Direction::Overlaps { .. } => Vec::new(),
    }
}

/// Reasons a boundary-change query cannot be answered.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The label names no district in either selected year.
    UnknownDistrict { label: String, baseline: Year, comparison: Year },
    /// No boundaries were loaded for the year.
    UnknownYear(Year),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDistrict { label, baseline, comparison } =>
                write!(f, "no district named {label:?} in year {baseline} or {comparison}"),
            Self::UnknownYear(year) =>
                write!(f, "no boundaries loaded for year {year}"),
        }
    }
}

impl std::error::Error for QueryError {}

impl IntersectionEngine {
    /// Compare the district `label` between `baseline` and `comparison`.
    ///
    /// Each year is handled on its own: where the district exists, the other
    /// year's districts are intersected with it; where it does not, its
    /// polygon from the other year goes through the scaled fallback instead.
    pub fn compare<'a>(&self,
        baseline: &'a BoundaryYear,
        comparison: &'a BoundaryYear,
        label: &str,
    ) -> Result<Comparison<'a>, QueryError> {
        let removed = self.direction(baseline, comparison, label);
        let added = self.direction(comparison, baseline, label);

        match (removed, added) {
            (Some(removed), Some(added)) => Ok(Comparison {
                label: label.to_string(),
                baseline,
                comparison,
                removed,
                added,
            }),
            _ => Err(QueryError::UnknownDistrict {
                label: label.to_string(),
                baseline: baseline.year(),
                comparison: comparison.year(),
            }),
        }
    }

    /// Resolve one direction of the query, or `None` if `label` exists in
    /// neither year.
    fn direction(&self, year: &BoundaryYear, other: &BoundaryYear, label: &str) -> Option<Direction> {
        if let Some(target) = year.position(label) {
            let overlaps = self.find_overlaps(other, year.districts()[target].shape(), label);
            debug!("[engine::compare] {label} in {}: {} overlapping districts in {}",
                year.year(), overlaps.len(), other.year());
            return Some(Direction::Overlaps { target, overlaps });
        }

        let counterpart = other.position(label)?;
        let matches = self.find_scaled_overlaps(year, other.districts()[counterpart].shape(), label);
        info!("[engine::compare] {label} absent in {}; scaled fallback from {} matched {} districts",
            year.year(), other.year(), matches.len());
        Some(Direction::Fallback { counterpart, matches })
    }
}
