use std::sync::Arc;

use ahash::AHashMap;
use geo::MultiPolygon;

use crate::geom::{invalid_reason, SpatialIndex};
use super::{BoundaryError, District, Year};

/// All district boundaries for a single election year, in a fixed order.
///
/// Labels are unique within the year and every shape is valid; both are
/// checked once at construction so the intersection engine can treat the
/// set as trusted input.
#[derive(Debug, Clone)]
pub struct BoundaryYear {
    year: Year,
    districts: Vec<District>,
    index: AHashMap<Arc<str>, usize>, // Map between labels and positions in `districts`.
    rtree: SpatialIndex,
}

impl BoundaryYear {
    /// Build a year from its districts, keeping their order.
    pub fn new(year: Year, districts: Vec<District>) -> Result<Self, BoundaryError> {
        let mut index = AHashMap::with_capacity(districts.len());
        for (i, district) in districts.iter().enumerate() {
            if district.year() != year {
                return Err(BoundaryError::YearMismatch {
                    expected: year,
                    found: district.year(),
                    label: district.label().to_string(),
                });
            }
            if let Some(reason) = invalid_reason(district.shape()) {
                return Err(BoundaryError::InvalidGeometry {
                    year,
                    label: district.label().to_string(),
                    reason,
                });
            }
            if index.insert(district.label_arc().clone(), i).is_some() {
                return Err(BoundaryError::DuplicateLabel { year, label: district.label().to_string() });
            }
        }

        let shapes = districts.iter().map(|d| d.shape().clone()).collect::<Vec<_>>();
        Ok(Self { year, rtree: SpatialIndex::new(&shapes), districts, index })
    }

    #[inline] pub fn year(&self) -> Year { self.year }

    #[inline] pub fn len(&self) -> usize { self.districts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.districts.is_empty() }

    #[inline] pub fn districts(&self) -> &[District] { &self.districts }

    #[inline] pub fn get(&self, idx: usize) -> Option<&District> { self.districts.get(idx) }

    /// Position of the district named `label`, if present this year.
    #[inline]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// The district named `label`, if present this year.
    #[inline]
    pub fn find(&self, label: &str) -> Option<&District> {
        self.position(label).map(|i| &self.districts[i])
    }

    #[inline]
    pub fn contains(&self, label: &str) -> bool { self.index.contains_key(label) }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &District> { self.districts.iter() }

    /// Positions of districts whose bounding box touches `shape`'s, ascending.
    #[inline]
    pub(crate) fn candidates(&self, shape: &MultiPolygon<f64>) -> Vec<usize> {
        self.rtree.candidates(shape)
    }
}

impl<'a> IntoIterator for &'a BoundaryYear {
    type Item = &'a District;
    type IntoIter = std::slice::Iter<'a, District>;

    fn into_iter(self) -> Self::IntoIter { self.districts.iter() }
}
