use std::sync::Arc;

use geo::{Area, BooleanOps, Intersects, MultiPolygon};

use crate::boundary::BoundaryYear;
use crate::geom::scale_about_centroid;
use super::IntersectionEngine;

/// One district of the comparison year that overlaps the target, clipped to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlap {
    /// Position of the overlapping district in the comparison year.
    pub index: usize,
    pub label: Arc<str>,
    /// `target ∩ district`. Empty or zero-area when the two only share a border.
    pub geometry: MultiPolygon<f64>,
}

impl Overlap {
    /// Planar area of the clipped region, in squared degrees.
    #[inline]
    pub fn area(&self) -> f64 { self.geometry.unsigned_area() }

    /// True when the overlap is only a shared border (no area).
    #[inline]
    pub fn is_boundary_touch(&self) -> bool { self.area() == 0.0 }
}

impl IntersectionEngine {
    /// Districts of `comparison` (other than `exclude_label`) that intersect
    /// `target`, each with the part of `target` it covers.
    ///
    /// Results follow the order of `comparison`. Border-only contacts are kept
    /// with an empty or zero-area geometry. An empty `target` has no overlaps.
    pub fn find_overlaps(&self,
        comparison: &BoundaryYear,
        target: &MultiPolygon<f64>,
        exclude_label: &str,
    ) -> Vec<Overlap> {
        if target.0.is_empty() { return Vec::new() }

        comparison.candidates(target).into_iter()
            .filter_map(|index| comparison.get(index).map(|district| (index, district)))
            .filter(|(_, district)| district.label() != exclude_label)
            .filter(|(_, district)| district.shape().intersects(target))
            .map(|(index, district)| Overlap {
                index,
                label: district.label_arc().clone(),
                geometry: target.intersection(district.shape()),
            })
            .collect()
    }

    /// Positions of districts in `comparison` (other than `exclude_label`)
    /// that intersect `counterpart` after it is shrunk about its centroid by
    /// the configured scale factor.
    ///
    /// Used when a district has no same-named entry in `comparison`: the
    /// shrunk counterpart only reaches districts that share its core area,
    /// not neighbors along its border. An empty result means no equivalent.
    pub fn find_scaled_overlaps(&self,
        comparison: &BoundaryYear,
        counterpart: &MultiPolygon<f64>,
        exclude_label: &str,
    ) -> Vec<usize> {
        let Some(proxy) = scale_about_centroid(counterpart, self.config.scale_factor) else {
            return Vec::new();
        };

        comparison.candidates(&proxy).into_iter()
            .filter(|&index| comparison.get(index).is_some_and(|district| {
                district.label() != exclude_label && district.shape().intersects(&proxy)
            }))
            .collect()
    }
}
