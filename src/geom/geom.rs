use geo::{BoundingRect, Centroid, Coord, MultiPolygon, Point, Rect, Validation};
use rstar::RTree;

use super::bbox::{envelope, BoundingBox};

/// R-tree over the bounding boxes of one year's district shapes.
#[derive(Debug, Clone)]
pub(crate) struct SpatialIndex {
    rtree: RTree<BoundingBox>,
}

impl SpatialIndex {
    /// Index `shapes` by position. Empty shapes have no bounding box and are
    /// left out of the tree.
    pub(crate) fn new(shapes: &[MultiPolygon<f64>]) -> Self {
        Self {
            rtree: RTree::bulk_load(
                shapes.iter().enumerate()
                    .filter_map(|(i, shape)| shape.bounding_rect().map(|rect| BoundingBox::new(i, rect)))
                    .collect()
            ),
        }
    }

    /// Positions of all shapes whose bounding box touches `shape`'s bounding
    /// box, in ascending order.
    pub(crate) fn candidates(&self, shape: &MultiPolygon<f64>) -> Vec<usize> {
        let Some(rect) = shape.bounding_rect() else { return Vec::new() };
        let mut found = self.rtree.locate_in_envelope_intersecting(&envelope(&rect))
            .map(|bbox| bbox.idx())
            .collect::<Vec<_>>();
        found.sort_unstable();
        found
    }
}

/// Returns a description of the first problem found with `shape`, or `None`
/// if it is non-empty and topologically valid.
pub(crate) fn invalid_reason(shape: &MultiPolygon<f64>) -> Option<String> {
    if shape.0.is_empty() {
        return Some("geometry is empty".to_string());
    }
    if shape.0.iter().any(|polygon| polygon.exterior().0.len() < 4) {
        return Some("ring has fewer than four coordinates".to_string());
    }
    if !shape.is_valid() {
        return Some("geometry is not valid (self-intersection or overlapping parts)".to_string());
    }
    None
}

/// Compute the bounding rectangle of all shapes.
pub(crate) fn bounds<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> Option<Rect<f64>> {
    shapes.into_iter()
        .filter_map(|shape| shape.bounding_rect())
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}

/// Mean of the centroids of all non-empty shapes.
pub(crate) fn mean_centroid<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> Option<Point<f64>> {
    let (sum, count) = shapes.into_iter()
        .filter_map(|shape| shape.centroid())
        .fold((Coord { x: 0.0, y: 0.0 }, 0usize), |(sum, n), p| (sum + p.0, n + 1));
    (count > 0).then(|| Point::new(sum.x / count as f64, sum.y / count as f64))
}
