use geo::{Centroid, MultiPolygon, Scale};

/// Uniformly scale `shape` by `factor` about its own centroid.
///
/// A factor below one shrinks the shape toward its centroid, so the result is
/// a proxy for the "core" of the area rather than its edges. Returns `None`
/// for an empty shape, which has no centroid to anchor on.
pub(crate) fn scale_about_centroid(shape: &MultiPolygon<f64>, factor: f64) -> Option<MultiPolygon<f64>> {
    let origin = shape.centroid()?;
    Some(shape.scale_around_point(factor, factor, origin))
}

#[cfg(test)]
mod tests {
    use geo::{Area, BoundingRect, Centroid, MultiPolygon, polygon};

    use super::scale_about_centroid;

    fn square(x0: f64, y0: f64, size: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ]])
    }

    #[test]
    fn shrinks_toward_centroid() {
        let shape = square(0.0, 0.0, 2.0);
        let scaled = scale_about_centroid(&shape, 0.5).unwrap();

        let rect = scaled.bounding_rect().unwrap();
        assert!((rect.min().x - 0.5).abs() < 1e-12);
        assert!((rect.min().y - 0.5).abs() < 1e-12);
        assert!((rect.max().x - 1.5).abs() < 1e-12);
        assert!((rect.max().y - 1.5).abs() < 1e-12);
    }

    #[test]
    fn area_scales_with_square_of_factor() {
        let shape = square(3.0, -1.0, 4.0);
        let scaled = scale_about_centroid(&shape, 0.31).unwrap();
        let expected = shape.unsigned_area() * 0.31 * 0.31;
        assert!((scaled.unsigned_area() - expected).abs() < 1e-9);
    }

    #[test]
    fn centroid_is_preserved() {
        let shape = square(10.0, 20.0, 3.0);
        let before = shape.centroid().unwrap();
        let after = scale_about_centroid(&shape, 0.31).unwrap().centroid().unwrap();
        assert!((before.x() - after.x()).abs() < 1e-9);
        assert!((before.y() - after.y()).abs() < 1e-9);
    }

    #[test]
    fn empty_shape_has_no_scaled_copy() {
        let empty = MultiPolygon::<f64>(vec![]);
        assert!(scale_about_centroid(&empty, 0.31).is_none());
    }
}
