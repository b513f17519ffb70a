mod algorithm;
mod bbox;
mod geom;

pub(crate) use algorithm::scale_about_centroid;
pub(crate) use geom::{bounds, invalid_reason, mean_centroid, SpatialIndex};
