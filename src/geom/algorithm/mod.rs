mod scale;

pub(crate) use scale::scale_about_centroid;
