mod district;
mod error;
mod label;
mod set;
mod year;

pub use district::{District, DistrictInfo};
pub use error::BoundaryError;
pub use label::normalize_label;
pub use set::BoundaryYear;
pub use year::Year;
