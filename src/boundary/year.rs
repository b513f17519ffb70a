use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::BoundaryError;

/// An election cycle, identified by its four-digit year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub u16);

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u16>()
            .map(Year)
            .map_err(|_| BoundaryError::InvalidYear(s.to_string()))
    }
}
