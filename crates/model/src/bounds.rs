//! Bounding boxes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::location::{Location, format_location_coordinate};

/// An axis-aligned box given by its south-west and north-east corners.
///
/// Either corner may be undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    pub bottom_left: Location,
    pub top_right: Location,
}

impl BoundingBox {
    pub fn new(bottom_left: Location, top_right: Location) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// True if neither corner holds any coordinate.
    pub fn is_undefined(&self) -> bool {
        self.bottom_left.is_undefined() && self.top_right.is_undefined()
    }
}

impl FromStr for BoundingBox {
    type Err = ModelError;

    /// Parses `minlon,minlat,maxlon,maxlat`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidBoundingBox(s.to_string());
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            &[min_lon, min_lat, max_lon, max_lat] => Ok(Self::new(
                Location::checked(min_lat, min_lon)?,
                Location::checked(max_lat, max_lon)?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{},{})",
            format_location_coordinate(self.bottom_left.x()),
            format_location_coordinate(self.bottom_left.y()),
            format_location_coordinate(self.top_right.x()),
            format_location_coordinate(self.top_right.y()),
        )
    }
}
