//! Fixed-point geographic coordinates.
//!
//! Coordinates are stored as `i32` values scaled by [`COORDINATE_PRECISION`],
//! which gives a resolution of about one centimeter while keeping every
//! location at eight bytes. Each axis may independently hold the
//! [`UNDEFINED_COORDINATE`] sentinel.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of stored units per degree.
pub const COORDINATE_PRECISION: i32 = 10_000_000;

/// Sentinel stored in an axis that has no value.
pub const UNDEFINED_COORDINATE: i32 = i32::MAX;

/// Number of decimal digits written for a coordinate.
const COORDINATE_DECIMALS: usize = 7;

/// A geographic position in fixed-point representation.
///
/// `x` is the longitude and `y` is the latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Option<LatLon>", into = "Option<LatLon>")]
pub struct Location {
    x: i32,
    y: i32,
}

/// Floating point form of a [`Location`], used for (de)serialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self::undefined()
    }
}

impl Location {
    /// Creates a location with both axes undefined.
    pub const fn undefined() -> Self {
        Self {
            x: UNDEFINED_COORDINATE,
            y: UNDEFINED_COORDINATE,
        }
    }

    /// Creates a location from raw fixed-point values.
    pub const fn from_fixed(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a location from degrees.
    ///
    /// The range is not checked. Longitudes beyond about 214.7 degrees
    /// saturate to the undefined sentinel, so untrusted input goes through
    /// [`Location::checked`].
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            x: double_to_fix(lon),
            y: double_to_fix(lat),
        }
    }

    /// Creates a location from degrees, rejecting values outside the
    /// valid latitude and longitude ranges.
    pub fn checked(lat: f64, lon: f64) -> Result<Self, ModelError> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Ok(Self::new(lat, lon))
        } else {
            Err(ModelError::InvalidLocation {
                lat: lat.to_string(),
                lon: lon.to_string(),
            })
        }
    }

    /// Raw fixed-point longitude.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Raw fixed-point latitude.
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn lon(&self) -> f64 {
        fix_to_double(self.x)
    }

    pub fn lat(&self) -> f64 {
        fix_to_double(self.y)
    }

    /// True if both axes hold a value.
    pub fn is_valid(&self) -> bool {
        self.x != UNDEFINED_COORDINATE && self.y != UNDEFINED_COORDINATE
    }

    /// True if at least one axis holds a value.
    pub fn is_defined(&self) -> bool {
        self.x != UNDEFINED_COORDINATE || self.y != UNDEFINED_COORDINATE
    }

    pub fn is_undefined(&self) -> bool {
        !self.is_defined()
    }
}

impl TryFrom<Option<LatLon>> for Location {
    type Error = ModelError;

    fn try_from(value: Option<LatLon>) -> Result<Self, Self::Error> {
        match value {
            Some(LatLon { lat, lon }) => Location::checked(lat, lon),
            None => Ok(Location::undefined()),
        }
    }
}

impl From<Location> for Option<LatLon> {
    fn from(location: Location) -> Self {
        location.is_valid().then(|| LatLon {
            lat: location.lat(),
            lon: location.lon(),
        })
    }
}

fn double_to_fix(value: f64) -> i32 {
    (value * f64::from(COORDINATE_PRECISION)).round() as i32
}

fn fix_to_double(value: i32) -> f64 {
    f64::from(value) / f64::from(COORDINATE_PRECISION)
}

/// Appends a fixed-point coordinate as a decimal number.
///
/// Formatting does not depend on the locale and never uses exponent
/// notation. At most seven decimals are written and trailing zeros are
/// dropped, so `10_000_000` becomes `1` and `-5_000_000` becomes `-0.5`.
pub fn append_location_coordinate(out: &mut String, value: i32) {
    let mut value = i64::from(value);
    if value < 0 {
        out.push('-');
        value = -value;
    }

    let precision = i64::from(COORDINATE_PRECISION);
    out.push_str(&(value / precision).to_string());

    let fraction = value % precision;
    if fraction != 0 {
        let digits = format!("{:0width$}", fraction, width = COORDINATE_DECIMALS);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}

/// Formats a fixed-point coordinate, see [`append_location_coordinate`].
pub fn format_location_coordinate(value: i32) -> String {
    let mut out = String::new();
    append_location_coordinate(&mut out, value);
    out
}
