//! Geographic coordinates, normalised to the precision the forecast service accepts.

use std::fmt;

/// Number of fractional digits the forecast service accepts for a coordinate.
/// Requests with finer precision are answered with `404 Not Found`.
pub const COORDINATE_PRECISION: i32 = 6;

/// A latitude/longitude pair rounded to [`COORDINATE_PRECISION`] decimal digits.
///
/// The fields are private so that every `Coordinate` in circulation is already
/// normalised; construct one with [`Coordinate::normalize`].
///
/// # Examples
///
/// ```
/// use smhi_forecast::Coordinate;
///
/// let stockholm = Coordinate::normalize(59.3258414, 17.7018733);
/// assert_eq!(stockholm.latitude(), 59.325841);
/// assert_eq!(stockholm.longitude(), 17.701873);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Rounds both components to six decimal places (half away from zero at the
    /// sixth digit) and wraps them. Normalising an already normalised coordinate
    /// returns it unchanged.
    pub fn normalize(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round_to_precision(latitude, COORDINATE_PRECISION),
            longitude: round_to_precision(longitude, COORDINATE_PRECISION),
        }
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Builds a coordinate from a `(latitude, longitude)` tuple.
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::normalize(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

pub(crate) fn round_to_precision(value: f64, precision: i32) -> f64 {
    let multiplier = 10f64.powi(precision);
    let rounded = (value * multiplier).round() / multiplier;
    // Collapse -0.0 so it never renders as "-0" in a request path.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
