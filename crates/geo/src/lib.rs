//! Geospatial helpers for the Luas map tool.
//!
//! This crate provides:
//! - Coordinate parsing with range checks
//! - Haversine distance calculations
//! - A marker board that tracks the camera, markers and the device location
//! - One-shot location requests over a pluggable provider
//!
//! # Example
//!
//! ```
//! use luas_geo::{haversine_distance, Coordinate};
//!
//! let surabaya = Coordinate::parse("-7.2575", "112.7521").unwrap();
//! let jakarta = Coordinate::new(-6.2088, 106.8456);
//!
//! let distance_km = haversine_distance(&surabaya, &jakarta);
//! assert!((distance_km - 663.0).abs() < 10.0);
//! ```

mod error;
mod haversine;
pub mod location;
pub mod markers;

pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{haversine_distance, EARTH_RADIUS_KM};
pub use location::{
    request_current_location, request_current_location_within, ListenerId, LocationCallback,
    LocationFix, LocationProvider, LocationRequest, ManualLocationProvider, Priority,
};
pub use markers::{CameraPosition, MapSettings, Marker, MarkerBoard, MarkerDistance};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate without range checks.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Parses a pair of text fields as typed into the map form.
    ///
    /// Both fields must be non-empty, both must be decimal numbers, and the
    /// values must lie within the latitude and longitude ranges. The first
    /// failing check wins. Surrounding whitespace is ignored when parsing,
    /// but a field holding only whitespace counts as filled and is reported
    /// as malformed.
    ///
    /// ```
    /// use luas_geo::{Coordinate, GeoError};
    ///
    /// assert!(Coordinate::parse(" -7.29 ", "112.80").is_ok());
    /// assert_eq!(Coordinate::parse("", "112.80"), Err(GeoError::EmptyInput));
    /// assert!(matches!(Coordinate::parse("91", "0"), Err(GeoError::LatitudeOutOfRange(_))));
    /// ```
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        if latitude.is_empty() || longitude.is_empty() {
            return Err(GeoError::EmptyInput);
        }

        let lat = parse_degrees(latitude)?;
        let lng = parse_degrees(longitude)?;
        Self::checked(lat, lng)
    }

    /// Creates a coordinate, rejecting out-of-range values.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

fn parse_degrees(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GeoError::InvalidFormat(text.to_string())),
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(-7.2930192, 112.8079525);
        assert_eq!(coord.latitude, -7.2930192);
        assert_eq!(coord.longitude, 112.8079525);
        assert_eq!(coord.to_string(), "-7.2930192, 112.8079525");
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_parse_accepts_trimmed_decimals() {
        let coord = Coordinate::parse(" -7.2575 ", "112.7521\n").unwrap();
        assert_eq!(coord, Coordinate::new(-7.2575, 112.7521));
    }

    #[test]
    fn test_parse_empty_fields() {
        assert_eq!(Coordinate::parse("", ""), Err(GeoError::EmptyInput));
        assert_eq!(Coordinate::parse("-7.2", ""), Err(GeoError::EmptyInput));
        assert_eq!(
            GeoError::EmptyInput.to_string(),
            "Harap isi latitude dan longitude"
        );
    }

    #[test]
    fn test_parse_malformed() {
        let err = Coordinate::parse("-7,25", "112.75").unwrap_err();
        assert_eq!(err, GeoError::InvalidFormat("-7,25".into()));
        assert_eq!(
            err.to_string(),
            "Format koordinat tidak valid. Gunakan angka desimal."
        );
        assert!(Coordinate::parse("inf", "0").is_err());
    }

    #[test]
    fn test_parse_whitespace_only_is_malformed() {
        assert_eq!(
            Coordinate::parse("-7.2", "  "),
            Err(GeoError::InvalidFormat("  ".into()))
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = Coordinate::parse("-90.5", "0").unwrap_err();
        assert_eq!(err.to_string(), "Latitude harus antara -90 dan 90");

        let err = Coordinate::parse("0", "180.01").unwrap_err();
        assert_eq!(err.to_string(), "Longitude harus antara -180 dan 180");

        // latitude is checked first
        assert!(matches!(
            Coordinate::parse("100", "200"),
            Err(GeoError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_accepts_bounds() {
        assert!(Coordinate::parse("90", "-180").is_ok());
        assert!(Coordinate::parse("-90", "180").is_ok());
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (52.5200, 13.4050).into();
        assert_eq!(coord.latitude, 52.5200);
    }
}
