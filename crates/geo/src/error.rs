//! Error types for the geo crate.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur on the map screen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// One or both coordinate fields are blank
    #[error("Harap isi latitude dan longitude")]
    EmptyInput,

    /// A coordinate field is not a decimal number
    #[error("Format koordinat tidak valid. Gunakan angka desimal.")]
    InvalidFormat(String),

    /// Latitude outside -90..=90
    #[error("Latitude harus antara -90 dan 90")]
    LatitudeOutOfRange(f64),

    /// Longitude outside -180..=180
    #[error("Longitude harus antara -180 dan 180")]
    LongitudeOutOfRange(f64),

    /// No marker with this id
    #[error("Marker #{0} tidak ditemukan")]
    MarkerNotFound(u32),

    /// Clear requested on an empty board
    #[error("Tidak ada marker untuk dihapus")]
    NoMarkers,

    /// Location permission not granted
    #[error("Permission lokasi diperlukan untuk fitur ini")]
    PermissionDenied,

    /// Provider went away before delivering a fix
    #[error("Tidak dapat mendapatkan lokasi saat ini")]
    LocationUnavailable,

    /// No fix within the allowed time
    #[error("Lokasi tidak ditemukan dalam {} detik", .0.as_secs())]
    LocationTimeout(Duration),
}

/// Error code for integration with luas-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Blank coordinate field
    EmptyInput = 10001,
    /// Unparsable coordinate
    InvalidFormat = 10002,
    /// Coordinate out of range
    OutOfRange = 10003,
    /// Unknown marker
    MarkerNotFound = 10004,
    /// Nothing to clear
    NoMarkers = 10005,
    /// Location permission missing
    PermissionDenied = 10006,
    /// No fix delivered
    LocationUnavailable = 10007,
    /// Fix took too long
    LocationTimeout = 10008,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::EmptyInput => GeoErrorCode::EmptyInput,
            GeoError::InvalidFormat(_) => GeoErrorCode::InvalidFormat,
            GeoError::LatitudeOutOfRange(_) | GeoError::LongitudeOutOfRange(_) => {
                GeoErrorCode::OutOfRange
            }
            GeoError::MarkerNotFound(_) => GeoErrorCode::MarkerNotFound,
            GeoError::NoMarkers => GeoErrorCode::NoMarkers,
            GeoError::PermissionDenied => GeoErrorCode::PermissionDenied,
            GeoError::LocationUnavailable => GeoErrorCode::LocationUnavailable,
            GeoError::LocationTimeout(_) => GeoErrorCode::LocationTimeout,
        }
    }

    /// True for errors caused by what the user typed.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GeoError::EmptyInput
                | GeoError::InvalidFormat(_)
                | GeoError::LatitudeOutOfRange(_)
                | GeoError::LongitudeOutOfRange(_)
        )
    }

    /// True for errors raised while obtaining the device location.
    pub fn is_location_error(&self) -> bool {
        matches!(
            self,
            GeoError::PermissionDenied | GeoError::LocationUnavailable | GeoError::LocationTimeout(_)
        )
    }
}
