//! Mapping of library errors onto the shared error codes
//!
//! The calculator and map crates keep their own error enums with
//! user-facing messages. At the command-line boundary they become
//! [`luas_core::Error`] values so every failure carries a code, an exit
//! status and, where it helps, a suggestion.

use luas_calc::{CalcError, UnknownShape, UnknownUnit};
use luas_core::{Error, ErrorCode};
use luas_geo::GeoError;
use owo_colors::{OwoColorize, Stream};

use crate::output::OutputFormat;

/// Converts a calculator error, keeping its message.
pub fn from_calc(err: &CalcError) -> Error {
    let code = match err {
        CalcError::EmptyInput { .. } => ErrorCode::EmptyInput,
        CalcError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        CalcError::NonPositive { .. } | CalcError::TooLarge { .. } | CalcError::TooSmall { .. } => {
            ErrorCode::OutOfRange
        }
        CalcError::CalculationFailure(_) => ErrorCode::CalculationError,
    };

    let error = Error::new(code, err.to_string());
    match (err, err.field()) {
        (CalcError::CalculationFailure(detail), _) => error.with_context(detail.clone()),
        (CalcError::InvalidFormat { input, .. }, Some(field)) => {
            error.with_context(format!("{field}: '{input}'"))
        }
        (_, Some(field)) => error.with_context(format!("Field: {field}")),
        (_, None) => error,
    }
}

/// Converts a map or location error, keeping its message.
pub fn from_geo(err: &GeoError) -> Error {
    let code = match err {
        GeoError::EmptyInput => ErrorCode::EmptyInput,
        GeoError::InvalidFormat(_) => ErrorCode::InvalidFormat,
        GeoError::LatitudeOutOfRange(_) | GeoError::LongitudeOutOfRange(_) => ErrorCode::OutOfRange,
        GeoError::MarkerNotFound(_) | GeoError::NoMarkers => ErrorCode::MarkerNotFound,
        GeoError::PermissionDenied => ErrorCode::LocationPermissionDenied,
        GeoError::LocationUnavailable => ErrorCode::LocationUnavailable,
        GeoError::LocationTimeout(_) => ErrorCode::LocationTimeout,
    };

    let error = Error::new(code, err.to_string());
    match err {
        GeoError::PermissionDenied => error.with_suggestion("Grant location access and try again"),
        GeoError::LocationTimeout(_) => {
            error.with_suggestion("Raise map.location_timeout_secs or remove it to wait indefinitely")
        }
        _ => error,
    }
}

/// Converts an unrecognised unit name.
pub fn from_unit(err: &UnknownUnit) -> Error {
    Error::unknown_unit(&err.0)
}

/// Converts an unrecognised shape name.
pub fn from_shape(err: &UnknownShape) -> Error {
    Error::unknown_shape(&err.0)
}

/// Prints `err` to stderr in `format`.
pub fn print_error(err: &Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string(&err.to_report()) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{err}"),
        },
        OutputFormat::Text => {
            eprintln!(
                "{} [{}] {}",
                "Error:".if_supports_color(Stream::Stderr, |t| t.red()),
                err.code,
                err.message
            );
            if let Some(context) = &err.context {
                eprintln!("  {}", context.if_supports_color(Stream::Stderr, |t| t.dimmed()));
            }
            if let Some(suggestion) = &err.suggestion {
                eprintln!(
                    "  {} {}",
                    "hint:".if_supports_color(Stream::Stderr, |t| t.cyan()),
                    suggestion
                );
            }
        }
    }
}
