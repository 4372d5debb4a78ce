//! Configuration schema definitions
//!
//! Every section and field has a default, so an empty file is a valid config.

use crate::error::{Error, ErrorCode, Result};
use crate::validation::Validator;
use serde::{Deserialize, Serialize};

/// Unit symbols accepted for `display.default_unit`
pub const UNIT_SYMBOLS: [&str; 6] = ["mm", "cm", "m", "km", "in", "ft"];

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Number presentation
    #[serde(default)]
    pub display: DisplayConfig,

    /// Clipboard export text
    #[serde(default)]
    pub export: ExportConfig,

    /// Map tool
    #[serde(default)]
    pub map: MapConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetrySection,
}

/// How results are presented
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Maximum fractional digits
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Unit symbol selected when a screen opens
    #[serde(default = "default_unit")]
    pub default_unit: String,

    /// Insert thousands separators
    #[serde(default = "default_true")]
    pub grouping: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            default_unit: default_unit(),
            grouping: true,
        }
    }
}

fn default_precision() -> usize {
    4
}

fn default_unit() -> String {
    "cm".to_string()
}

fn default_true() -> bool {
    true
}

/// Clipboard export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Append the formula and derivation lines
    #[serde(default = "default_true")]
    pub include_formula: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_formula: true,
        }
    }
}

/// Map tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial camera latitude
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    /// Initial camera longitude
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,

    /// Initial camera zoom
    #[serde(default = "default_zoom")]
    pub default_zoom: f32,

    /// Zoom used when previewing a coordinate
    #[serde(default = "default_search_zoom")]
    pub search_zoom: f32,

    /// Zoom used after adding a marker
    #[serde(default = "default_search_zoom")]
    pub marker_zoom: f32,

    /// Zoom used when jumping to the device location
    #[serde(default = "default_location_zoom")]
    pub location_zoom: f32,

    /// Give up waiting for a location fix after this many seconds.
    /// Absent means wait until a fix arrives or the request is cancelled.
    #[serde(default)]
    pub location_timeout_secs: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            default_zoom: default_zoom(),
            search_zoom: default_search_zoom(),
            marker_zoom: default_search_zoom(),
            location_zoom: default_location_zoom(),
            location_timeout_secs: None,
        }
    }
}

// Surabaya
fn default_latitude() -> f64 {
    -7.293_019_2
}

fn default_longitude() -> f64 {
    112.807_952_5
}

fn default_zoom() -> f32 {
    12.0
}

fn default_search_zoom() -> f32 {
    15.0
}

fn default_location_zoom() -> f32 {
    16.0
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySection {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ConfigSchema {
    /// Check every value against its allowed range
    pub fn validate(&self) -> Result<()> {
        let map = &self.map;
        let zoom_fields = [
            ("map.default_zoom", map.default_zoom),
            ("map.search_zoom", map.search_zoom),
            ("map.marker_zoom", map.marker_zoom),
            ("map.location_zoom", map.location_zoom),
        ];

        let mut validator = Validator::new()
            .range("display.precision", self.display.precision, 0, 10)
            .one_of("display.default_unit", &self.display.default_unit, &UNIT_SYMBOLS)
            .range("map.default_latitude", map.default_latitude, -90.0, 90.0)
            .range("map.default_longitude", map.default_longitude, -180.0, 180.0)
            .required("telemetry.log_level", &self.telemetry.log_level)
            .custom("map.location_timeout_secs", || match map.location_timeout_secs {
                Some(0) => Some("Must be greater than 0".to_string()),
                _ => None,
            });

        for (field, zoom) in zoom_fields {
            validator = validator.range(field, zoom, 1.0, 21.0);
        }

        validator.validate().to_result().map_err(|e| Error {
            code: ErrorCode::ConfigValidationError,
            ..e
        })
    }
}
