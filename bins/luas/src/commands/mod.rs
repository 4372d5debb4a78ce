//! CLI command implementations

pub mod calc;
pub mod convert;
pub mod format;
pub mod map;
pub mod session;
pub mod shapes;
pub mod units;

use std::time::Duration;

use luas_calc::{ExportOptions, MeasurementUnit, NumberFormatter, Shape};
use luas_cli::errors::{from_shape, from_unit};
use luas_cli::OutputFormat;
use luas_core::config::ConfigSchema;
use luas_geo::{Coordinate, MapSettings};
use serde::Serialize;

/// Settings every command reads.
pub struct Context<'a> {
    pub config: &'a ConfigSchema,
    pub format: OutputFormat,
}

impl<'a> Context<'a> {
    pub fn new(config: &'a ConfigSchema, format: OutputFormat) -> Self {
        Self { config, format }
    }

    /// Formatter from `[display]`, with `precision` taking over when given.
    pub fn formatter(&self, precision: Option<u8>) -> NumberFormatter {
        let display = &self.config.display;
        NumberFormatter::new(precision.map_or(display.precision, usize::from))
            .with_grouping(display.grouping)
    }

    /// Export settings from `[export]` and `[display]`.
    pub fn export_options(&self, precision: Option<u8>) -> ExportOptions {
        ExportOptions {
            include_formula: self.config.export.include_formula,
            formatter: self.formatter(precision),
        }
    }

    /// `unit` if given, the configured default otherwise.
    pub fn unit_or_default(&self, unit: Option<&str>) -> anyhow::Result<MeasurementUnit> {
        parse_unit(unit.unwrap_or(&self.config.display.default_unit))
    }

    pub fn map_settings(&self) -> MapSettings {
        let map = &self.config.map;
        MapSettings {
            default_center: Coordinate::new(map.default_latitude, map.default_longitude),
            default_zoom: map.default_zoom,
            search_zoom: map.search_zoom,
            marker_zoom: map.marker_zoom,
            location_zoom: map.location_zoom,
        }
    }

    pub fn location_timeout(&self) -> Option<Duration> {
        self.config.map.location_timeout_secs.map(Duration::from_secs)
    }
}

pub fn parse_shape(name: &str) -> anyhow::Result<Shape> {
    name.parse().map_err(|e| from_shape(&e).into())
}

pub fn parse_unit(name: &str) -> anyhow::Result<MeasurementUnit> {
    name.parse().map_err(|e| from_unit(&e).into())
}

/// Pretty-printed JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
