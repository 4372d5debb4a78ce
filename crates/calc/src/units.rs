//! Length units and linear conversion.
//!
//! Confirmed dimensions are stored in meters; the display unit only affects
//! what the user sees.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A length unit with a fixed factor to meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeasurementUnit {
    /// mm
    #[serde(rename = "mm")]
    Millimeter,
    /// cm
    #[default]
    #[serde(rename = "cm")]
    Centimeter,
    /// m
    #[serde(rename = "m")]
    Meter,
    /// km
    #[serde(rename = "km")]
    Kilometer,
    /// in
    #[serde(rename = "in")]
    Inch,
    /// ft
    #[serde(rename = "ft")]
    Foot,
}

impl MeasurementUnit {
    /// All units in picker order.
    pub const ALL: [MeasurementUnit; 6] = [
        MeasurementUnit::Millimeter,
        MeasurementUnit::Centimeter,
        MeasurementUnit::Meter,
        MeasurementUnit::Kilometer,
        MeasurementUnit::Inch,
        MeasurementUnit::Foot,
    ];

    /// Canonical storage unit.
    pub const BASE: MeasurementUnit = MeasurementUnit::Meter;

    /// Short symbol, e.g. `cm`.
    pub fn symbol(self) -> &'static str {
        match self {
            MeasurementUnit::Millimeter => "mm",
            MeasurementUnit::Centimeter => "cm",
            MeasurementUnit::Meter => "m",
            MeasurementUnit::Kilometer => "km",
            MeasurementUnit::Inch => "in",
            MeasurementUnit::Foot => "ft",
        }
    }

    /// Name shown in the unit picker.
    pub fn display_name(self) -> &'static str {
        match self {
            MeasurementUnit::Millimeter => "Milimeter",
            MeasurementUnit::Centimeter => "Sentimeter",
            MeasurementUnit::Meter => "Meter",
            MeasurementUnit::Kilometer => "Kilometer",
            MeasurementUnit::Inch => "Inch",
            MeasurementUnit::Foot => "Feet",
        }
    }

    /// Meters per one of this unit. Always > 0.
    pub fn to_meter_factor(self) -> f64 {
        match self {
            MeasurementUnit::Millimeter => 0.001,
            MeasurementUnit::Centimeter => 0.01,
            MeasurementUnit::Meter => 1.0,
            MeasurementUnit::Kilometer => 1000.0,
            MeasurementUnit::Inch => 0.0254,
            MeasurementUnit::Foot => 0.3048,
        }
    }
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a unit name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown unit: {0}")]
pub struct UnknownUnit(pub String);

impl FromStr for MeasurementUnit {
    type Err = UnknownUnit;

    /// Accepts the symbol or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|u| u.symbol() == wanted || u.display_name().to_lowercase() == wanted)
            .ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

/// Rescales `value` from one unit to another.
///
/// ```
/// use luas_calc::units::{convert, MeasurementUnit};
///
/// let cm = convert(2.0, MeasurementUnit::Meter, MeasurementUnit::Centimeter);
/// assert!((cm - 200.0).abs() < 1e-9);
/// ```
#[inline]
pub fn convert(value: f64, from: MeasurementUnit, to: MeasurementUnit) -> f64 {
    value * from.to_meter_factor() / to.to_meter_factor()
}

/// Rescales a value expressed in `unit` to meters.
#[inline]
pub fn to_meters(value: f64, unit: MeasurementUnit) -> f64 {
    convert(value, unit, MeasurementUnit::BASE)
}

/// Rescales a value in meters to `unit`.
#[inline]
pub fn from_meters(value: f64, unit: MeasurementUnit) -> f64 {
    convert(value, MeasurementUnit::BASE, unit)
}
