//! Domain constraints on dimension input.
//!
//! Checks run condition by condition across all fields: every field is
//! checked for emptiness before any is parsed, every field is parsed before
//! any sign check, and so on. The first field failing the first failing
//! condition is reported and nothing after it runs.

use crate::error::{CalcError, Result};
use crate::parser::{parse_number, ParsedInput};

/// Smallest accepted dimension.
pub const MIN_DIMENSION: f64 = 0.0001;

/// Largest accepted dimension.
pub const MAX_DIMENSION: f64 = 1_000_000.0;

/// Parses and validates one raw field per label.
///
/// `labels` and `raw` are matched by position; the caller guarantees equal
/// lengths.
pub fn validate_inputs<S: AsRef<str>>(labels: &[&str], raw: &[S]) -> Result<Vec<f64>> {
    let parsed: Vec<ParsedInput> = raw.iter().map(|r| parse_number(r.as_ref())).collect();

    if let Some(i) = parsed.iter().position(|p| *p == ParsedInput::Missing) {
        return Err(CalcError::EmptyInput { field: label(labels, i) });
    }

    let mut values = Vec::with_capacity(parsed.len());
    for (i, p) in parsed.iter().enumerate() {
        match p.value() {
            Some(v) => values.push(v),
            None => {
                return Err(CalcError::InvalidFormat {
                    field: label(labels, i),
                    input: raw[i].as_ref().trim().to_string(),
                });
            }
        }
    }

    validate_values(labels, &values)?;
    Ok(values)
}

/// Applies the range constraints to already-parsed values.
pub fn validate_values(labels: &[&str], values: &[f64]) -> Result<()> {
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(CalcError::InvalidFormat {
            field: label(labels, i),
            input: values[i].to_string(),
        });
    }
    if let Some(i) = values.iter().position(|&v| v <= 0.0) {
        return Err(CalcError::NonPositive { field: label(labels, i) });
    }
    if let Some(i) = values.iter().position(|&v| v > MAX_DIMENSION) {
        return Err(CalcError::TooLarge { field: label(labels, i) });
    }
    if let Some(i) = values.iter().position(|&v| v < MIN_DIMENSION) {
        return Err(CalcError::TooSmall { field: label(labels, i) });
    }
    Ok(())
}

/// Validates a single value.
pub fn validate_value(label: &str, value: f64) -> Result<f64> {
    validate_values(&[label], &[value]).map(|()| value)
}

fn label(labels: &[&str], index: usize) -> String {
    labels
        .get(index)
        .map_or_else(|| format!("Nilai {}", index + 1), |l| (*l).to_string())
}
