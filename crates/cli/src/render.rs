//! Text and JSON renderings of results, shapes, units and markers.

use luas_calc::{MeasurementUnit, NumberFormatter, Shape, ShapeResult};
use luas_geo::{CameraPosition, MarkerBoard, MarkerDistance};
use serde_json::{json, Value};

/// Result block shown after a calculation.
pub fn result_text(result: &ShapeResult, fmt: &NumberFormatter) -> String {
    let symbol = result.unit().symbol();
    let mut lines: Vec<String> = result
        .labelled_dimensions()
        .map(|(label, value)| format!("{label}: {} {symbol}", fmt.format(value)))
        .collect();

    lines.push(format!("Luas: {} {symbol}²", fmt.format(result.area())));
    if let Some(perimeter) = result.perimeter() {
        lines.push(format!("Keliling: {} {symbol}", fmt.format(perimeter)));
    }
    lines.join("\n")
}

/// Machine-readable result with raw and formatted values.
pub fn result_json(result: &ShapeResult, fmt: &NumberFormatter) -> Value {
    let symbol = result.unit().symbol();
    let dimensions: serde_json::Map<String, Value> = result
        .labelled_dimensions()
        .map(|(label, value)| (label.to_string(), json!(value)))
        .collect();

    let mut value = json!({
        "shape": result.shape().key(),
        "unit": symbol,
        "dimensions": dimensions,
        "area": result.area(),
        "area_text": format!("{} {symbol}²", fmt.format(result.area())),
    });
    if let Some(perimeter) = result.perimeter() {
        value["perimeter"] = json!(perimeter);
        value["perimeter_text"] = json!(format!("{} {symbol}", fmt.format(perimeter)));
    }
    value
}

/// One line per shape: key, title and input fields.
pub fn shapes_text() -> String {
    Shape::ALL
        .iter()
        .map(|shape| {
            let def = shape.definition();
            format!("{:<14} {:<16} {}", def.key, def.title, def.dimensions.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every shape with its fields and formula lines.
pub fn shapes_json() -> Value {
    Shape::ALL
        .iter()
        .map(|shape| {
            let def = shape.definition();
            json!({
                "key": def.key,
                "title": def.title,
                "dimensions": def.dimensions,
                "formula": def.formula,
                "has_perimeter": def.has_perimeter(),
            })
        })
        .collect()
}

/// One line per unit: symbol, name and size in meters.
pub fn units_text() -> String {
    MeasurementUnit::ALL
        .iter()
        .map(|unit| {
            format!(
                "{:<3} {:<11} {} m",
                unit.symbol(),
                unit.display_name(),
                unit.to_meter_factor()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every unit with its conversion factor.
pub fn units_json() -> Value {
    MeasurementUnit::ALL
        .iter()
        .map(|unit| {
            json!({
                "symbol": unit.symbol(),
                "name": unit.display_name(),
                "to_meter_factor": unit.to_meter_factor(),
            })
        })
        .collect()
}

/// `value from = converted to`, formatted.
pub fn conversion_text(
    value: f64,
    from: MeasurementUnit,
    converted: f64,
    to: MeasurementUnit,
    fmt: &NumberFormatter,
) -> String {
    format!("{} {from} = {} {to}", fmt.format(value), fmt.format(converted))
}

/// Camera target and zoom.
pub fn camera_text(camera: &CameraPosition) -> String {
    format!("Kamera: {} (zoom {})", camera.target, camera.zoom)
}

/// Every pin on the board, the current location first.
pub fn markers_text(board: &MarkerBoard) -> String {
    if board.is_empty() {
        return "Belum ada marker".to_string();
    }

    board
        .current_location()
        .into_iter()
        .chain(board.markers())
        .map(|m| format!("[{}] {} - {}", m.id, m.title, m.snippet))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ranked markers with their distance.
pub fn nearest_text(ranked: &[MarkerDistance<'_>], fmt: &NumberFormatter) -> String {
    if ranked.is_empty() {
        return "Belum ada marker".to_string();
    }

    let km = fmt.with_precision(2);
    ranked
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{}. {}: {} km", i + 1, d.marker.title, km.format(d.distance_km)))
        .collect::<Vec<_>>()
        .join("\n")
}
