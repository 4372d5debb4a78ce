//! Plain-text export of a result, as placed on the clipboard.

use crate::calculator::ShapeResult;
use crate::format::NumberFormatter;
use std::f64::consts::PI;

/// Export settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Append the `Rumus` and `Perhitungan` lines
    pub include_formula: bool,
    /// Formatter for every number in the text
    pub formatter: NumberFormatter,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_formula: true,
            formatter: NumberFormatter::default(),
        }
    }
}

/// Renders the clipboard text for `result`.
///
/// Lines are separated by `\n` with no trailing newline.
///
/// ```
/// use luas_calc::{export_text, ExportOptions, MeasurementUnit, Shape, ShapeCalculator};
///
/// let result = ShapeCalculator::new(Shape::Square)
///     .calculate(&["5"], MeasurementUnit::Centimeter)
///     .unwrap();
/// let text = export_text(&result, &ExportOptions { include_formula: false, ..Default::default() });
/// assert_eq!(text, "=== HASIL PERHITUNGAN PERSEGI ===\nSisi: 5 cm\nLuas: 25 cm²");
/// ```
pub fn export_text(result: &ShapeResult, options: &ExportOptions) -> String {
    let def = result.shape().definition();
    let fmt = &options.formatter;
    let symbol = result.unit().symbol();

    let mut lines = Vec::with_capacity(def.arity() + 6);
    lines.push(format!("=== HASIL PERHITUNGAN {} ===", def.title));

    for (label, value) in result.labelled_dimensions() {
        lines.push(format!("{}: {} {}", label, fmt.format(value), symbol));
    }

    lines.push(format!("Luas: {} {}²", fmt.format(result.area()), symbol));

    if let Some(perimeter) = result.perimeter() {
        lines.push(format!("Keliling: {} {}", fmt.format(perimeter), symbol));
    }

    if options.include_formula {
        lines.extend(def.formula.iter().map(|l| (*l).to_string()));
        lines.push(format!("Perhitungan: Luas = {}", derivation(result, fmt)));
    }

    lines.join("\n")
}

/// Fills the shape's derivation template with the formatted dimensions.
pub fn derivation(result: &ShapeResult, fmt: &NumberFormatter) -> String {
    let template = result.shape().definition().derivation;
    let mut text = template.replace("{pi}", &fmt.with_precision(2).format(PI));
    for (i, value) in result.dimensions().iter().enumerate() {
        text = text.replace(&format!("{{{i}}}"), &fmt.format(*value));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MeasurementUnit, Shape, ShapeCalculator};

    fn calc(shape: Shape, raw: &[&str], unit: MeasurementUnit) -> ShapeResult {
        ShapeCalculator::new(shape).calculate(raw, unit).unwrap()
    }

    #[test]
    fn test_rectangle_export_with_formula() {
        let result = calc(Shape::Rectangle, &["4", "2.5"], MeasurementUnit::Meter);
        let text = export_text(&result, &ExportOptions::default());
        let expected = "\
=== HASIL PERHITUNGAN PERSEGI PANJANG ===
Panjang: 4 m
Lebar: 2.5 m
Luas: 10 m²
Keliling: 13 m
Rumus Luas: Panjang × Lebar
Rumus Keliling: 2 × (Panjang + Lebar)
Perhitungan: Luas = 4 × 2.5";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_circle_export_uses_two_digit_pi() {
        let result = calc(Shape::Circle, &["2"], MeasurementUnit::Centimeter);
        let text = export_text(&result, &ExportOptions::default());
        let expected = "\
=== HASIL PERHITUNGAN LINGKARAN ===
Jari-jari: 2 cm
Luas: 12.5664 cm²
Rumus: Luas = π × r²
Perhitungan: Luas = 3.14 × 2²";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_trapezoid_without_formula() {
        let result = calc(Shape::Trapezoid, &["3", "5", "4"], MeasurementUnit::Inch);
        let options = ExportOptions {
            include_formula: false,
            ..Default::default()
        };
        let expected = "\
=== HASIL PERHITUNGAN TRAPESIUM ===
Alas atas: 3 in
Alas bawah: 5 in
Tinggi: 4 in
Luas: 16 in²";
        assert_eq!(export_text(&result, &options), expected);
    }

    #[test]
    fn test_export_groups_large_numbers() {
        let result = calc(Shape::Square, &["1500"], MeasurementUnit::Millimeter);
        let text = export_text(&result, &ExportOptions::default());
        assert!(text.contains("Sisi: 1,500 mm"));
        assert!(text.contains("Luas: 2,250,000 mm²"));
        assert!(text.contains("Perhitungan: Luas = 1,500 × 1,500"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_every_shape_renders_header_and_area() {
        for shape in Shape::ALL {
            let raw = vec!["2"; shape.definition().arity()];
            let result = calc(shape, &raw, MeasurementUnit::Centimeter);
            let text = export_text(&result, &ExportOptions::default());
            assert!(text.starts_with("=== HASIL PERHITUNGAN "), "{shape}");
            assert!(text.contains("Luas: "), "{shape}");
            assert!(!text.contains('{'), "{shape} left a placeholder: {text}");
        }
    }
}
