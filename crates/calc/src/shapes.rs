//! Area formulas and the shape catalogue.
//!
//! Every shape is described by a [`ShapeDefinition`]: its dimension labels, an
//! area function over those dimensions, an optional perimeter function, and
//! the formula text used in exports. The calculator is generic over these
//! definitions, so adding a shape means adding one definition.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Area of a square.
#[inline]
pub fn square_area(side: f64) -> f64 {
    side * side
}

/// Area of a rectangle.
#[inline]
pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// Perimeter of a rectangle.
#[inline]
pub fn rectangle_perimeter(length: f64, width: f64) -> f64 {
    2.0 * (length + width)
}

/// Area of a triangle from base and height.
#[inline]
pub fn triangle_area(base: f64, height: f64) -> f64 {
    0.5 * base * height
}

/// Area of a parallelogram.
#[inline]
pub fn parallelogram_area(base: f64, height: f64) -> f64 {
    base * height
}

/// Area of a trapezoid from its parallel sides and height.
#[inline]
pub fn trapezoid_area(top_base: f64, bottom_base: f64, height: f64) -> f64 {
    0.5 * (top_base + bottom_base) * height
}

/// Area of a kite from its diagonals.
#[inline]
pub fn kite_area(diagonal1: f64, diagonal2: f64) -> f64 {
    0.5 * diagonal1 * diagonal2
}

/// Area of a rhombus from its diagonals.
#[inline]
pub fn rhombus_area(diagonal1: f64, diagonal2: f64) -> f64 {
    0.5 * diagonal1 * diagonal2
}

/// Area of an ellipse from its semi-axes.
#[inline]
pub fn ellipse_area(semi_major: f64, semi_minor: f64) -> f64 {
    PI * semi_major * semi_minor
}

/// Area of a circle.
#[inline]
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Formula over a slice holding exactly one value per dimension.
pub(crate) type Formula = fn(&[f64]) -> f64;

/// Static description of one shape.
#[derive(Debug)]
pub struct ShapeDefinition {
    /// Command-line key, e.g. `rectangle`
    pub key: &'static str,
    /// Upper-case title used in the export header
    pub title: &'static str,
    /// One label per input field, in input order
    pub dimensions: &'static [&'static str],
    /// Area over the validated dimensions; the slice length must equal
    /// `arity()`, which the calculator checks before calling it
    pub(crate) area: Formula,
    /// Perimeter, for shapes whose screen shows one
    pub(crate) perimeter: Option<Formula>,
    /// `Rumus` lines for the export
    pub formula: &'static [&'static str],
    /// Right-hand side of the `Perhitungan` line. `{0}`, `{1}`, ... are
    /// replaced by the formatted dimensions and `{pi}` by π.
    pub derivation: &'static str,
}

impl ShapeDefinition {
    /// Number of input fields.
    pub fn arity(&self) -> usize {
        self.dimensions.len()
    }

    /// Whether results for this shape carry a perimeter.
    pub fn has_perimeter(&self) -> bool {
        self.perimeter.is_some()
    }
}

fn square(d: &[f64]) -> f64 {
    square_area(d[0])
}

fn rectangle(d: &[f64]) -> f64 {
    rectangle_area(d[0], d[1])
}

fn rectangle_around(d: &[f64]) -> f64 {
    rectangle_perimeter(d[0], d[1])
}

fn triangle(d: &[f64]) -> f64 {
    triangle_area(d[0], d[1])
}

fn parallelogram(d: &[f64]) -> f64 {
    parallelogram_area(d[0], d[1])
}

fn trapezoid(d: &[f64]) -> f64 {
    trapezoid_area(d[0], d[1], d[2])
}

fn kite(d: &[f64]) -> f64 {
    kite_area(d[0], d[1])
}

fn rhombus(d: &[f64]) -> f64 {
    rhombus_area(d[0], d[1])
}

fn ellipse(d: &[f64]) -> f64 {
    ellipse_area(d[0], d[1])
}

fn circle(d: &[f64]) -> f64 {
    circle_area(d[0])
}

static SQUARE: ShapeDefinition = ShapeDefinition {
    key: "square",
    title: "PERSEGI",
    dimensions: &["Sisi"],
    area: square,
    perimeter: None,
    formula: &["Rumus: Luas = sisi × sisi"],
    derivation: "{0} × {0}",
};

static RECTANGLE: ShapeDefinition = ShapeDefinition {
    key: "rectangle",
    title: "PERSEGI PANJANG",
    dimensions: &["Panjang", "Lebar"],
    area: rectangle,
    perimeter: Some(rectangle_around),
    formula: &[
        "Rumus Luas: Panjang × Lebar",
        "Rumus Keliling: 2 × (Panjang + Lebar)",
    ],
    derivation: "{0} × {1}",
};

static TRIANGLE: ShapeDefinition = ShapeDefinition {
    key: "triangle",
    title: "SEGITIGA",
    dimensions: &["Alas", "Tinggi"],
    area: triangle,
    perimeter: None,
    formula: &["Rumus: Luas = 0.5 × alas × tinggi"],
    derivation: "0.5 × {0} × {1}",
};

static PARALLELOGRAM: ShapeDefinition = ShapeDefinition {
    key: "parallelogram",
    title: "JAJAR GENJANG",
    dimensions: &["Alas", "Tinggi"],
    area: parallelogram,
    perimeter: None,
    formula: &["Rumus: Luas = alas × tinggi"],
    derivation: "{0} × {1}",
};

static TRAPEZOID: ShapeDefinition = ShapeDefinition {
    key: "trapezoid",
    title: "TRAPESIUM",
    dimensions: &["Alas atas", "Alas bawah", "Tinggi"],
    area: trapezoid,
    perimeter: None,
    formula: &["Rumus: Luas = 0.5 × (alas atas + alas bawah) × tinggi"],
    derivation: "0.5 × ({0} + {1}) × {2}",
};

static KITE: ShapeDefinition = ShapeDefinition {
    key: "kite",
    title: "LAYANG-LAYANG",
    dimensions: &["Diagonal 1", "Diagonal 2"],
    area: kite,
    perimeter: None,
    formula: &["Rumus: Luas = 0.5 × d1 × d2"],
    derivation: "0.5 × {0} × {1}",
};

static RHOMBUS: ShapeDefinition = ShapeDefinition {
    key: "rhombus",
    title: "BELAH KETUPAT",
    dimensions: &["Diagonal 1", "Diagonal 2"],
    area: rhombus,
    perimeter: None,
    formula: &["Rumus: Luas = 0.5 × d1 × d2"],
    derivation: "0.5 × {0} × {1}",
};

static ELLIPSE: ShapeDefinition = ShapeDefinition {
    key: "ellipse",
    title: "ELIPS",
    dimensions: &["Sumbu mayor (a)", "Sumbu minor (b)"],
    area: ellipse,
    perimeter: None,
    formula: &["Rumus: Luas = π × a × b"],
    derivation: "{pi} × {0} × {1}",
};

static CIRCLE: ShapeDefinition = ShapeDefinition {
    key: "circle",
    title: "LINGKARAN",
    dimensions: &["Jari-jari"],
    area: circle,
    perimeter: None,
    formula: &["Rumus: Luas = π × r²"],
    derivation: "{pi} × {0}²",
};

/// The supported shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Persegi
    Square,
    /// Persegi panjang
    Rectangle,
    /// Segitiga
    Triangle,
    /// Jajar genjang
    Parallelogram,
    /// Trapesium
    Trapezoid,
    /// Layang-layang
    Kite,
    /// Belah ketupat
    Rhombus,
    /// Elips
    Ellipse,
    /// Lingkaran
    Circle,
}

impl Shape {
    /// All shapes in menu order.
    pub const ALL: [Shape; 9] = [
        Shape::Square,
        Shape::Rectangle,
        Shape::Triangle,
        Shape::Parallelogram,
        Shape::Trapezoid,
        Shape::Kite,
        Shape::Rhombus,
        Shape::Ellipse,
        Shape::Circle,
    ];

    /// The definition driving this shape's calculator.
    pub fn definition(self) -> &'static ShapeDefinition {
        match self {
            Shape::Square => &SQUARE,
            Shape::Rectangle => &RECTANGLE,
            Shape::Triangle => &TRIANGLE,
            Shape::Parallelogram => &PARALLELOGRAM,
            Shape::Trapezoid => &TRAPEZOID,
            Shape::Kite => &KITE,
            Shape::Rhombus => &RHOMBUS,
            Shape::Ellipse => &ELLIPSE,
            Shape::Circle => &CIRCLE,
        }
    }

    /// Command-line key.
    pub fn key(self) -> &'static str {
        self.definition().key
    }

    fn local_name(self) -> &'static str {
        match self {
            Shape::Square => "persegi",
            Shape::Rectangle => "persegi-panjang",
            Shape::Triangle => "segitiga",
            Shape::Parallelogram => "jajar-genjang",
            Shape::Trapezoid => "trapesium",
            Shape::Kite => "layang-layang",
            Shape::Rhombus => "belah-ketupat",
            Shape::Ellipse => "elips",
            Shape::Circle => "lingkaran",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a shape name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shape: {0}")]
pub struct UnknownShape(pub String);

impl FromStr for Shape {
    type Err = UnknownShape;

    /// Accepts the English key or the Indonesian name, with `-`, `_` or
    /// spaces between words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|shape| shape.key() == wanted || shape.local_name() == wanted)
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formulas() {
        assert_eq!(square_area(5.0), 25.0);
        assert_eq!(rectangle_area(4.0, 2.5), 10.0);
        assert_eq!(rectangle_perimeter(4.0, 2.5), 13.0);
        assert_eq!(triangle_area(6.0, 4.0), 12.0);
        assert_eq!(parallelogram_area(6.0, 4.0), 24.0);
        assert_eq!(trapezoid_area(3.0, 5.0, 4.0), 16.0);
        assert_eq!(kite_area(7.5, 4.0), 15.0);
        assert_eq!(rhombus_area(7.5, 4.0), 15.0);
        assert!((circle_area(2.0) - 4.0 * PI).abs() < 1e-12);
        assert!((ellipse_area(3.0, 2.0) - 6.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_definitions_match_arity() {
        for shape in Shape::ALL {
            let def = shape.definition();
            let ones = vec![1.0; def.arity()];
            assert!((def.area)(&ones) > 0.0, "{shape}");
            for i in 0..def.arity() {
                assert!(def.derivation.contains(&format!("{{{i}}}")), "{shape} misses {{{i}}}");
            }
        }
    }

    #[test]
    fn test_only_rectangle_has_perimeter() {
        let with_perimeter: Vec<_> = Shape::ALL
            .into_iter()
            .filter(|s| s.definition().has_perimeter())
            .collect();
        assert_eq!(with_perimeter, vec![Shape::Rectangle]);
    }

    #[test]
    fn test_parse_shape_names() {
        assert_eq!("square".parse::<Shape>(), Ok(Shape::Square));
        assert_eq!("Persegi Panjang".parse::<Shape>(), Ok(Shape::Rectangle));
        assert_eq!("layang_layang".parse::<Shape>(), Ok(Shape::Kite));
        assert_eq!("LINGKARAN".parse::<Shape>(), Ok(Shape::Circle));
        assert!("hexagon".parse::<Shape>().is_err());
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<_> = Shape::ALL.iter().map(|s| s.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Shape::ALL.len());
    }
}
