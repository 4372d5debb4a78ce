//! Area calculator pipeline for the Luas tools.
//!
//! One generic calculator covers every shape:
//! - Locale-tolerant number parsing (`7,5` is 7.5)
//! - Range validation shared by all shapes (0.0001 ..= 1,000,000)
//! - Closed-form area formulas as per-shape plugins
//! - Linear unit conversion with meters as the canonical unit
//! - Grouped, bounded-precision formatting and clipboard export
//! - A screen controller that ties the pieces together
//!
//! # Example
//!
//! ```
//! use luas_calc::{format_number, MeasurementUnit, Shape, ShapeCalculator};
//!
//! let calc = ShapeCalculator::new(Shape::Circle);
//! let result = calc.calculate(&["2"], MeasurementUnit::Centimeter).unwrap();
//! assert_eq!(format_number(result.area()), "12.5664");
//! ```

pub mod calculator;
mod error;
pub mod export;
pub mod format;
pub mod parser;
pub mod screen;
pub mod shapes;
pub mod units;
pub mod validator;

pub use calculator::{ShapeCalculator, ShapeResult, ValidationOutcome};
pub use error::{CalcError, CalcErrorCode, Result};
pub use export::{export_text, ExportOptions};
pub use format::{format_number, format_with_precision, NumberFormatter, DEFAULT_PRECISION};
pub use screen::{ScreenState, ShapeScreen};
pub use shapes::{Shape, ShapeDefinition, UnknownShape};
pub use units::{convert, MeasurementUnit, UnknownUnit};
pub use validator::{MAX_DIMENSION, MIN_DIMENSION};
