//! Generic shape calculator: parse, validate, evaluate.

use crate::error::{CalcError, Result};
use crate::shapes::{Shape, ShapeDefinition};
use crate::units::{to_meters, MeasurementUnit};
use crate::validator::{validate_inputs, validate_values};
use serde::Serialize;
use tracing::{debug, instrument};

/// Success or a user-facing message. There is no partial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum ValidationOutcome {
    /// All inputs accepted
    Success,
    /// First problem found
    Error(String),
}

impl<T> From<&Result<T>> for ValidationOutcome {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ValidationOutcome::Success,
            Err(e) => ValidationOutcome::Error(e.to_string()),
        }
    }
}

/// Validated dimensions and the values computed from them.
///
/// Only produced by a successful calculation; never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeResult {
    shape: Shape,
    unit: MeasurementUnit,
    dimensions: Vec<f64>,
    area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    perimeter: Option<f64>,
}

impl ShapeResult {
    /// Shape the result belongs to.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Unit of the dimensions; the area is in this unit squared.
    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    /// Dimensions in input order.
    pub fn dimensions(&self) -> &[f64] {
        &self.dimensions
    }

    /// Area in `unit()²`.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Perimeter in `unit()`, for shapes that have one.
    pub fn perimeter(&self) -> Option<f64> {
        self.perimeter
    }

    /// Dimensions paired with their labels.
    pub fn labelled_dimensions(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.shape
            .definition()
            .dimensions
            .iter()
            .copied()
            .zip(self.dimensions.iter().copied())
    }

    /// Dimensions rescaled to meters.
    pub fn dimensions_in_meters(&self) -> Vec<f64> {
        self.dimensions.iter().map(|&d| to_meters(d, self.unit)).collect()
    }
}

/// Calculator for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeCalculator {
    shape: Shape,
}

impl ShapeCalculator {
    /// Calculator driven by `shape`'s definition.
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// The shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The definition in use.
    pub fn definition(&self) -> &'static ShapeDefinition {
        self.shape.definition()
    }

    /// Parses, validates and evaluates one raw text field per dimension.
    ///
    /// # Example
    /// ```
    /// use luas_calc::{MeasurementUnit, Shape, ShapeCalculator};
    ///
    /// let calc = ShapeCalculator::new(Shape::Rectangle);
    /// let result = calc.calculate(&["4", "2,5"], MeasurementUnit::Centimeter).unwrap();
    /// assert_eq!(result.area(), 10.0);
    /// assert_eq!(result.perimeter(), Some(13.0));
    /// ```
    #[instrument(level = "debug", skip(self, raw), fields(shape = %self.shape))]
    pub fn calculate<S: AsRef<str>>(&self, raw: &[S], unit: MeasurementUnit) -> Result<ShapeResult> {
        self.check_arity(raw.len())?;
        let values = validate_inputs(self.definition().dimensions, raw)?;
        self.compute(values, unit)
    }

    /// Validates and evaluates already-parsed dimensions.
    pub fn evaluate(&self, values: Vec<f64>, unit: MeasurementUnit) -> Result<ShapeResult> {
        self.check_arity(values.len())?;
        validate_values(self.definition().dimensions, &values)?;
        self.compute(values, unit)
    }

    fn check_arity(&self, given: usize) -> Result<()> {
        let expected = self.definition().arity();
        if given == expected {
            Ok(())
        } else {
            Err(CalcError::CalculationFailure(format!(
                "{} needs {} value(s), got {}",
                self.shape, expected, given
            )))
        }
    }

    fn compute(&self, values: Vec<f64>, unit: MeasurementUnit) -> Result<ShapeResult> {
        let def = self.definition();
        let area = (def.area)(&values);
        let perimeter = def.perimeter.map(|p| p(&values));

        if !area.is_finite() || perimeter.is_some_and(|p| !p.is_finite()) {
            return Err(CalcError::CalculationFailure(format!(
                "non-finite result for {}",
                self.shape
            )));
        }

        debug!(area, ?perimeter, unit = %unit, "area computed");
        Ok(ShapeResult {
            shape: self.shape,
            unit,
            dimensions: values,
            area,
            perimeter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const CM: MeasurementUnit = MeasurementUnit::Centimeter;

    #[test]
    fn test_square_scenario() {
        let result = ShapeCalculator::new(Shape::Square).calculate(&["5"], CM).unwrap();
        assert_eq!(result.area(), 25.0);
        assert_eq!(result.perimeter(), None);
    }

    #[test]
    fn test_rectangle_scenario() {
        let result = ShapeCalculator::new(Shape::Rectangle)
            .calculate(&["4", "2.5"], CM)
            .unwrap();
        assert_eq!(result.area(), 10.0);
        assert_eq!(result.perimeter(), Some(13.0));
    }

    #[test]
    fn test_circle_scenario() {
        let result = ShapeCalculator::new(Shape::Circle).calculate(&["2"], CM).unwrap();
        assert!((result.area() - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoid_scenario() {
        let result = ShapeCalculator::new(Shape::Trapezoid)
            .calculate(&["3", "5", "4"], CM)
            .unwrap();
        assert_eq!(result.area(), 16.0);
    }

    #[test]
    fn test_kite_comma_decimal() {
        let result = ShapeCalculator::new(Shape::Kite).calculate(&["7,5", "4"], CM).unwrap();
        assert_eq!(result.dimensions(), &[7.5, 4.0]);
        assert_eq!(result.area(), 15.0);
    }

    #[test]
    fn test_minimum_side_accepted() {
        let result = ShapeCalculator::new(Shape::Square).calculate(&["0.0001"], CM).unwrap();
        assert!((result.area() - 1e-8).abs() < 1e-20);
    }

    #[test]
    fn test_boundary_rejections() {
        let calc = ShapeCalculator::new(Shape::Square);
        assert!(matches!(calc.calculate(&["0.00009999"], CM), Err(CalcError::TooSmall { .. })));
        assert!(matches!(calc.calculate(&["1000001"], CM), Err(CalcError::TooLarge { .. })));
    }

    #[test]
    fn test_arity_mismatch_is_calculation_failure() {
        let err = ShapeCalculator::new(Shape::Triangle).calculate(&["3"], CM).unwrap_err();
        assert!(matches!(err, CalcError::CalculationFailure(_)));
        assert_eq!(err.to_string(), "Terjadi kesalahan dalam perhitungan");
    }

    #[test]
    fn test_validation_outcome() {
        let calc = ShapeCalculator::new(Shape::Circle);
        assert_eq!(ValidationOutcome::from(&calc.calculate(&["2"], CM)), ValidationOutcome::Success);
        assert_eq!(
            ValidationOutcome::from(&calc.calculate(&[""], CM)),
            ValidationOutcome::Error("Jari-jari tidak boleh kosong".to_string())
        );
    }

    #[test]
    fn test_result_helpers() {
        let result = ShapeCalculator::new(Shape::Rectangle)
            .calculate(&["400", "250"], CM)
            .unwrap();
        let labels: Vec<_> = result.labelled_dimensions().collect();
        assert_eq!(labels, vec![("Panjang", 400.0), ("Lebar", 250.0)]);

        let meters = result.dimensions_in_meters();
        assert!((meters[0] - 4.0).abs() < 1e-12);
        assert!((meters[1] - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_result_serializes() {
        let result = ShapeCalculator::new(Shape::Square).calculate(&["5"], CM).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["shape"], "square");
        assert_eq!(json["unit"], "cm");
        assert_eq!(json["area"], 25.0);
        assert!(json.get("perimeter").is_none());
    }

    fn any_shape() -> impl Strategy<Value = Shape> {
        prop::sample::select(Shape::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn valid_input_gives_non_negative_area(
            shape in any_shape(),
            dims in prop::collection::vec(0.0001f64..=1_000_000.0, 3),
        ) {
            let calc = ShapeCalculator::new(shape);
            let values = dims[..calc.definition().arity()].to_vec();
            let result = calc.evaluate(values, CM).unwrap();
            prop_assert!(result.area() >= 0.0);
        }

        #[test]
        fn out_of_range_input_is_rejected(shape in any_shape(), bad in prop_oneof![
            -1_000.0f64..=0.0,
            1_000_000.001f64..1e9,
            0.000_000_1f64..0.000_099_9,
        ]) {
            let calc = ShapeCalculator::new(shape);
            let mut values = vec![1.0; calc.definition().arity()];
            values[0] = bad;
            prop_assert!(calc.evaluate(values, CM).is_err());
        }
    }
}
