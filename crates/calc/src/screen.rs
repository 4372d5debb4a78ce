//! Per-screen controller holding the form, the selected unit and the
//! last result.
//!
//! State transitions:
//!
//! ```text
//! Idle --calculate--> Error | Computed
//! Error --edit--> Idle
//! Computed --edit | clear--> Idle
//! Computed --unit change--> Computed | Error   (recomputed from meters)
//! ```
//!
//! Confirmed dimensions are kept in meters so that switching units never
//! goes through the rounded display text.

use crate::calculator::{ShapeCalculator, ShapeResult, ValidationOutcome};
use crate::error::CalcError;
use crate::export::{export_text, ExportOptions};
use crate::format::NumberFormatter;
use crate::shapes::Shape;
use crate::units::{from_meters, MeasurementUnit};
use tracing::{debug, debug_span, info};

/// What the screen currently shows below the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    /// Nothing to show
    #[default]
    Idle,
    /// Validation or evaluation failed
    Error(CalcError),
    /// A result is displayed
    Computed(ShapeResult),
}

impl ScreenState {
    /// Outcome of the last calculation, if one is displayed.
    pub fn outcome(&self) -> Option<ValidationOutcome> {
        match self {
            ScreenState::Idle => None,
            ScreenState::Error(e) => Some(ValidationOutcome::Error(e.to_string())),
            ScreenState::Computed(_) => Some(ValidationOutcome::Success),
        }
    }
}

/// Controller for one shape screen.
#[derive(Debug, Clone)]
pub struct ShapeScreen {
    calculator: ShapeCalculator,
    formatter: NumberFormatter,
    unit: MeasurementUnit,
    inputs: Vec<String>,
    confirmed_meters: Option<Vec<f64>>,
    state: ScreenState,
}

impl ShapeScreen {
    /// Empty form for `shape` in `unit`.
    pub fn new(shape: Shape, unit: MeasurementUnit) -> Self {
        let calculator = ShapeCalculator::new(shape);
        Self {
            calculator,
            formatter: NumberFormatter::default(),
            unit,
            inputs: vec![String::new(); calculator.definition().arity()],
            confirmed_meters: None,
            state: ScreenState::Idle,
        }
    }

    /// Use `formatter` for values written back into the form.
    pub fn with_formatter(mut self, formatter: NumberFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// The shape.
    pub fn shape(&self) -> Shape {
        self.calculator.shape()
    }

    /// Selected display unit.
    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    /// Raw form text, one entry per dimension.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Current state.
    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Displayed result, if any.
    pub fn result(&self) -> Option<&ShapeResult> {
        match &self.state {
            ScreenState::Computed(result) => Some(result),
            _ => None,
        }
    }

    /// Displayed error, if any.
    pub fn error(&self) -> Option<&CalcError> {
        match &self.state {
            ScreenState::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Last confirmed dimensions in meters.
    pub fn confirmed_meters(&self) -> Option<&[f64]> {
        self.confirmed_meters.as_deref()
    }

    /// Replaces the text of one field. Returns `false` when the shape has
    /// no field at `index`.
    ///
    /// Any edit discards the displayed result or error and the confirmed
    /// values, since the form no longer matches them.
    pub fn set_input(&mut self, index: usize, text: impl Into<String>) -> bool {
        let Some(slot) = self.inputs.get_mut(index) else {
            return false;
        };
        *slot = text.into();
        self.confirmed_meters = None;
        self.state = ScreenState::Idle;
        true
    }

    /// Runs the pipeline on the current form.
    pub fn calculate(&mut self) -> &ScreenState {
        let _span = debug_span!("validating", shape = %self.shape(), unit = %self.unit).entered();

        match self.calculator.calculate(&self.inputs, self.unit) {
            Ok(result) => {
                info!(shape = %self.shape(), area = result.area(), "calculation succeeded");
                self.confirmed_meters = Some(result.dimensions_in_meters());
                self.state = ScreenState::Computed(result);
            }
            Err(e) => {
                debug!(error = %e, "calculation rejected");
                self.confirmed_meters = None;
                self.state = ScreenState::Error(e);
            }
        }
        &self.state
    }

    /// Switches the display unit.
    ///
    /// With confirmed values the form is rewritten in the new unit and the
    /// result is recomputed from the stored meters; the converted values are
    /// validated again and may now be out of range. Without confirmed
    /// values the form text is left as typed and the screen returns to idle.
    pub fn set_unit(&mut self, unit: MeasurementUnit) -> &ScreenState {
        if unit == self.unit {
            return &self.state;
        }
        debug!(from = %self.unit, to = %unit, "unit changed");
        self.unit = unit;

        let Some(meters) = self.confirmed_meters.as_ref() else {
            self.state = ScreenState::Idle;
            return &self.state;
        };

        let converted: Vec<f64> = meters.iter().map(|&m| from_meters(m, unit)).collect();
        // form fields never carry grouping separators; they would re-parse as decimals
        let field_formatter = self.formatter.with_grouping(false);
        self.inputs = converted.iter().map(|&v| field_formatter.format(v)).collect();

        self.state = match self.calculator.evaluate(converted, unit) {
            Ok(result) => ScreenState::Computed(result),
            Err(e) => ScreenState::Error(e),
        };
        &self.state
    }

    /// Empties the form and forgets everything.
    pub fn clear(&mut self) {
        debug!(shape = %self.shape(), "form cleared");
        self.inputs.iter_mut().for_each(String::clear);
        self.confirmed_meters = None;
        self.state = ScreenState::Idle;
    }

    /// Clipboard text for the displayed result.
    pub fn clipboard_text(&self, options: &ExportOptions) -> Option<String> {
        self.result().map(|r| export_text(r, options))
    }
}
