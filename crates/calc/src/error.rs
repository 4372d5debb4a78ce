//! Error types for the calculator pipeline.
//!
//! Display strings are the user-facing messages shown under the input form.

use thiserror::Error;

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors that can occur while turning form input into a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The field was empty or whitespace only
    #[error("{field} tidak boleh kosong")]
    EmptyInput { field: String },

    /// The field did not contain a finite decimal number
    #[error("Masukkan angka yang valid")]
    InvalidFormat { field: String, input: String },

    /// The value was zero or negative
    #[error("{field} harus lebih besar dari 0")]
    NonPositive { field: String },

    /// The value exceeded the upper bound
    #[error("Nilai terlalu besar (maksimal 1,000,000)")]
    TooLarge { field: String },

    /// The value was below the lower bound
    #[error("Nilai terlalu kecil (minimal 0.0001)")]
    TooSmall { field: String },

    /// Anything unexpected during evaluation
    #[error("Terjadi kesalahan dalam perhitungan")]
    CalculationFailure(String),
}

/// Error code for integration with luas-core error handling.
/// Range: 11xxx for calculator errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcErrorCode {
    /// Empty field
    EmptyInput = 11001,
    /// Unparsable field
    InvalidFormat = 11002,
    /// Value <= 0
    NonPositive = 11003,
    /// Value above the upper bound
    TooLarge = 11004,
    /// Value below the lower bound
    TooSmall = 11005,
    /// Unexpected failure
    CalculationFailure = 11006,
}

impl CalcError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CalcErrorCode {
        match self {
            CalcError::EmptyInput { .. } => CalcErrorCode::EmptyInput,
            CalcError::InvalidFormat { .. } => CalcErrorCode::InvalidFormat,
            CalcError::NonPositive { .. } => CalcErrorCode::NonPositive,
            CalcError::TooLarge { .. } => CalcErrorCode::TooLarge,
            CalcError::TooSmall { .. } => CalcErrorCode::TooSmall,
            CalcError::CalculationFailure(_) => CalcErrorCode::CalculationFailure,
        }
    }

    /// The dimension label the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::EmptyInput { field }
            | CalcError::InvalidFormat { field, .. }
            | CalcError::NonPositive { field }
            | CalcError::TooLarge { field }
            | CalcError::TooSmall { field } => Some(field),
            CalcError::CalculationFailure(_) => None,
        }
    }

    /// True for errors caused by user input rather than the evaluator.
    pub fn is_validation(&self) -> bool {
        !matches!(self, CalcError::CalculationFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let empty = CalcError::EmptyInput { field: "Sisi".into() };
        assert_eq!(empty.to_string(), "Sisi tidak boleh kosong");

        let large = CalcError::TooLarge { field: "Sisi".into() };
        assert_eq!(large.to_string(), "Nilai terlalu besar (maksimal 1,000,000)");

        let failure = CalcError::CalculationFailure("boom".into());
        assert_eq!(failure.to_string(), "Terjadi kesalahan dalam perhitungan");
    }

    #[test]
    fn test_codes_and_fields() {
        let err = CalcError::InvalidFormat { field: "Alas".into(), input: "abc".into() };
        assert_eq!(err.code(), CalcErrorCode::InvalidFormat);
        assert_eq!(err.code() as u32, 11002);
        assert_eq!(err.field(), Some("Alas"));
        assert!(err.is_validation());

        let failure = CalcError::CalculationFailure("arity".into());
        assert_eq!(failure.field(), None);
        assert!(!failure.is_validation());
    }
}
