//! Locale-tolerant decimal parsing for form fields.

/// Outcome of reading one raw text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    /// Empty or whitespace-only text
    Missing,
    /// Text present but not a finite number
    Malformed,
    /// A finite number
    Number(f64),
}

impl ParsedInput {
    /// The parsed number, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            ParsedInput::Number(v) => Some(v),
            _ => None,
        }
    }
}

/// Trims the text and replaces comma decimal separators with periods.
pub fn normalize(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

/// Parses a raw field.
///
/// Missing input is detected before parsing. `NaN` and infinities are
/// reported as malformed since they can never describe a length.
///
/// # Example
/// ```
/// use luas_calc::parser::{parse_number, ParsedInput};
///
/// assert_eq!(parse_number(" 7,5 "), ParsedInput::Number(7.5));
/// assert_eq!(parse_number("   "), ParsedInput::Missing);
/// assert_eq!(parse_number("abc"), ParsedInput::Malformed);
/// ```
pub fn parse_number(raw: &str) -> ParsedInput {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return ParsedInput::Missing;
    }

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => ParsedInput::Number(v),
        _ => ParsedInput::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_comma_decimals() {
        assert_eq!(parse_number("5"), ParsedInput::Number(5.0));
        assert_eq!(parse_number("2.5"), ParsedInput::Number(2.5));
        assert_eq!(parse_number("7,5"), ParsedInput::Number(7.5));
        assert_eq!(parse_number("\t4\n"), ParsedInput::Number(4.0));
    }

    #[test]
    fn test_missing_is_checked_before_parsing() {
        assert_eq!(parse_number(""), ParsedInput::Missing);
        assert_eq!(parse_number(" \t "), ParsedInput::Missing);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_number("abc"), ParsedInput::Malformed);
        assert_eq!(parse_number("1.2.3"), ParsedInput::Malformed);
        // grouping separators turn into a second decimal point
        assert_eq!(parse_number("1,000.5"), ParsedInput::Malformed);
        assert_eq!(parse_number("NaN"), ParsedInput::Malformed);
        assert_eq!(parse_number("inf"), ParsedInput::Malformed);
    }

    #[test]
    fn test_negative_numbers_still_parse() {
        // sign checks belong to the validator
        assert_eq!(parse_number("-3"), ParsedInput::Number(-3.0));
        assert_eq!(parse_number("-3").value(), Some(-3.0));
        assert_eq!(parse_number("x").value(), None);
    }
}
