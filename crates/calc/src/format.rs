//! Presentation formatting for labels and clipboard text.
//!
//! Values are rounded to at most `max_fraction_digits`, trailing zeros are
//! dropped, and the integer part is grouped in threes with `,`. Formatting is
//! only applied at the boundary; the evaluator works on raw `f64`.

/// Fractional digits shown unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 4;

/// Number formatter with grouping and bounded precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormatter {
    max_fraction_digits: usize,
    grouping: bool,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl NumberFormatter {
    /// Formatter with grouping enabled.
    pub fn new(max_fraction_digits: usize) -> Self {
        Self {
            max_fraction_digits,
            grouping: true,
        }
    }

    /// Enable or disable thousands separators.
    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Same settings with a different precision.
    pub fn with_precision(mut self, max_fraction_digits: usize) -> Self {
        self.max_fraction_digits = max_fraction_digits;
        self
    }

    /// Maximum fractional digits.
    pub fn precision(&self) -> usize {
        self.max_fraction_digits
    }

    /// Whether thousands separators are inserted.
    pub fn grouping(&self) -> bool {
        self.grouping
    }

    /// Formats `value`.
    ///
    /// ```
    /// use luas_calc::format::NumberFormatter;
    ///
    /// let f = NumberFormatter::default();
    /// assert_eq!(f.format(25.0), "25");
    /// assert_eq!(f.format(1234567.891), "1,234,567.891");
    /// assert_eq!(f.format(std::f64::consts::PI * 4.0), "12.5664");
    /// ```
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rounded = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
            None => (rounded.as_str(), ""),
        };

        // -0.00001 rounds to zero and must not print as "-0"
        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();

        let mut out = String::with_capacity(rounded.len() + rounded.len() / 3 + 1);
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        if self.grouping {
            push_grouped(&mut out, int_part);
        } else {
            out.push_str(int_part);
        }
        if !frac_part.is_empty() {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
}

/// Formats with the default settings.
pub fn format_number(value: f64) -> String {
    NumberFormatter::default().format(value)
}

/// Formats with grouping and the given precision.
pub fn format_with_precision(value: f64, precision: usize) -> String {
    NumberFormatter::new(precision).format(value)
}
