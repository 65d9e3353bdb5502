//! Display formatting.
//!
//! Formatting is presentation only: the engine keeps the raw numeral in its
//! state and the formatted text is never fed back into it.

use super::error::ERROR_DISPLAY;

/// Magnitudes above this are shown in scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 999_999_999_999.0;

/// Magnitudes from here up get thousands separators.
const GROUPING_THRESHOLD: f64 = 1000.0;

/// Separators and precision used when rendering the display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub thousands_separator: String,
    pub decimal_separator: String,
    /// Upper bound on fractional digits for grouped numbers.
    pub max_fraction_digits: usize,
    /// Digits after the point in a scientific mantissa.
    pub scientific_digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            max_fraction_digits: 8,
            scientific_digits: 6,
        }
    }
}

/// Renders display strings for presentation.
#[derive(Clone, Debug, Default)]
pub struct DisplayFormatter {
    options: FormatOptions,
}

impl DisplayFormatter {
    /// Create a formatter with the given separators and precision.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Format a display string.
    ///
    /// The error sentinel and anything that does not parse as a finite
    /// number pass through unchanged. Numbers below 1000 in magnitude are
    /// also returned as-is so that in-progress input such as `"12."` keeps
    /// its shape.
    pub fn format(&self, display: &str) -> String {
        if display == ERROR_DISPLAY {
            return display.to_string();
        }

        let Ok(value) = display.parse::<f64>() else {
            return display.to_string();
        };
        if !value.is_finite() {
            return display.to_string();
        }

        let magnitude = value.abs();
        if magnitude > SCIENTIFIC_THRESHOLD {
            self.format_scientific(value)
        } else if magnitude >= GROUPING_THRESHOLD {
            self.format_grouped(value)
        } else {
            display.to_string()
        }
    }

    /// Format a number directly, e.g. the staged operand.
    pub fn format_value(&self, value: f64) -> String {
        self.format(&format_number(value))
    }

    fn format_scientific(&self, value: f64) -> String {
        let raw = format!("{:.*e}", self.options.scientific_digits, value);
        let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };

        format!(
            "{}e{}{}",
            mantissa.replace('.', &self.options.decimal_separator),
            sign,
            exponent.abs()
        )
    }

    fn format_grouped(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.options.max_fraction_digits, value.abs());
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };

        let (int_part, frac_part) = match trimmed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (trimmed, None),
        };

        let mut result = String::new();
        if value.is_sign_negative() {
            result.push('-');
        }
        result.push_str(&group_digits(int_part, &self.options.thousands_separator));
        if let Some(frac_part) = frac_part {
            result.push_str(&self.options.decimal_separator);
            result.push_str(frac_part);
        }
        result
    }
}

/// Format a display string with the default separators.
pub fn format_display(display: &str) -> String {
    DisplayFormatter::default().format(display)
}

/// Turn an engine result into display text.
///
/// Uses the shortest representation that round-trips, and never shows `-0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Insert a separator between every group of three digits.
fn group_digits(digits: &str, separator: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push_str(&separator.chars().rev().collect::<String>());
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
