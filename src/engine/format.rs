// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Number parsing and display formatting.
//!
//! All numbers live as text inside the engine. This module converts between
//! that text and `f64`, and produces the strings shown on the calculator
//! display. The locale is fixed: `.` is the decimal separator, a `,` found in
//! the input is accepted as one, and no digit grouping is ever emitted.

use crate::engine::error::CalcError;

/// Widest value the display shows before falling back to scientific notation.
pub(crate) const MAX_DISPLAY_LEN: usize = 12;

/// Text shown when a value cannot be formatted at all.
pub(crate) const FORMAT_ERROR_TEXT: &str = "Error";

const FRACTION_DIGITS: usize = 10;
const SCIENTIFIC_DIGITS: usize = 6;

/// Parses operand text into a number.
///
/// An empty operand counts as zero and commas are read as decimal points.
pub(crate) fn parse_number(text: &str) -> Result<f64, CalcError> {
    if text.is_empty() {
        return Ok(0.0);
    }

    text.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| CalcError::ParseFailure(text.to_string()))
}

/// Formats a number with at most ten fractional digits, dropping trailing
/// zeros and a dangling decimal point.
///
/// # Examples
///
/// ```
/// assert_eq!(format_decimal(0.1 + 0.2)?, "0.3");
/// assert_eq!(format_decimal(8.0)?, "8");
/// ```
pub(crate) fn format_decimal(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::FormatFailure(value.to_string()));
    }

    let fixed = format!("{:.*}", FRACTION_DIGITS, value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    // Values that round away to nothing lose their sign.
    if trimmed == "-0" {
        return Ok("0".to_string());
    }

    Ok(trimmed.to_string())
}

/// Formats a number in normalised scientific notation, e.g. `1.000000e+12`.
pub(crate) fn format_scientific(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::FormatFailure(value.to_string()));
    }

    let raw = format!("{:.*e}", SCIENTIFIC_DIGITS, value);
    let (mantissa, exponent) = raw
        .split_once('e')
        .ok_or_else(|| CalcError::FormatFailure(raw.clone()))?;
    let exponent: i32 = exponent
        .parse()
        .map_err(|_| CalcError::FormatFailure(raw.clone()))?;

    let sign = if exponent < 0 { '-' } else { '+' };
    Ok(format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs()))
}

/// Formats operand text for the display.
///
/// Decimal values are normalised through [`format_decimal`], and anything
/// still wider than [`MAX_DISPLAY_LEN`] is rendered in scientific notation.
pub(crate) fn format_display(text: &str) -> Result<String, CalcError> {
    if text.is_empty() {
        return Ok("0".to_string());
    }

    let mut text = text.replace(',', ".");

    if text.contains('.') {
        text = format_decimal(parse_number(&text)?)?;
    }

    if text.chars().count() > MAX_DISPLAY_LEN {
        return format_scientific(parse_number(&text)?);
    }

    Ok(text)
}

/// Same as [`format_display`], but failures render as [`FORMAT_ERROR_TEXT`].
pub(crate) fn display_text(text: &str) -> String {
    format_display(text).unwrap_or_else(|e| {
        tracing::warn!("display formatting failed: {e}");
        FORMAT_ERROR_TEXT.to_string()
    })
}
