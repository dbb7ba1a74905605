use std::num::ParseFloatError;

use crate::constants::NUM_PRECISION;
use crate::errors::{Error, Result};

/// Return a 'minimal' representation of the given number
///
/// Values are rounded to `NUM_PRECISION` decimal places, after which any
/// trailing zeros (and a trailing decimal point) are removed.
pub fn fstr(x: f64) -> String {
    let result = format!("{x:.prec$}", prec = NUM_PRECISION);
    let result = if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.')
    } else {
        &result
    };
    if result == "-0" {
        "0".to_string()
    } else {
        result.to_string()
    }
}

/// Parse a string to a finite f64
pub fn strp(s: &str) -> Result<f64> {
    let value: f64 = s.trim().parse().map_err(|e: ParseFloatError| -> Error { e.into() })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidValue("number".to_owned(), s.to_owned()))
    }
}

/// Parse a length attribute such as `width="512px"`; only user units / px are supported
pub fn strp_px(s: &str) -> Result<f64> {
    let s = s.trim();
    strp(s.strip_suffix("px").unwrap_or(s))
}

/// Returns iterator over whitespace-or-comma separated values
pub fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}
