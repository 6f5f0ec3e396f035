//! `aspect-ratio`.
//!
//! [§ 7.1 'aspect-ratio'](https://www.w3.org/TR/css-sizing-4/#aspect-ratio)

use crate::declaration::ValueRef;
use crate::error::ValidationError;
use crate::parser::length::parse_number;

/// [§ 7.1 'aspect-ratio'](https://www.w3.org/TR/css-sizing-4/#aspect-ratio)
///
/// `<ratio> = <number [0,∞]> [ / <number [0,∞]> ]?`
///
/// Returns width / height. A zero denominator is an error; any other
/// malformed value is `NaN` rather than an error.
///
/// # Errors
///
/// Returns [`ValidationError::ZeroDenominator`] for `n/0`.
pub fn parse_aspect_ratio<'a>(value: impl Into<ValueRef<'a>>) -> Result<f32, ValidationError> {
    let value = match value.into() {
        ValueRef::Number(ratio) => return Ok(ratio),
        ValueRef::Str(s) => s.trim(),
    };

    let Some((numerator, denominator)) = value.split_once('/') else {
        return Ok(parse_number(value).unwrap_or(f32::NAN));
    };

    let (Some(numerator), Some(denominator)) =
        (parse_number(numerator), parse_number(denominator))
    else {
        return Ok(f32::NAN);
    };

    if denominator == 0.0 {
        return Err(ValidationError::ZeroDenominator {
            value: value.to_string(),
        });
    }

    Ok(numerator / denominator)
}
