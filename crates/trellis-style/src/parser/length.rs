//! CSS Length values and parsing
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use trellis_common::warning::warn_once;
use trellis_ir::factory::{em, percentage, rem, vh, vw};
use trellis_ir::{LengthKeyword, LengthUnit};

use crate::declaration::ValueRef;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Parse a number-or-string length.
///
/// A bare number is pixels. A string is matched by suffix, in this order:
/// `%`, `rem`, `em`, `vh`, `vw`, `px`, then a bare number. `rem` is checked
/// before `em` since every `rem` value also ends in `em`. The keywords
/// `auto`, `min-content` and `max-content` pass through.
///
/// Anything else, including the empty string, is `0` pixels.
#[must_use]
pub fn parse_length_unit<'a>(value: impl Into<ValueRef<'a>>) -> LengthUnit {
    match value.into() {
        ValueRef::Number(px) => LengthUnit::Px(px),
        ValueRef::Str(s) => parse_length_str(s),
    }
}

/// Parse a single length token.
pub(crate) fn parse_length_str(value: &str) -> LengthUnit {
    let value = value.trim();

    // [§ 5.1 Intrinsic Sizes](https://www.w3.org/TR/css-sizing-3/#sizing-values)
    match value {
        "auto" => return LengthUnit::Keyword(LengthKeyword::Auto),
        "min-content" => return LengthUnit::Keyword(LengthKeyword::MinContent),
        "max-content" => return LengthUnit::Keyword(LengthKeyword::MaxContent),
        "" => return LengthUnit::ZERO,
        _ => {}
    }

    parse_dimension(value).unwrap_or_else(|| {
        warn_once("style", &format!("invalid length '{value}', using 0"));
        LengthUnit::ZERO
    })
}

/// Match the unit suffix of a `<dimension>` or `<percentage>` token.
fn parse_dimension(value: &str) -> Option<LengthUnit> {
    // [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    if let Some(number) = value.strip_suffix('%') {
        return parse_number(number).map(percentage);
    }

    // [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    if let Some(number) = value.strip_suffix("rem") {
        return parse_number(number).map(rem);
    }
    if let Some(number) = value.strip_suffix("em") {
        return parse_number(number).map(em);
    }

    // [§ 5.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    if let Some(number) = value.strip_suffix("vh") {
        return parse_number(number).map(vh);
    }
    if let Some(number) = value.strip_suffix("vw") {
        return parse_number(number).map(vw);
    }

    // [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    let number = value.strip_suffix("px").unwrap_or(value);
    parse_number(number).map(LengthUnit::Px)
}

/// Parse a length that must end up as plain pixels.
///
/// Used where the rendering engine only accepts absolute values (shadow
/// offsets and radii). Relative units and keywords resolve to `0`.
#[must_use]
pub fn parse_px<'a>(value: impl Into<ValueRef<'a>>) -> f32 {
    match parse_length_unit(value) {
        LengthUnit::Px(px) => px,
        other => {
            warn_once(
                "style",
                &format!("expected a pixel length, got {other:?}; using 0"),
            );
            0.0
        }
    }
}

/// [§ 5.3 Real Numbers](https://www.w3.org/TR/css-values-4/#numbers)
///
/// "A number is either an integer, or zero or more decimal digits followed by
/// a dot (.) followed by one or more decimal digits and optionally an
/// exponent composed of "e" or "E" and an integer."
///
/// Stricter than [`str::parse`]: `inf`, `NaN`, trailing dots and surrounding
/// garbage are rejected, as are values too large for an `f32`.
#[must_use]
pub fn parse_number(value: &str) -> Option<f32> {
    let value = value.trim();
    let bytes = value.as_bytes();
    let mut pos = 0;

    // STEP 1: Optional sign.
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    // STEP 2: Integer digits, then an optional fraction. At least one digit
    // must appear in total, and a dot must be followed by a digit.
    let integer_digits = count_digits(&bytes[pos..]);
    pos += integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[pos + 1..]);
        if fraction_digits == 0 {
            return None;
        }
        pos += 1 + fraction_digits;
    }
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    // STEP 3: Optional exponent.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exponent_digits = count_digits(&bytes[exp..]);
        if exponent_digits == 0 {
            return None;
        }
        pos = exp + exponent_digits;
    }

    if pos != bytes.len() {
        return None;
    }

    value.parse().ok().filter(|n: &f32| n.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_css_numbers() {
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number("-12"), Some(-12.0));
        assert_eq!(parse_number("+3.5"), Some(3.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number(" 7 "), Some(7.0));
    }

    #[test]
    fn test_parse_number_rejects_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("1."), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("1e40"), None);
        assert_eq!(parse_number("-1e40"), None);
    }

    #[test]
    fn test_overflowing_length_is_zero() {
        assert_eq!(parse_length_str("1e40px"), LengthUnit::ZERO);
        assert_eq!(parse_length_str("3e38px"), LengthUnit::Px(3e38));
    }

    #[test]
    fn test_suffix_without_number_is_zero() {
        assert_eq!(parse_length_str("px"), LengthUnit::ZERO);
        assert_eq!(parse_length_str("%"), LengthUnit::ZERO);
        assert_eq!(parse_length_str("rem"), LengthUnit::ZERO);
    }
}
