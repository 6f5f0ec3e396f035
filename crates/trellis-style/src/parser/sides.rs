//! Four-side shorthands.
//!
//! [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)

use trellis_common::warning::warn_once;
use trellis_ir::{LengthUnit, SidesValue};

use crate::declaration::ValueRef;
use crate::parser::length::parse_length_str;

/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// Expand a `padding`/`margin`-style shorthand.
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom margins are set to the first value and
/// the right and left margins are set to the second. If there are three
/// values, the top is set to the first value, the left and right are set to
/// the second, and the bottom is set to the third. If there are four values,
/// they apply to the top, right, bottom, and left, respectively."
///
/// One value stays a scalar and two stay a `[vertical, horizontal]` pair;
/// three are expanded to four so the engine never sees a three-value list.
/// An empty string is `0`; components past the fourth are ignored.
#[must_use]
pub fn parse_side_length_units<'a>(value: impl Into<ValueRef<'a>>) -> SidesValue {
    let value = match value.into() {
        ValueRef::Number(px) => return SidesValue::Uniform(LengthUnit::Px(px)),
        ValueRef::Str(s) => s,
    };

    let lengths: Vec<LengthUnit> = value.split_ascii_whitespace().map(parse_length_str).collect();

    match lengths.as_slice() {
        [] => SidesValue::Uniform(LengthUnit::ZERO),
        [all] => SidesValue::Uniform(*all),
        [vertical, horizontal] => SidesValue::Pair([*vertical, *horizontal]),
        [top, horizontal, bottom] => SidesValue::Sides([*top, *horizontal, *bottom, *horizontal]),
        [top, right, bottom, left, rest @ ..] => {
            if !rest.is_empty() {
                warn_once(
                    "style",
                    &format!("side shorthand '{value}' has more than four values"),
                );
            }
            SidesValue::Sides([*top, *right, *bottom, *left])
        }
    }
}
