//! Keyword-valued properties.
//!
//! Each parser maps a keyword onto a closed IR enum and falls back to the
//! enum's [`Default`] member for anything it does not recognize.

use std::str::FromStr;

use trellis_common::warning::warn_once;
use trellis_ir::{
    AlignItems, Display, FlexDirection, FlexWrap, GridAutoFlow, JustifyContent, ObjectFit,
    Position, TextAlign, TextOverflow,
};

use crate::declaration::ValueRef;
use crate::parser::length::parse_number;

/// Font weight used for unrecognized values.
///
/// [§ 2.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
/// "normal: Same as 400."
pub const DEFAULT_FONT_WEIGHT: f32 = 400.0;

/// Parse `value` as `T`, or warn and return `T::default()`.
fn parse_keyword<T: FromStr + Default>(property: &str, value: &str) -> T {
    value.trim().parse().unwrap_or_else(|_| {
        warn_once(
            "style",
            &format!("unsupported {property} value '{value}', using the default"),
        );
        T::default()
    })
}

/// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// `block | flex | grid | none`; anything else is `block`.
#[must_use]
pub fn parse_display(value: &str) -> Display {
    parse_keyword("display", value)
}

/// [§ 2.1 'position'](https://www.w3.org/TR/css-position-3/#position-property)
///
/// `relative | absolute`. `static` and anything unknown map to `relative`.
#[must_use]
pub fn parse_position(value: &str) -> Position {
    parse_keyword("position", value)
}

/// [§ 6.1 'text-overflow'](https://www.w3.org/TR/css-overflow-3/#text-overflow)
///
/// `ellipsis | clip`; anything else is `clip`.
#[must_use]
pub fn parse_text_overflow(value: &str) -> TextOverflow {
    parse_keyword("text-overflow", value)
}

/// [§ 7.7 'grid-auto-flow'](https://www.w3.org/TR/css-grid-2/#grid-auto-flow-property)
///
/// `row | column | row dense | column dense`; anything else is `row`.
/// Any run of whitespace may separate the two words.
#[must_use]
pub fn parse_grid_auto_flow(value: &str) -> GridAutoFlow {
    let normalized = value.split_ascii_whitespace().collect::<Vec<_>>().join(" ");
    parse_keyword("grid-auto-flow", &normalized)
}

/// [§ 5.1 'flex-direction'](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
#[must_use]
pub fn parse_flex_direction(value: &str) -> FlexDirection {
    parse_keyword("flex-direction", value)
}

/// [§ 5.2 'flex-wrap'](https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property)
#[must_use]
pub fn parse_flex_wrap(value: &str) -> FlexWrap {
    parse_keyword("flex-wrap", value)
}

/// [§ 5.1 'justify-content'](https://www.w3.org/TR/css-align-3/#justify-content-property)
#[must_use]
pub fn parse_justify_content(value: &str) -> JustifyContent {
    parse_keyword("justify-content", value)
}

/// [§ 6.2 'align-items'](https://www.w3.org/TR/css-align-3/#align-items-property)
#[must_use]
pub fn parse_align_items(value: &str) -> AlignItems {
    parse_keyword("align-items", value)
}

/// [§ 7.1 'text-align'](https://www.w3.org/TR/css-text-3/#text-align-property)
#[must_use]
pub fn parse_text_align(value: &str) -> TextAlign {
    parse_keyword("text-align", value)
}

/// [§ 4.5 'object-fit'](https://www.w3.org/TR/css-images-3/#the-object-fit)
#[must_use]
pub fn parse_object_fit(value: &str) -> ObjectFit {
    parse_keyword("object-fit", value)
}

/// [§ 2.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// "Only values greater than or equal to 1, and less than or equal to 1000,
/// are valid."
///
/// Numbers (and numeric strings) are clamped into `1..=1000` rather than
/// rejected. The relative keywords resolve against `normal`:
/// `lighter` is 300 and `bolder` is 600. Anything else is 400.
#[must_use]
pub fn parse_font_weight<'a>(value: impl Into<ValueRef<'a>>) -> f32 {
    match value.into() {
        ValueRef::Number(weight) => clamp_font_weight(weight),
        ValueRef::Str(s) => match s.trim() {
            "normal" => 400.0,
            "bold" => 700.0,
            "lighter" => 300.0,
            "bolder" => 600.0,
            other => parse_number(other).map_or_else(
                || {
                    warn_once("style", &format!("unsupported font-weight '{other}'"));
                    DEFAULT_FONT_WEIGHT
                },
                clamp_font_weight,
            ),
        },
    }
}

fn clamp_font_weight(weight: f32) -> f32 {
    if weight.is_nan() {
        DEFAULT_FONT_WEIGHT
    } else {
        weight.clamp(1.0, 1000.0)
    }
}
