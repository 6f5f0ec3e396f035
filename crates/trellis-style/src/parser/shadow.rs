//! `box-shadow`.
//!
//! [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)

use trellis_ir::BoxShadow;

use crate::error::ValidationError;
use crate::parser::color::parse_color;
use crate::parser::length::parse_px;
use crate::parser::tokenize::split_whitespace_top_level;

/// [§ 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// Parse a single shadow: `[inset] offset-x offset-y blur-radius
/// [spread-radius] color`.
///
/// Only a leading `inset` is recognized, the blur radius is required and the
/// color must come last. Lengths are read as plain pixels.
///
/// # Errors
///
/// - [`ValidationError::InvalidBoxShadow`] when fewer than four components
///   follow the optional `inset`.
/// - [`ValidationError::InvalidBoxShadowFormat`] when more than five do.
pub fn parse_box_shadow(value: &str) -> Result<BoxShadow, ValidationError> {
    let tokens = split_whitespace_top_level(value);

    let (inset, components) = match tokens.split_first() {
        Some((&"inset", rest)) => (true, rest),
        _ => (false, tokens.as_slice()),
    };

    let (offset_x, offset_y, blur_radius, spread_radius, color) = match components {
        [x, y, blur, color] => (*x, *y, *blur, None, *color),
        [x, y, blur, spread, color] => (*x, *y, *blur, Some(*spread), *color),
        short if short.len() < 4 => {
            return Err(ValidationError::InvalidBoxShadow {
                value: value.to_string(),
            });
        }
        _ => {
            return Err(ValidationError::InvalidBoxShadowFormat {
                value: value.to_string(),
            });
        }
    };

    Ok(BoxShadow {
        color: parse_color(color),
        offset_x: parse_px(offset_x),
        offset_y: parse_px(offset_y),
        blur_radius: parse_px(blur_radius),
        spread_radius: spread_radius.map_or(0.0, parse_px),
        inset,
    })
}
