//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use trellis_common::warning::warn_once;
use trellis_ir::Color;

use crate::parser::length::parse_number;
use crate::parser::tokenize::split_commas_top_level;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// Parse a hex color, `rgb()`/`rgba()`, or a named color. Unknown values are
/// black.
///
/// Use [`try_parse_color`] where an unknown value should leave the color
/// unset instead.
#[must_use]
pub fn parse_color(value: &str) -> Color {
    try_parse_color(value).unwrap_or_else(|| {
        warn_once(
            "style",
            &format!("unsupported color '{}', using black", value.trim()),
        );
        Color::BLACK
    })
}

/// Parse a hex color, `rgb()`/`rgba()`, or a named color.
///
/// Returns `None` for anything else, including `currentColor`, `none` and
/// images such as `url(...)`.
#[must_use]
pub fn try_parse_color(value: &str) -> Option<Color> {
    let lower = value.trim().to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix('#') {
        from_hex(hex)
    } else if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        from_rgb_function(args)
    } else {
        from_named(&lower)
    }
}

/// The argument text of `name(...)`, if `value` is a call to `name`.
fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// "The syntax of a `<hex-color>` is a `<hash-token>` token whose value
/// consists of 3, 4, 6, or 8 hexadecimal digits."
fn from_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    // "The three-digit RGB notation (#RGB) is converted into six-digit form
    // (#RRGGBB) by replicating digits, not by adding zeros."
    let short = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
    let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgba(short(0)?, short(1)?, short(2)?, 255)),
        4 => Some(Color::from_rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Some(Color::from_rgba(long(0)?, long(2)?, long(4)?, 255)),
        8 => Some(Color::from_rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
        _ => None,
    }
}

/// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// Legacy comma syntax and modern space syntax (`rgb(0 0 0 / 50%)`) are both
/// accepted. Channels are numbers (0-255) or percentages; alpha is a number
/// (0-1) or a percentage.
fn from_rgb_function(args: &str) -> Option<Color> {
    let (channels, alpha) = if args.contains(',') {
        let parts = split_commas_top_level(args);
        match parts.as_slice() {
            [r, g, b] => ([*r, *g, *b], None),
            [r, g, b, a] => ([*r, *g, *b], Some(*a)),
            _ => return None,
        }
    } else {
        let (rgb, alpha) = match args.split_once('/') {
            Some((rgb, alpha)) => (rgb, Some(alpha.trim())),
            None => (args, None),
        };
        let parts: Vec<&str> = rgb.split_ascii_whitespace().collect();
        match parts.as_slice() {
            [r, g, b] => ([*r, *g, *b], alpha),
            _ => return None,
        }
    };

    let [r, g, b] = channels;
    let alpha = match alpha {
        Some(a) => parse_alpha(a)?,
        None => 255,
    };
    Some(Color::from_rgba(
        parse_channel(r)?,
        parse_channel(g)?,
        parse_channel(b)?,
        alpha,
    ))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_channel(value: &str) -> Option<u8> {
    let value = value.trim();
    let channel = match value.strip_suffix('%') {
        Some(pct) => parse_number(pct)? * 255.0 / 100.0,
        None => parse_number(value)?,
    };
    Some(channel.clamp(0.0, 255.0).round() as u8)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_alpha(value: &str) -> Option<u8> {
    let value = value.trim();
    let alpha = match value.strip_suffix('%') {
        Some(pct) => parse_number(pct)? / 100.0,
        None => parse_number(value)?,
    };
    Some((alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// The sixteen basic HTML colors, their common aliases, and `transparent`.
fn from_named(name: &str) -> Option<Color> {
    let (r, g, b) = match name {
        "transparent" => return Some(Color::TRANSPARENT),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "gray" | "grey" => (128, 128, 128),
        "aqua" | "cyan" => (0, 255, 255),
        "fuchsia" | "magenta" => (255, 0, 255),
        "lime" => (0, 255, 0),
        "maroon" => (128, 0, 0),
        "navy" => (0, 0, 128),
        "olive" => (128, 128, 0),
        "purple" => (128, 0, 128),
        "silver" => (192, 192, 192),
        "teal" => (0, 128, 128),
        "orange" => (255, 165, 0),
        _ => return None,
    };
    Some(Color::from_rgba(r, g, b, 255))
}
