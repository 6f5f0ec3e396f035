//! `linear-gradient()`.
//!
//! [§ 3.1 Linear Gradients](https://www.w3.org/TR/css-images-3/#linear-gradients)

use trellis_common::warning::warn_once;
use trellis_ir::Gradient;
use trellis_ir::factory::gradient;

use crate::parser::color::try_parse_color;
use crate::parser::length::parse_number;
use crate::parser::tokenize::{split_commas_top_level, split_whitespace_top_level};

/// "If the argument is omitted, it defaults to `to bottom`."
const DEFAULT_ANGLE: f32 = 180.0;

/// [§ 3.1.1 linear-gradient() syntax](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax)
///
/// `linear-gradient([ <angle> | to <side-or-corner> ]?, <color-stop-list>)`
///
/// Only `deg`/`turn` angles, sides and corners are understood. Corners are
/// resolved as if the box were square. Stop positions are dropped; the
/// engine spaces stops evenly. Returns `None` (with a warning) for anything
/// that is not a linear gradient with at least two color stops.
#[must_use]
pub fn parse_linear_gradient(value: &str) -> Option<Gradient> {
    let parsed = parse_gradient_args(value.trim());
    if parsed.is_none() {
        warn_once("style", &format!("unsupported gradient '{value}'"));
    }
    parsed
}

fn parse_gradient_args(value: &str) -> Option<Gradient> {
    let args = value
        .strip_prefix("linear-gradient")?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let mut parts = split_commas_top_level(args);
    let angle = match parts.first().copied() {
        Some(first) if first.starts_with("to ") => {
            let angle = parse_direction(first)?;
            let _ = parts.remove(0);
            angle
        }
        Some(first) => match parse_direction(first) {
            Some(angle) => {
                let _ = parts.remove(0);
                angle
            }
            None => DEFAULT_ANGLE,
        },
        None => DEFAULT_ANGLE,
    };

    // "<linear-color-stop> = <color> <length-percentage>{0,2}"
    let stops = parts
        .iter()
        .filter_map(|stop| split_whitespace_top_level(stop).first().copied())
        .map(try_parse_color)
        .collect::<Option<Vec<_>>>()?;

    if stops.len() < 2 {
        return None;
    }

    Some(gradient(stops, angle))
}

/// The gradient line direction in degrees, clockwise from "to top".
fn parse_direction(value: &str) -> Option<f32> {
    if let Some(side) = value.strip_prefix("to ") {
        let words: Vec<&str> = side.split_ascii_whitespace().collect();
        return match words.as_slice() {
            ["top"] => Some(0.0),
            ["top", "right"] | ["right", "top"] => Some(45.0),
            ["right"] => Some(90.0),
            ["bottom", "right"] | ["right", "bottom"] => Some(135.0),
            ["bottom"] => Some(180.0),
            ["bottom", "left"] | ["left", "bottom"] => Some(225.0),
            ["left"] => Some(270.0),
            ["top", "left"] | ["left", "top"] => Some(315.0),
            _ => None,
        };
    }
    if let Some(deg) = value.strip_suffix("deg") {
        return parse_number(deg);
    }
    value
        .strip_suffix("turn")
        .and_then(parse_number)
        .map(|turns| turns * 360.0)
}
