//! Declaration to IR style mapping.
//!
//! [§ 4 Value Processing](https://www.w3.org/TR/css-cascade-4/#value-stages)
//!
//! Values arrive already cascaded, so resolution is a single pass that routes
//! each declared property to the parser for its grammar and stores the result
//! in the matching [`Style`] field. A property declared twice keeps the last
//! value.

use trellis_common::warning::warn_once;
use trellis_ir::factory::{em, percentage};
use trellis_ir::{Color, LengthUnit, Style};

use crate::declaration::{StyleDeclaration, ValueRef};
use crate::error::ValidationError;
use crate::parser::grid::{parse_grid_line, parse_grid_track_size, parse_track_sizing_function};
use crate::parser::keywords::{
    parse_align_items, parse_display, parse_flex_direction, parse_flex_wrap, parse_font_weight,
    parse_grid_auto_flow, parse_justify_content, parse_object_fit, parse_position,
    parse_text_align, parse_text_overflow,
};
use crate::parser::length::{parse_length_unit, parse_number};
use crate::parser::{
    parse_aspect_ratio, parse_box_shadow, parse_linear_gradient, parse_side_length_units,
    try_parse_color,
};

/// Resolve a declaration block into the style fields of an IR node.
///
/// Unknown properties are skipped with a warning.
///
/// # Errors
///
/// Returns the [`ValidationError`] of a malformed `box-shadow` or an
/// `aspect-ratio` with a zero denominator.
pub fn resolve_style(declaration: &StyleDeclaration) -> Result<Style, ValidationError> {
    let mut style = Style::default();
    for (property, value) in declaration.iter() {
        log::trace!("resolving {property}: {value:?}");
        apply_declaration(&mut style, property, value.as_value_ref())?;
    }
    Ok(style)
}

/// Store one declaration into `style`.
fn apply_declaration(
    style: &mut Style,
    property: &str,
    value: ValueRef<'_>,
) -> Result<(), ValidationError> {
    let text = value.to_text();
    let text = text.as_ref();

    match property {
        // [CSS Display Level 3](https://www.w3.org/TR/css-display-3/)
        "display" => style.display = Some(parse_display(text)),

        // [CSS Positioned Layout Level 3](https://www.w3.org/TR/css-position-3/)
        "position" => style.position = Some(parse_position(text)),
        "inset" => style.inset = Some(parse_side_length_units(value)),
        "top" => style.top = Some(parse_length_unit(value)),
        "right" => style.right = Some(parse_length_unit(value)),
        "bottom" => style.bottom = Some(parse_length_unit(value)),
        "left" => style.left = Some(parse_length_unit(value)),

        // [CSS Box Sizing Level 3](https://www.w3.org/TR/css-sizing-3/)
        "width" => style.width = Some(parse_length_unit(value)),
        "height" => style.height = Some(parse_length_unit(value)),
        "min-width" => style.min_width = Some(parse_length_unit(value)),
        "min-height" => style.min_height = Some(parse_length_unit(value)),
        "max-width" => style.max_width = Some(parse_length_unit(value)),
        "max-height" => style.max_height = Some(parse_length_unit(value)),
        "aspect-ratio" => style.aspect_ratio = Some(parse_aspect_ratio(value)?),

        // [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/)
        "padding" => style.padding = Some(parse_side_length_units(value)),
        "margin" => style.margin = Some(parse_side_length_units(value)),
        "border-width" => style.border_width = Some(parse_side_length_units(value)),
        "border-radius" => style.border_radius = Some(parse_side_length_units(value)),
        "border-color" => style.border_color = color_or(property, text, style.border_color),

        // [CSS Flexible Box Layout Level 1](https://www.w3.org/TR/css-flexbox-1/)
        "flex" => apply_flex_shorthand(style, value),
        "flex-direction" => style.flex_direction = Some(parse_flex_direction(text)),
        "flex-wrap" => style.flex_wrap = Some(parse_flex_wrap(text)),
        "flex-grow" => style.flex_grow = Some(number_or(property, value, 0.0)),
        "flex-shrink" => style.flex_shrink = Some(number_or(property, value, 1.0)),
        "flex-basis" => style.flex_basis = Some(parse_length_unit(value)),
        "justify-content" => style.justify_content = Some(parse_justify_content(text)),
        "align-items" => style.align_items = Some(parse_align_items(text)),
        "gap" => style.gap = Some(parse_side_length_units(value)),

        // [CSS Grid Layout Level 2](https://www.w3.org/TR/css-grid-2/)
        "grid-auto-flow" => style.grid_auto_flow = Some(parse_grid_auto_flow(text)),
        "grid-auto-columns" => style.grid_auto_columns = Some(parse_grid_track_size(text)),
        "grid-auto-rows" => style.grid_auto_rows = Some(parse_grid_track_size(text)),
        "grid-template-columns" => {
            style.grid_template_columns = Some(parse_track_sizing_function(text));
        }
        "grid-template-rows" => style.grid_template_rows = Some(parse_track_sizing_function(text)),
        "grid-column" => style.grid_column = Some(parse_grid_line(value)),
        "grid-row" => style.grid_row = Some(parse_grid_line(value)),

        // [CSS Images Level 3](https://www.w3.org/TR/css-images-3/)
        // [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/)
        "object-fit" => style.object_fit = Some(parse_object_fit(text)),
        "background-color" => {
            style.background_color = color_or(property, text, style.background_color);
        }
        "background-image" => match text.trim() {
            "none" => {}
            image => {
                if let Some(gradient) = parse_linear_gradient(image) {
                    style.background_image = Some(gradient);
                }
            }
        },
        // Only a lone gradient or a lone color is understood.
        "background" => match text.trim() {
            "none" => {}
            image if image.starts_with("linear-gradient") => {
                if let Some(gradient) = parse_linear_gradient(image) {
                    style.background_image = Some(gradient);
                }
            }
            color => style.background_color = color_or(property, color, style.background_color),
        },
        "box-shadow" => style.box_shadow = Some(parse_box_shadow(text)?),

        // [CSS Fonts Level 4](https://www.w3.org/TR/css-fonts-4/)
        // [CSS Text Level 3](https://www.w3.org/TR/css-text-3/)
        "color" => style.color = color_or(property, text, style.color),
        "font-size" => style.font_size = Some(parse_length_unit(value)),
        "font-family" => style.font_family = Some(text.trim().to_string()),
        "font-weight" => style.font_weight = Some(parse_font_weight(value)),
        "line-height" => style.line_height = Some(parse_line_height(value)),
        "letter-spacing" => style.letter_spacing = Some(parse_length_unit(value)),
        "text-align" => style.text_align = Some(parse_text_align(text)),
        "text-overflow" => style.text_overflow = Some(parse_text_overflow(text)),
        "line-clamp" | "-webkit-line-clamp" => style.line_clamp = parse_line_clamp(value),

        _ => {
            warn_once("style", &format!("unsupported property '{property}'"));
        }
    }

    Ok(())
}

/// A color property, or `current` with a warning when `text` is not a color
/// we can emit (`currentColor`, `inherit`, images).
fn color_or(property: &str, text: &str, current: Option<Color>) -> Option<Color> {
    let color = try_parse_color(text);
    if color.is_none() {
        warn_once("style", &format!("unsupported {property} '{}'", text.trim()));
    }
    color.or(current)
}

/// A plain `<number>` property, or `default` with a warning.
fn number_or(property: &str, value: ValueRef<'_>, default: f32) -> f32 {
    let number = match value {
        ValueRef::Number(n) => Some(n),
        ValueRef::Str(s) => parse_number(s),
    };
    number.unwrap_or_else(|| {
        warn_once("style", &format!("invalid {property} '{value}', using {default}"));
        default
    })
}

/// [§ 7.1 The flex Shorthand](https://www.w3.org/TR/css-flexbox-1/#flex-property)
///
/// `none | [ <'flex-grow'> <'flex-shrink'>? || <'flex-basis'> ]`
///
/// "When omitted from the flex shorthand, its specified value is 1" for
/// `flex-shrink`, and "0" for `flex-basis`.
fn apply_flex_shorthand(style: &mut Style, value: ValueRef<'_>) {
    let (grow, shrink, basis) = match value {
        ValueRef::Number(grow) => (grow, 1.0, percentage(0.0)),
        ValueRef::Str(s) => {
            let tokens: Vec<&str> = s.split_ascii_whitespace().collect();
            match tokens.as_slice() {
                ["none"] => (0.0, 0.0, LengthUnit::AUTO),
                ["auto"] => (1.0, 1.0, LengthUnit::AUTO),
                [single] => match parse_number(*single) {
                    Some(grow) => (grow, 1.0, percentage(0.0)),
                    None => (1.0, 1.0, parse_length_unit(*single)),
                },
                [grow, second] => {
                    let grow = number_or("flex", ValueRef::Str(*grow), 0.0);
                    match parse_number(*second) {
                        Some(shrink) => (grow, shrink, percentage(0.0)),
                        None => (grow, 1.0, parse_length_unit(*second)),
                    }
                }
                [grow, shrink, basis] => (
                    number_or("flex", ValueRef::Str(*grow), 0.0),
                    number_or("flex", ValueRef::Str(*shrink), 1.0),
                    parse_length_unit(*basis),
                ),
                _ => {
                    warn_once("style", &format!("invalid flex '{s}'"));
                    return;
                }
            }
        }
    };

    style.flex_grow = Some(grow);
    style.flex_shrink = Some(shrink);
    style.flex_basis = Some(basis);
}

/// [§ 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
///
/// "`<number>`: The used value of the property is this number multiplied by
/// the element's computed font size."
///
/// Unitless numbers are therefore emitted as `em`; everything else is a
/// regular length.
fn parse_line_height(value: ValueRef<'_>) -> LengthUnit {
    match value {
        ValueRef::Number(multiplier) => em(multiplier),
        ValueRef::Str(s) => parse_number(s).map_or_else(|| parse_length_unit(s), em),
    }
}

/// [§ 6.1 'line-clamp'](https://www.w3.org/TR/css-overflow-4/#line-clamp)
///
/// `none | <integer [1,∞]>`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_line_clamp(value: ValueRef<'_>) -> Option<u32> {
    let lines = match value {
        ValueRef::Number(n) if n >= 1.0 && n.fract() == 0.0 => Some(n as u32),
        ValueRef::Number(_) => None,
        ValueRef::Str("none") => return None,
        ValueRef::Str(s) => s.trim().parse::<u32>().ok().filter(|n| *n >= 1),
    };
    if lines.is_none() {
        warn_once("style", &format!("invalid line-clamp '{value}'"));
    }
    lines
}
