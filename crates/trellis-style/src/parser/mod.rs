//! Per-grammar value parsers.
//!
//! Every parser here is a small hand-written scanner over one CSS value
//! grammar. Leaf parsers ([`length`], [`keywords`]) are total; the shorthand
//! parsers tokenize with [`tokenize`] and delegate to them.

/// Colors per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// `linear-gradient()` per [CSS Images Level 3](https://www.w3.org/TR/css-images-3/).
pub mod gradient;
/// Grid track lists, `repeat()` and line placement.
pub mod grid;
/// Keyword-valued properties.
pub mod keywords;
/// Lengths per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod length;
/// `aspect-ratio`.
pub mod ratio;
/// `box-shadow`.
pub mod shadow;
/// Four-side shorthands.
pub mod sides;
/// Top-level token splitting.
pub mod tokenize;

pub use color::{parse_color, try_parse_color};
pub use gradient::parse_linear_gradient;
pub use grid::{parse_grid_line, parse_grid_track_size, parse_track_sizing_function};
pub use keywords::{
    parse_align_items, parse_display, parse_flex_direction, parse_flex_wrap, parse_font_weight,
    parse_grid_auto_flow, parse_justify_content, parse_object_fit, parse_position,
    parse_text_align, parse_text_overflow,
};
pub use length::{parse_length_unit, parse_number, parse_px};
pub use ratio::parse_aspect_ratio;
pub use shadow::parse_box_shadow;
pub use sides::parse_side_length_units;
