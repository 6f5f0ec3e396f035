//! CSS value parsing and style resolution for the Trellis converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value Parsers** ([CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Lengths in `px`, `%`, `em`, `rem`, `vw`, `vh`
//!   - The sizing keywords `auto`, `min-content`, `max-content`
//!
//! - **Keyword Parsers**
//!   - `display`, `position`, `text-overflow`, `grid-auto-flow`, flexbox and
//!     alignment keywords, `font-weight`
//!
//! - **Shorthand Parsers**
//!   - Side shorthands (`padding`, `margin`, ...)
//!   - `aspect-ratio`, `box-shadow`
//!   - Grid track lists, `repeat()`, and line placement
//!   - Colors and `linear-gradient()`
//!
//! - **Style Resolution**
//!   - Mapping a [`StyleDeclaration`] onto the IR [`trellis_ir::Style`] record
//!
//! # Error policy
//!
//! Parsers are total: malformed input resolves to a conservative default and
//! emits a deduplicated warning. The exceptions are `box-shadow` with the
//! wrong number of components and `aspect-ratio` with a zero denominator,
//! which return a [`ValidationError`].
//!
//! # Not Yet Implemented
//!
//! - `calc()` and other math functions
//! - Multiple comma-separated shadows or backgrounds
//! - `minmax()` and `fit-content()` track sizes

/// Style declaration input types.
pub mod declaration;
/// Validation errors raised by the strict shorthand parsers.
pub mod error;
/// Per-grammar value parsers.
pub mod parser;
/// Declaration to IR style mapping.
pub mod resolve;

// Re-exports for convenience
pub use declaration::{CssValue, StyleDeclaration, ValueRef};
pub use error::ValidationError;
pub use parser::{
    parse_align_items, parse_aspect_ratio, parse_box_shadow, parse_color, parse_display,
    parse_flex_direction, parse_flex_wrap, parse_font_weight, parse_grid_auto_flow,
    parse_grid_line, parse_grid_track_size, parse_justify_content, parse_length_unit,
    parse_linear_gradient, parse_object_fit, parse_position, parse_px, parse_side_length_units,
    parse_text_align, parse_text_overflow, parse_track_sizing_function, try_parse_color,
};
pub use resolve::resolve_style;
