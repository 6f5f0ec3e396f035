//! The flattened per-node style record.
//!
//! Every field is optional: an unset field is omitted from the serialized
//! node and the rendering engine applies its own initial value.

use serde::Serialize;

use crate::color::Color;
use crate::keywords::{
    AlignItems, Display, FlexDirection, FlexWrap, GridAutoFlow, JustifyContent, ObjectFit,
    Position, TextAlign, TextOverflow,
};
use crate::values::{
    BoxShadow, Gradient, GridLine, GridTrackSize, LengthUnit, SidesValue, TrackSizingFunction,
};

/// Resolved style fields of a node.
///
/// Field names are the snake_case forms of the CSS property names and are
/// flattened into the node object on serialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Style {
    // Box generation and positioning
    /// `display`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    /// `position`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// `inset` shorthand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inset: Option<SidesValue>,
    /// `top`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<LengthUnit>,
    /// `right`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<LengthUnit>,
    /// `bottom`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<LengthUnit>,
    /// `left`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<LengthUnit>,

    // Sizing
    /// `width`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<LengthUnit>,
    /// `height`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<LengthUnit>,
    /// `min-width`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<LengthUnit>,
    /// `min-height`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<LengthUnit>,
    /// `max-width`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<LengthUnit>,
    /// `max-height`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<LengthUnit>,
    /// `aspect-ratio` as width / height. `NaN` when the source was malformed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f32>,

    // Box model
    /// `padding`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<SidesValue>,
    /// `margin`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<SidesValue>,
    /// `border-width`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<SidesValue>,
    /// `border-radius`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<SidesValue>,
    /// `border-color`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,

    // Flexbox
    /// `flex-direction`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    /// `flex-wrap`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_wrap: Option<FlexWrap>,
    /// `flex-grow`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f32>,
    /// `flex-shrink`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f32>,
    /// `flex-basis`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<LengthUnit>,
    /// `justify-content`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// `align-items`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    /// `gap` (one value, or `[row, column]`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<SidesValue>,

    // Grid
    /// `grid-auto-flow`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_flow: Option<GridAutoFlow>,
    /// `grid-auto-columns`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_columns: Option<Vec<GridTrackSize>>,
    /// `grid-auto-rows`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_auto_rows: Option<Vec<GridTrackSize>>,
    /// `grid-template-columns`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_columns: Option<Vec<TrackSizingFunction>>,
    /// `grid-template-rows`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_template_rows: Option<Vec<TrackSizingFunction>>,
    /// `grid-column`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_column: Option<GridLine>,
    /// `grid-row`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_row: Option<GridLine>,

    // Paint
    /// `object-fit`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<ObjectFit>,
    /// `background-color`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// `background-image` (linear gradients only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<Gradient>,
    /// `box-shadow`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<BoxShadow>,

    // Text
    /// `color`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// `font-size`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<LengthUnit>,
    /// `font-family`, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// `font-weight`, clamped to `1..=1000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f32>,
    /// `line-height`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LengthUnit>,
    /// `letter-spacing`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<LengthUnit>,
    /// `text-align`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// `text-overflow`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_overflow: Option<TextOverflow>,
    /// `line-clamp`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_clamp: Option<u32>,
}

impl Style {
    /// Check if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
