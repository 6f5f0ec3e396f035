//! Keyword enums.
//!
//! Each enum parses from its CSS keyword via [`std::str::FromStr`] (derived
//! with `strum`) and serializes to the kebab-case name the rendering engine
//! expects. The [`Default`] member is the value a malformed keyword falls
//! back to.

use serde::Serialize;
use strum_macros::EnumString;

/// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// Only the layout modes the rendering engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Display {
    /// "The element generates a block-level box."
    #[default]
    Block,
    /// "The element generates a principal flex container box."
    Flex,
    /// "The element generates a principal grid container box."
    Grid,
    /// "The element and its descendants generate no boxes."
    None,
}

/// [§ 2.1 Choosing A Positioning Scheme](https://www.w3.org/TR/css-position-3/#position-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Normal flow, offset by inset properties. `static` also maps here.
    #[default]
    #[strum(serialize = "relative", serialize = "static")]
    Relative,
    /// Taken out of flow, positioned against the containing block.
    #[strum(serialize = "absolute")]
    Absolute,
}

/// [§ 6.1 'text-overflow'](https://www.w3.org/TR/css-overflow-3/#text-overflow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TextOverflow {
    /// "Render an ellipsis character to represent clipped inline content."
    Ellipsis,
    /// "Clip inline content that overflows its block container element."
    #[default]
    Clip,
}

/// [§ 7.7 Automatic Placement: the grid-auto-flow property](https://www.w3.org/TR/css-grid-2/#grid-auto-flow-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
pub enum GridAutoFlow {
    /// "The auto-placement algorithm places items by filling each row in turn."
    #[default]
    #[strum(serialize = "row")]
    Row,
    /// "The auto-placement algorithm places items by filling each column in turn."
    #[strum(serialize = "column")]
    Column,
    /// `row dense`
    #[strum(serialize = "row dense")]
    RowDense,
    /// `column dense`
    #[strum(serialize = "column dense")]
    ColumnDense,
}

/// [§ 5.1 'flex-direction'](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FlexDirection {
    /// Main axis follows the inline axis.
    #[default]
    Row,
    /// Same as `row`, start and end swapped.
    RowReverse,
    /// Main axis follows the block axis.
    Column,
    /// Same as `column`, start and end swapped.
    ColumnReverse,
}

/// [§ 5.2 'flex-wrap'](https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FlexWrap {
    /// "The flex container is single-line."
    #[default]
    Nowrap,
    /// "The flex container is multi-line."
    Wrap,
    /// Same as `wrap`, cross-start and cross-end swapped.
    WrapReverse,
}

/// [§ 5.1 'justify-content'](https://www.w3.org/TR/css-align-3/#justify-content-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum JustifyContent {
    /// Pack toward the start edge.
    #[default]
    Start,
    /// Pack toward the end edge.
    End,
    /// Pack toward the flex container's main-start.
    FlexStart,
    /// Pack toward the flex container's main-end.
    FlexEnd,
    /// Pack around the center.
    Center,
    /// Grow auto-sized items to fill the container.
    Stretch,
    /// Distribute space between items, none at the edges.
    SpaceBetween,
    /// Distribute space around items, half-size at the edges.
    SpaceAround,
    /// Distribute space evenly, edges included.
    SpaceEvenly,
}

/// [§ 6.2 'align-items'](https://www.w3.org/TR/css-align-3/#align-items-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AlignItems {
    /// Align to the cross-start edge.
    Start,
    /// Align to the cross-end edge.
    End,
    /// Align to the flex container's cross-start.
    FlexStart,
    /// Align to the flex container's cross-end.
    FlexEnd,
    /// Center in the cross axis.
    Center,
    /// Align baselines.
    Baseline,
    /// Stretch to fill the line.
    #[default]
    Stretch,
}

/// [§ 7.1 'text-align'](https://www.w3.org/TR/css-text-3/#text-align-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TextAlign {
    /// Align to the line box's left edge.
    #[default]
    Left,
    /// Align to the line box's right edge.
    Right,
    /// Center within the line box.
    Center,
    /// Stretch lines to both edges.
    Justify,
    /// Align to the start edge.
    Start,
    /// Align to the end edge.
    End,
}

/// [§ 4.5 'object-fit'](https://www.w3.org/TR/css-images-3/#the-object-fit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ObjectFit {
    /// Scale to fit inside the box, preserving aspect ratio.
    Contain,
    /// Scale to cover the box, preserving aspect ratio.
    Cover,
    /// "The replaced content is sized to fill the element's content box."
    #[default]
    Fill,
    /// The smaller of `none` and `contain`.
    ScaleDown,
    /// Natural size, not resized.
    None,
}
