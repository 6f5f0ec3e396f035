//! Length, grid and paint value types.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! [CSS Grid Layout Level 2](https://www.w3.org/TR/css-grid-2/)
//!
//! Every type here serializes to the exact JSON shape the rendering engine
//! reads: pixels are bare numbers, relative units are single-key objects
//! (`{"percentage": 50}`), keywords are strings.

use serde::Serialize;

use crate::color::Color;

/// Keyword values accepted wherever a [`LengthUnit`] is.
///
/// [§ 5.1 Intrinsic Sizes](https://www.w3.org/TR/css-sizing-3/#sizing-values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthKeyword {
    /// "The keyword 'auto' allows the user agent to compute the value."
    Auto,
    /// "The smallest size a box could take that doesn't lead to overflow."
    MinContent,
    /// "A box's ideal size in a given axis when given infinite available space."
    MaxContent,
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// A length as the rendering engine receives it. Relative units are kept
/// unresolved; the engine resolves them against its own layout context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LengthUnit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// Serialized as a bare number.
    Px(f32),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    Percentage {
        /// Percentage in the `0.0..=100.0` convention (not a fraction).
        percentage: f32,
    },
    /// "1vw = 1% of viewport width"
    Vw {
        /// Viewport-width units.
        vw: f32,
    },
    /// "1vh = 1% of viewport height"
    Vh {
        /// Viewport-height units.
        vh: f32,
    },
    /// "Equal to the computed value of the font-size property of the element"
    Em {
        /// Multiples of the element font size.
        em: f32,
    },
    /// "Equal to the computed value of font-size on the root element."
    Rem {
        /// Multiples of the root font size.
        rem: f32,
    },
    /// `auto`, `min-content` or `max-content`.
    Keyword(LengthKeyword),
}

impl LengthUnit {
    /// `auto`
    pub const AUTO: Self = Self::Keyword(LengthKeyword::Auto);

    /// Zero pixels, the fallback for malformed lengths.
    pub const ZERO: Self = Self::Px(0.0);

    /// Check if the value is the `auto` keyword.
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Keyword(LengthKeyword::Auto))
    }
}

impl Default for LengthUnit {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Result of expanding a side shorthand such as `padding` or `margin`.
///
/// [§ 8.3 Margin properties](https://www.w3.org/TR/CSS2/box.html#margin-properties)
///
/// One value stays a scalar, two stay a `[vertical, horizontal]` pair, and
/// three or four become `[top, right, bottom, left]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SidesValue {
    /// "If there is only one component value, it applies to all sides."
    Uniform(LengthUnit),
    /// `[vertical, horizontal]`
    Pair([LengthUnit; 2]),
    /// `[top, right, bottom, left]`
    Sides([LengthUnit; 4]),
}

impl Default for SidesValue {
    fn default() -> Self {
        Self::Uniform(LengthUnit::ZERO)
    }
}

/// [§ 7.2.3 Flexible Lengths](https://www.w3.org/TR/css-grid-2/#fr-unit)
///
/// A single grid track size: a flexible `fr` fraction or a length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GridTrackSize {
    /// "A flexible length or `<flex>` is a dimension with the fr unit."
    Fr {
        /// Share of the leftover space.
        fr: f32,
    },
    /// Any other track size.
    Length(LengthUnit),
}

impl From<LengthUnit> for GridTrackSize {
    fn from(length: LengthUnit) -> Self {
        Self::Length(length)
    }
}

/// Automatic repetition keywords for `repeat()`.
///
/// [§ 7.2.3.2 Repeat-to-fill](https://www.w3.org/TR/css-grid-2/#auto-repeat)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatKeyword {
    /// "the number of repetitions is the largest possible positive integer that does not cause the grid to overflow"
    AutoFill,
    /// Like `auto-fill`, but empty repeated tracks collapse.
    AutoFit,
}

/// First argument of `repeat()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RepeatCount {
    /// A fixed number of repetitions.
    Count(u16),
    /// `auto-fill` or `auto-fit`.
    Keyword(RepeatKeyword),
}

/// [§ 7.2 Explicit Track Sizing](https://www.w3.org/TR/css-grid-2/#track-sizing)
///
/// One entry of a `grid-template-columns`/`grid-template-rows` track list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackSizingFunction {
    /// A single track.
    Single(GridTrackSize),
    /// `repeat(count, tracks)`; serialized as `{"repeat": [count, [tracks]]}`.
    Repeat(RepeatCount, Vec<GridTrackSize>),
}

/// The start of a grid placement: a line number or a named line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GridPlacement {
    /// A numbered line (or span count).
    Line(i16),
    /// A named grid line such as `header-start`.
    Named(String),
}

/// [§ 8.3 Line-based Placement](https://www.w3.org/TR/css-grid-2/#line-placement)
///
/// `grid-row`/`grid-column` as the engine reads it. `auto` is `{null, null}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GridLine {
    /// Start line, span count, or named line.
    pub start: Option<GridPlacement>,
    /// End line, present only for `A/B` ranges.
    pub end: Option<i16>,
}

/// [§ 6.1 'box-shadow'](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
///
/// "The 'box-shadow' property attaches one or more drop-shadows to the box."
///
/// `<shadow> = inset? && <length>{3,4} && <color>`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxShadow {
    /// Shadow color.
    pub color: Color,
    /// Horizontal offset. Positive = right.
    pub offset_x: f32,
    /// Vertical offset. Positive = down.
    pub offset_y: f32,
    /// Blur radius. Default 0.
    pub blur_radius: f32,
    /// Spread radius. Default 0.
    pub spread_radius: f32,
    /// If true, shadow is drawn inside the box (inset shadow).
    pub inset: bool,
}

/// [§ 3.1 Linear Gradients](https://www.w3.org/TR/css-images-3/#linear-gradients)
///
/// Color stops are evenly distributed along the gradient line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    /// The color stops that make up the gradient.
    pub stops: Vec<Color>,
    /// The angle in degrees for the gradient direction (0-360).
    pub angle: f32,
}
