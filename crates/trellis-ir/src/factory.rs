//! Smart constructors for nodes and wrapped values.
//!
//! These mirror the shapes the rendering engine reads, so callers building
//! IR by hand do not have to spell out struct variants.

use crate::color::Color;
use crate::node::{ContainerNode, ImageNode, Node, TextNode};
use crate::style::Style;
use crate::values::{Gradient, GridTrackSize, LengthUnit};

/// A container node wrapping `children`.
#[must_use]
pub const fn container(children: Vec<Node>, style: Style) -> Node {
    Node::Container(ContainerNode { children, style })
}

/// A text node.
#[must_use]
pub fn text(text: impl Into<String>, style: Style) -> Node {
    Node::Text(TextNode {
        text: text.into(),
        style,
    })
}

/// An image node referencing `src`.
#[must_use]
pub fn image(src: impl Into<String>, style: Style) -> Node {
    Node::Image(ImageNode {
        src: src.into(),
        style,
    })
}

/// A percentage length (`0.0..=100.0`, not a fraction).
#[must_use]
pub const fn percentage(percentage: f32) -> LengthUnit {
    LengthUnit::Percentage { percentage }
}

/// A viewport-width length.
#[must_use]
pub const fn vw(vw: f32) -> LengthUnit {
    LengthUnit::Vw { vw }
}

/// A viewport-height length.
#[must_use]
pub const fn vh(vh: f32) -> LengthUnit {
    LengthUnit::Vh { vh }
}

/// An element-font-relative length.
#[must_use]
pub const fn em(em: f32) -> LengthUnit {
    LengthUnit::Em { em }
}

/// A root-font-relative length.
#[must_use]
pub const fn rem(rem: f32) -> LengthUnit {
    LengthUnit::Rem { rem }
}

/// A flexible grid track.
#[must_use]
pub const fn fr(fr: f32) -> GridTrackSize {
    GridTrackSize::Fr { fr }
}

/// A linear gradient through `stops` at `angle` degrees.
#[must_use]
pub const fn gradient(stops: Vec<Color>, angle: f32) -> Gradient {
    Gradient { stops, angle }
}
