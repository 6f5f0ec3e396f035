//! The exported node union.
//!
//! A conversion produces a finite, acyclic tree of [`Node`]s, owned by value
//! and handed to the rendering engine as-is.

use serde::Serialize;

use crate::style::Style;

/// One node of the exported tree.
///
/// Serialized with a `type` discriminator (`"container"`, `"text"` or
/// `"image"`) next to the node's own fields and its flattened style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A box laying out its children.
    Container(ContainerNode),
    /// A run of text.
    Text(TextNode),
    /// A replaced image element.
    Image(ImageNode),
}

impl Node {
    /// The style carried by this node.
    #[must_use]
    pub const fn style(&self) -> &Style {
        match self {
            Self::Container(node) => &node.style,
            Self::Text(node) => &node.style,
            Self::Image(node) => &node.style,
        }
    }

    /// Children of a container; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Container(node) => &node.children,
            Self::Text(_) | Self::Image(_) => &[],
        }
    }
}

/// A node grouping other nodes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContainerNode {
    /// Child nodes in document order.
    pub children: Vec<Node>,
    /// Resolved style of the source element.
    #[serde(flatten)]
    pub style: Style,
}

/// A node rendering a string.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TextNode {
    /// The text content.
    pub text: String,
    /// Resolved style of the text run.
    #[serde(flatten)]
    pub style: Style,
}

/// A node rendering an image by reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ImageNode {
    /// Image source (URL, path or data URL); never loaded here.
    pub src: String,
    /// Resolved style of the image element.
    #[serde(flatten)]
    pub style: Style,
}
