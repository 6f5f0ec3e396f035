//! Typed intermediate representation handed to the layout/rendering engine.
//!
//! # Scope
//!
//! This crate defines:
//! - **Nodes** - the [`Node`] union (`container`, `text`, `image`) that forms the
//!   exported tree
//! - **Style** - the flattened [`Style`] record carried by every node
//! - **Values** - typed CSS values per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!   and [CSS Grid Layout Level 2](https://www.w3.org/TR/css-grid-2/)
//! - **Node Factory** - smart constructors in [`factory`]
//!
//! The serialized shape of these types is the contract with the rendering
//! engine: field names are snake_case, nodes carry a `type` discriminator and
//! style fields are flattened into the node object.

/// Packed color values per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// Smart constructors for nodes and wrapped length values.
pub mod factory;
/// Keyword enums (display, position, alignment, ...).
pub mod keywords;
/// The exported node union.
pub mod node;
/// The flattened per-node style record.
pub mod style;
/// Length, grid and paint value types.
pub mod values;

// Re-exports for convenience
pub use color::Color;
pub use keywords::{
    AlignItems, Display, FlexDirection, FlexWrap, GridAutoFlow, JustifyContent, ObjectFit,
    Position, TextAlign, TextOverflow,
};
pub use node::{ContainerNode, ImageNode, Node, TextNode};
pub use style::Style;
pub use values::{
    BoxShadow, Gradient, GridLine, GridPlacement, GridTrackSize, LengthKeyword, LengthUnit,
    RepeatCount, RepeatKeyword, SidesValue, TrackSizingFunction,
};
