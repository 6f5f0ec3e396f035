//! Element-tree conversion for the Trellis converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **Element protocol** - the [`Element`] union an authoring layer builds
//!   (primitives, lists, deferred values, components, fragments, host tags)
//! - **Tree Builder** - [`from_jsx`], an async walk producing the IR
//!   [`trellis_ir::Node`] sequence, and its blocking form
//!   [`from_jsx_blocking`]
//!
//! # Example
//!
//! ```
//! use trellis_jsx::{Element, Props, from_jsx_blocking};
//! use trellis_style::StyleDeclaration;
//!
//! let tree = Element::host_with(
//!     "div",
//!     Props::new()
//!         .with_style(StyleDeclaration::new().with("display", "flex"))
//!         .with_children(vec![Element::from("Hello"), Element::from("world")]),
//! );
//! let nodes = from_jsx_blocking(tree).unwrap();
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(nodes[0].children().len(), 2);
//! ```

/// Element tree to IR conversion.
pub mod builder;
/// The element protocol consumed by the tree builder.
pub mod element;
/// Conversion errors.
pub mod error;

// Re-exports for convenience
pub use builder::{from_jsx, from_jsx_blocking};
pub use element::{DeferredElement, Element, HostKind, Primitive, Props, RenderFn};
pub use error::ConversionError;
