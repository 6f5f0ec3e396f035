//! Element tree to IR conversion.
//!
//! The walk runs in two passes over an arena of slots, one slot per element
//! position in document order:
//!
//! 1. **Expand**: elements are taken from a work list. Components are
//!    rendered in place, lists and fragments reserve one slot per item, and
//!    deferred elements are parked in a shared [`FuturesUnordered`] so every
//!    pending value in the tree is polled jointly. The first error drops all
//!    pending work and is returned as-is.
//! 2. **Assemble**: slots are folded into nodes from the last to the first.
//!    A child always sits after its parent, so every child is built (and its
//!    style resolved) before the container that holds it.
//!
//! Neither pass recurses, so nesting depth is bounded by memory rather than
//! by the thread's stack.

use futures::executor::block_on;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use trellis_common::warning::warn_once;
use trellis_ir::factory::{container, image, text};
use trellis_ir::{Node, Style};
use trellis_style::{StyleDeclaration, ValidationError, resolve_style};

use crate::element::{Element, HostKind, Props};
use crate::error::ConversionError;

/// Convert an element tree into a flat, ordered sequence of IR nodes.
///
/// # Errors
///
/// Returns the first error raised by a function component, a deferred
/// element, or a style value that fails validation. Components and deferred
/// elements are all settled before any style is resolved. No partial output
/// is returned.
pub async fn from_jsx(element: Element) -> Result<Vec<Node>, ConversionError> {
    Walk::new(element).run().await
}

/// Run [`from_jsx`] to completion on the current thread.
///
/// # Errors
///
/// See [`from_jsx`].
pub fn from_jsx_blocking(element: Element) -> Result<Vec<Node>, ConversionError> {
    block_on(from_jsx(element))
}

/// What one position in the tree expanded to.
enum Slot {
    /// Queued, or waiting on a deferred element.
    Pending,
    /// Produces no nodes.
    Empty,
    Text(String),
    Image {
        src: String,
        style: Option<StyleDeclaration>,
    },
    Container {
        style: Option<StyleDeclaration>,
        children: Option<usize>,
    },
    /// A list or fragment: the listed slots are spliced in order.
    Splice(Vec<usize>),
}

/// A deferred element tagged with the slot it settles into.
type Parked = BoxFuture<'static, (usize, anyhow::Result<Element>)>;

struct Walk {
    slots: Vec<Slot>,
    /// Elements still to expand. Popped from the back, so siblings are
    /// pushed in reverse to expand in document order.
    queue: Vec<(usize, Element)>,
    parked: FuturesUnordered<Parked>,
}

impl Walk {
    fn new(root: Element) -> Self {
        Self {
            slots: vec![Slot::Pending],
            queue: vec![(0, root)],
            parked: FuturesUnordered::new(),
        }
    }

    async fn run(mut self) -> Result<Vec<Node>, ConversionError> {
        loop {
            while let Some((slot, element)) = self.queue.pop() {
                self.expand(slot, element)?;
            }
            match self.parked.next().await {
                Some((slot, settled)) => {
                    let element = settled.map_err(ConversionError::Deferred)?;
                    self.queue.push((slot, element));
                }
                None => break,
            }
        }
        Ok(assemble(self.slots)?)
    }

    fn expand(&mut self, slot: usize, element: Element) -> Result<(), ConversionError> {
        let expanded = match element {
            Element::Empty => Slot::Empty,
            Element::Primitive(value) => Slot::Text(value.to_string()),
            Element::List(items) | Element::Fragment(items) => self.splice(items),
            Element::Deferred(deferred) => {
                self.parked
                    .push(deferred.map(move |settled| (slot, settled)).boxed());
                Slot::Pending
            }
            Element::Component { render, props } => {
                let rendered = render(props).map_err(ConversionError::Component)?;
                self.queue.push((slot, rendered));
                Slot::Pending
            }
            Element::Host { tag, props } => self.host(&tag, props),
        };
        self.slots[slot] = expanded;
        Ok(())
    }

    fn reserve(&mut self, count: usize) -> std::ops::Range<usize> {
        let start = self.slots.len();
        self.slots.resize_with(start + count, || Slot::Pending);
        start..start + count
    }

    fn splice(&mut self, items: Vec<Element>) -> Slot {
        let reserved = self.reserve(items.len());
        self.queue.extend(reserved.clone().zip(items).rev());
        Slot::Splice(reserved.collect())
    }

    /// A host element becomes exactly one image or container node.
    fn host(&mut self, tag: &str, props: Props) -> Slot {
        if let HostKind::Image { src } = props.host_kind(tag) {
            let src = src.to_owned();
            return Slot::Image {
                src,
                style: props.style,
            };
        }
        if tag == "img" {
            warn_once("jsx", "<img> without a src is converted as a container");
        }

        log::trace!("converting <{tag}>");
        let children = props.children.map(|children| {
            let slot = self.reserve(1).start;
            self.queue.push((slot, *children));
            slot
        });
        Slot::Container {
            style: props.style,
            children,
        }
    }
}

/// Fold expanded slots into nodes, children before parents.
fn assemble(slots: Vec<Slot>) -> Result<Vec<Node>, ValidationError> {
    let mut built: Vec<Vec<Node>> = Vec::new();
    built.resize_with(slots.len(), Vec::new);

    for (index, slot) in slots.into_iter().enumerate().rev() {
        let nodes = match slot {
            Slot::Pending | Slot::Empty => Vec::new(),
            Slot::Text(value) => vec![text(value, Style::default())],
            Slot::Image { src, style } => vec![image(src, style_of(style.as_ref())?)],
            Slot::Container { style, children } => {
                let children = children
                    .map(|child| std::mem::take(&mut built[child]))
                    .unwrap_or_default();
                vec![container(children, style_of(style.as_ref())?)]
            }
            Slot::Splice(items) => items
                .into_iter()
                .flat_map(|item| std::mem::take(&mut built[item]))
                .collect(),
        };
        built[index] = nodes;
    }
    Ok(built.into_iter().next().unwrap_or_default())
}

fn style_of(declaration: Option<&StyleDeclaration>) -> Result<Style, ValidationError> {
    declaration.map_or_else(|| Ok(Style::default()), resolve_style)
}
