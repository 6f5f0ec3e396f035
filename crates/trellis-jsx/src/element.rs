//! The element protocol consumed by the tree builder.
//!
//! An element tree is produced by an external authoring layer (a JSX
//! runtime, a template engine, hand-written builders). Every shape it can
//! take is an explicit [`Element`] variant, so the builder dispatches by
//! matching instead of inspecting marker fields.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use trellis_style::StyleDeclaration;

/// A function component: receives its props and renders a sub-tree.
pub type RenderFn = Arc<dyn Fn(Props) -> anyhow::Result<Element> + Send + Sync>;

/// A deferred element, resolved by awaiting it.
pub type DeferredElement = Pin<Box<dyn Future<Output = anyhow::Result<Element>> + Send>>;

/// A primitive rendered through its string form.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A string.
    String(String),
    /// A number, printed without a trailing `.0` for integral values.
    Number(f64),
    /// A boolean, printed as `true`/`false`.
    Bool(bool),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// One node of an element tree.
#[derive(Default)]
pub enum Element {
    /// Nothing (`null`/`undefined`); contributes no nodes.
    #[default]
    Empty,
    /// A string, number or boolean; becomes one text node.
    Primitive(Primitive),
    /// A sequence of siblings, converted concurrently and kept in order.
    List(Vec<Element>),
    /// A value that has to be awaited before it can be converted.
    Deferred(DeferredElement),
    /// A function component to unroll.
    Component {
        /// The component function.
        render: RenderFn,
        /// Props passed to `render`.
        props: Props,
    },
    /// A fragment; its children are spliced into the parent.
    Fragment(Vec<Element>),
    /// A host element such as `div` or `img`.
    Host {
        /// Tag name.
        tag: String,
        /// Children, style and source.
        props: Props,
    },
}

impl Element {
    /// A host element with empty props.
    #[must_use]
    pub fn host(tag: impl Into<String>) -> Self {
        Self::Host {
            tag: tag.into(),
            props: Props::default(),
        }
    }

    /// A host element with the given props.
    #[must_use]
    pub fn host_with(tag: impl Into<String>, props: Props) -> Self {
        Self::Host {
            tag: tag.into(),
            props,
        }
    }

    /// A function component invoked with `props` during conversion.
    #[must_use]
    pub fn component<F>(render: F, props: Props) -> Self
    where
        F: Fn(Props) -> anyhow::Result<Self> + Send + Sync + 'static,
    {
        Self::Component {
            render: Arc::new(render),
            props,
        }
    }

    /// A deferred element resolved by awaiting `future`.
    #[must_use]
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = anyhow::Result<Self>> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }

    /// A fragment wrapping `children`.
    #[must_use]
    pub fn fragment(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Fragment(children.into_iter().collect())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Primitive(value) => f.debug_tuple("Primitive").field(value).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Component { props, .. } => f
                .debug_struct("Component")
                .field("props", props)
                .finish_non_exhaustive(),
            Self::Fragment(children) => f.debug_tuple("Fragment").field(children).finish(),
            Self::Host { tag, props } => f
                .debug_struct("Host")
                .field("tag", tag)
                .field("props", props)
                .finish(),
        }
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Self::Primitive(Primitive::String(s.to_string()))
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Self::Primitive(Primitive::String(s))
    }
}

impl From<f64> for Element {
    fn from(n: f64) -> Self {
        Self::Primitive(Primitive::Number(n))
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Self::Primitive(Primitive::Number(f64::from(n)))
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Self::Primitive(Primitive::Bool(b))
    }
}

impl From<Vec<Self>> for Element {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for Element {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// The properties of a component or host element.
#[derive(Debug, Default)]
pub struct Props {
    /// Nested content; a list when there are several children.
    pub children: Option<Box<Element>>,
    /// Inline style declarations.
    pub style: Option<StyleDeclaration>,
    /// Image source, read on `img` elements.
    pub src: Option<String>,
}

impl Props {
    /// Empty props.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the children.
    #[must_use]
    pub fn with_children(mut self, children: impl Into<Element>) -> Self {
        self.children = Some(Box::new(children.into()));
        self
    }

    /// Set the inline style.
    #[must_use]
    pub fn with_style(mut self, style: StyleDeclaration) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the image source.
    #[must_use]
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Classify a host element carrying these props.
    ///
    /// Only an `img` tag with a non-empty `src` is an image; every other
    /// host element, including an `img` without a source, is a container.
    #[must_use]
    pub fn host_kind(&self, tag: &str) -> HostKind<'_> {
        match (tag, self.src.as_deref()) {
            ("img", Some(src)) if !src.is_empty() => HostKind::Image { src },
            _ => HostKind::Container,
        }
    }
}

/// What a host element converts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind<'a> {
    /// One image node.
    Image {
        /// The image source.
        src: &'a str,
    },
    /// One container node wrapping the converted children.
    Container,
}
