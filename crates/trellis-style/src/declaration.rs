//! Style declaration input types.
//!
//! Values arrive already resolved per element (no cascade), either as a
//! number or as a CSS string, the way JSX `style` objects carry them.

use std::borrow::Cow;
use std::fmt;

/// A single declared value: a bare number or a CSS string.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// A number (lengths read it as pixels).
    Number(f32),
    /// A CSS value string such as `"10px 20px"`.
    String(String),
}

impl CssValue {
    /// Borrow this value for parsing.
    #[must_use]
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Self::Number(n) => ValueRef::Number(*n),
            Self::String(s) => ValueRef::Str(s),
        }
    }
}

impl From<f32> for CssValue {
    fn from(n: f32) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CssValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i32) -> Self {
        Self::Number(n as f32)
    }
}

impl From<&str> for CssValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for CssValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// A borrowed value handed to the parsers.
///
/// Parsers that accept "number or string" take `impl Into<ValueRef>`, so
/// both `parse_length_unit(10)` and `parse_length_unit("10px")` work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    /// A bare number.
    Number(f32),
    /// A CSS value string.
    Str(&'a str),
}

impl ValueRef<'_> {
    /// The value as text; numbers are formatted the way CSS would print them.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Str(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<f32> for ValueRef<'_> {
    fn from(n: f32) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for ValueRef<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i32) -> Self {
        Self::Number(n as f32)
    }
}

impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a CssValue> for ValueRef<'a> {
    fn from(value: &'a CssValue) -> Self {
        value.as_value_ref()
    }
}

/// An ordered set of `property: value` declarations for one element.
///
/// Property names may be given in JSX camelCase (`backgroundColor`,
/// `WebkitLineClamp`) or CSS kebab-case; both are stored in kebab-case.
/// Setting a property twice keeps its first position and the last value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleDeclaration {
    entries: Vec<(String, CssValue)>,
}

impl StyleDeclaration {
    /// Create an empty declaration block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder form of [`StyleDeclaration::set`].
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<CssValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Declare `property: value`, replacing any earlier value.
    pub fn set(&mut self, property: &str, value: impl Into<CssValue>) {
        let name = normalize_property_name(property);
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Declarations in declaration order, with kebab-case names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of declared properties.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<CssValue>> FromIterator<(K, V)> for StyleDeclaration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut declaration = Self::new();
        for (property, value) in iter {
            declaration.set(property.as_ref(), value);
        }
        declaration
    }
}

/// Convert a JSX camelCase property name to CSS kebab-case.
///
/// `backgroundColor` → `background-color`, `WebkitLineClamp` →
/// `-webkit-line-clamp`. Names already in kebab-case pass through.
#[must_use]
pub fn normalize_property_name(property: &str) -> String {
    let property = property.trim();
    let mut name = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}
