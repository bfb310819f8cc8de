//! Immutable, composable text fragments.
//!
//! A [`Span`] is either a leaf holding literal text (optionally tagged with a
//! [`console::Style`]) or a container holding an ordered list of child spans.
//! Every span knows its rendered length up front, so layout code can measure
//! content without painting it.
//!
//! ```rust
//! use spanview::Span;
//!
//! let row = Span::container(vec![Span::content("Ada"), Span::content(" Lovelace")]);
//! assert_eq!(row.content_length(), 12);
//!
//! let line = row.then(Span::line_terminator());
//! assert_eq!(line.plain_text(), "Ada Lovelace\n");
//! ```
//!
//! Spans are reference counted internally: cloning one never copies text.

use std::fmt;
use std::sync::Arc;

use console::Style;

use crate::util::text_width;

/// The line terminator appended to the last cell of every table row.
pub const LINE_TERMINATOR: &str = "\n";

/// A formatted text fragment with a known rendered length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    /// Literal text.
    Content(ContentSpan),
    /// An ordered sequence of child spans.
    Container(ContainerSpan),
}

/// Leaf span holding literal text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSpan {
    text: Arc<str>,
    style: Option<Style>,
    length: usize,
}

impl ContentSpan {
    /// The literal text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Style metadata handed through to the renderer.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }
}

/// Span made of child spans.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerSpan {
    children: Arc<[Span]>,
    length: usize,
}

impl ContainerSpan {
    /// Child spans in painting order.
    pub fn children(&self) -> &[Span] {
        &self.children
    }
}

impl Span {
    /// Create a leaf span from literal text.
    pub fn content(text: impl Into<String>) -> Self {
        Span::leaf(text.into(), None)
    }

    /// Create a leaf span carrying style metadata.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Span::leaf(text.into(), Some(style))
    }

    fn leaf(text: String, style: Option<Style>) -> Self {
        let length = text_width(&text);
        Span::Content(ContentSpan {
            text: text.into(),
            style,
            length,
        })
    }

    /// Create a container from child spans.
    pub fn container(children: impl IntoIterator<Item = Span>) -> Self {
        let children: Arc<[Span]> = children.into_iter().collect();
        let length = children.iter().map(Span::content_length).sum();
        Span::Container(ContainerSpan { children, length })
    }

    /// An empty leaf span.
    pub fn empty() -> Self {
        Span::content("")
    }

    /// A leaf span holding [`LINE_TERMINATOR`].
    pub fn line_terminator() -> Self {
        Span::content(LINE_TERMINATOR)
    }

    /// Returns a container of `self` followed by `next`.
    pub fn then(self, next: Span) -> Self {
        Span::container([self, next])
    }

    /// Number of terminal columns this span occupies when painted.
    ///
    /// For containers this is the sum over all children, recursively.
    pub fn content_length(&self) -> usize {
        match self {
            Span::Content(leaf) => leaf.length,
            Span::Container(container) => container.length,
        }
    }

    /// Returns true if the span has no content.
    pub fn is_empty(&self) -> bool {
        self.content_length() == 0
    }

    /// Concatenated text of all leaves, without styling.
    pub fn plain_text(&self) -> String {
        self.runs().map(|(text, _)| text).collect()
    }

    /// Leaf runs in painting order, each with its own style.
    pub fn runs(&self) -> Runs<'_> {
        Runs { stack: vec![self] }
    }
}

/// Depth-first iterator over the leaves of a span.
///
/// Returned by [`Span::runs`].
#[derive(Debug)]
pub struct Runs<'a> {
    stack: Vec<&'a Span>,
}

impl<'a> Iterator for Runs<'a> {
    type Item = (&'a str, Option<&'a Style>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(span) = self.stack.pop() {
            match span {
                Span::Content(leaf) => return Some((leaf.text(), leaf.style())),
                Span::Container(container) => {
                    self.stack.extend(container.children().iter().rev());
                }
            }
        }
        None
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (text, _) in self.runs() {
            f.write_str(text)?;
        }
        Ok(())
    }
}

impl Default for Span {
    fn default() -> Self {
        Span::empty()
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Span::content(text)
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Span::content(text)
    }
}

impl From<Vec<Span>> for Span {
    fn from(children: Vec<Span>) -> Self {
        Span::container(children)
    }
}
