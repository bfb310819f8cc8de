//! The paint contract between views and output surfaces.
//!
//! Views and table layouts never write characters themselves. They hand a
//! [`Span`] and a target [`Region`] to a [`Renderer`], which decides how the
//! span is wrapped and clipped inside that region.
//!
//! Three renderers ship with the crate:
//!
//! | Renderer | Surface |
//! |----------|---------|
//! | [`BufferRenderer`] | In-memory character grid, for string output and tests |
//! | [`TerminalRenderer`] | A `console::Term`, positioned by cursor moves |
//! | [`StreamRenderer`] | Any `io::Write`, only line changes honored (redirected output) |
//!
//! Values that are not spans yet are turned into spans by the renderer's
//! [`SpanFormatter`].

mod buffer;
mod stream;
mod terminal;

use std::fmt;

use crate::error::RenderError;
use crate::region::Region;
use crate::span::Span;

pub use buffer::BufferRenderer;
pub use stream::StreamRenderer;
pub use terminal::TerminalRenderer;

/// An output surface that paints spans into regions.
pub trait Renderer {
    /// Paints `span` inside `region`.
    ///
    /// Wrapping and clipping are up to the implementation, but nothing may be
    /// painted outside `region`.
    fn render_to_region(&mut self, span: &Span, region: Region) -> Result<(), RenderError>;

    /// The region covering the whole current output surface.
    fn screen_region(&self) -> Region;

    /// The formatter used to turn arbitrary values into spans.
    fn formatter(&self) -> &dyn SpanFormatter;
}

/// Converts displayable values into spans.
pub trait SpanFormatter {
    fn format(&self, value: &dyn fmt::Display) -> Result<Span, RenderError>;
}

/// Formats a value as a single unstyled span of its `Display` output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainFormatter;

impl SpanFormatter for PlainFormatter {
    fn format(&self, value: &dyn fmt::Display) -> Result<Span, RenderError> {
        Ok(Span::content(value.to_string()))
    }
}
