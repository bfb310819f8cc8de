//! Line-oriented writing into a region.
//!
//! A [`View`] is a cursor over a [`Region`]. Writes paint at the cursor's
//! current line; [`View::newline`] moves the cursor down by shrinking the
//! *effective region* one line from the top. Once only one line is left, the
//! cursor stays put instead of writing past the bottom of the region.
//!
//! Every [`View::render`] call starts over from the top of the bound region,
//! so one view can render many values, one after another.
//!
//! ```rust
//! use spanview::{BufferRenderer, Region, View};
//!
//! let mut screen = BufferRenderer::new(10, 3);
//! let mut view = View::with_region(&mut screen, Region::new(0, 0, 10, 2));
//! view.write_line(&"first").unwrap();
//! view.write_line(&"second").unwrap();
//! view.write_line(&"third").unwrap();
//! drop(view);
//!
//! // The region is two lines tall, so "third" overwrote "second".
//! assert_eq!(screen.lines(), vec!["first", "third", ""]);
//! ```

use std::fmt;

use tracing::trace;

use crate::error::RenderError;
use crate::region::Region;
use crate::renderer::Renderer;
use crate::span::Span;
use crate::table::TableBuilder;

/// Renders values of type `T` through a [`View`].
///
/// Implement this once per value type; [`View::render`] resets the cursor and
/// then calls [`ViewRender::on_render`].
///
/// ```rust
/// use spanview::{BufferRenderer, RenderError, Renderer, View, ViewRender};
///
/// struct Greeting;
///
/// impl ViewRender<str> for Greeting {
///     fn on_render<R: Renderer + ?Sized>(
///         &self,
///         view: &mut View<'_, R>,
///         name: &str,
///     ) -> Result<(), RenderError> {
///         view.write_line(&format!("Hello, {name}!"))
///     }
/// }
///
/// let mut screen = BufferRenderer::new(20, 2);
/// let mut view = View::new(&mut screen);
/// view.render(&Greeting, "Ada").unwrap();
/// view.render(&Greeting, "Grace").unwrap();
/// drop(view);
/// assert_eq!(screen.lines(), vec!["Hello, Grace!", ""]);
/// ```
pub trait ViewRender<T: ?Sized> {
    fn on_render<R: Renderer + ?Sized>(
        &self,
        view: &mut View<'_, R>,
        value: &T,
    ) -> Result<(), RenderError>;
}

/// A writing cursor bound to a renderer and a region.
pub struct View<'r, R: Renderer + ?Sized> {
    renderer: &'r mut R,
    region: Region,
    effective_region: Region,
    vertical_offset: usize,
}

impl<'r, R: Renderer + ?Sized> View<'r, R> {
    /// Bind a view to the renderer's whole screen.
    pub fn new(renderer: &'r mut R) -> Self {
        let region = renderer.screen_region();
        Self::with_region(renderer, region)
    }

    /// Bind a view to `region`.
    pub fn with_region(renderer: &'r mut R, region: Region) -> Self {
        View {
            renderer,
            region,
            effective_region: region.detached(),
            vertical_offset: 0,
        }
    }

    /// The region this view was bound to.
    pub fn region(&self) -> Region {
        self.region
    }

    /// What is left of the region for the current render pass.
    pub fn effective_region(&self) -> Region {
        self.effective_region
    }

    /// Lines advanced since the last reset.
    pub fn vertical_offset(&self) -> usize {
        self.vertical_offset
    }

    /// Resets the cursor, then renders `value` with `step`.
    pub fn render<T, V>(&mut self, step: &V, value: &T) -> Result<(), RenderError>
    where
        T: ?Sized,
        V: ViewRender<T> + ?Sized,
    {
        self.render_with(|view| step.on_render(view, value))
    }

    /// Resets the cursor, then runs `f` against the view.
    pub fn render_with<F>(&mut self, f: F) -> Result<(), RenderError>
    where
        F: FnOnce(&mut Self) -> Result<(), RenderError>,
    {
        self.reset();
        f(self)
    }

    fn reset(&mut self) {
        self.effective_region = self.region.detached();
        self.vertical_offset = 0;
    }

    /// Formats `value` with the renderer's formatter without painting it.
    ///
    /// Useful for composing several formatted values into one span.
    pub fn span(&self, value: &dyn fmt::Display) -> Result<Span, RenderError> {
        self.renderer.formatter().format(value)
    }

    /// Formats `value` and paints it at the current line.
    pub fn write(&mut self, value: &dyn fmt::Display) -> Result<(), RenderError> {
        let span = self.span(value)?;
        self.write_span(&span)
    }

    /// Paints `span` at the current line.
    pub fn write_span(&mut self, span: &Span) -> Result<(), RenderError> {
        self.renderer.render_to_region(span, self.effective_region)
    }

    /// Moves the cursor down one line.
    ///
    /// Does nothing once the effective region is a single line (or less).
    pub fn newline(&mut self) {
        if self.effective_region.height <= 1 {
            trace!(offset = self.vertical_offset, "region exhausted, line advance ignored");
            return;
        }
        self.vertical_offset += 1;
        self.effective_region = self.effective_region.shrink_one_line();
        trace!(offset = self.vertical_offset, "advanced one line");
    }

    /// [`write`](Self::write) followed by [`newline`](Self::newline).
    pub fn write_line(&mut self, value: &dyn fmt::Display) -> Result<(), RenderError> {
        self.write(value)?;
        self.newline();
        Ok(())
    }

    /// [`write_span`](Self::write_span) followed by [`newline`](Self::newline).
    pub fn write_span_line(&mut self, span: &Span) -> Result<(), RenderError> {
        self.write_span(span)?;
        self.newline();
        Ok(())
    }

    /// Lays out `items` as a table and paints it at the current offset.
    ///
    /// `configure` registers the columns. Every cell is rendered and measured
    /// before the first one is painted. Rows are painted at
    /// `vertical_offset + row`; the cursor itself does not move.
    pub fn render_table<'a, T, F>(&mut self, items: &[T], configure: F) -> Result<(), RenderError>
    where
        F: FnOnce(&mut TableBuilder<'a, T>),
    {
        let mut table = TableBuilder::new();
        configure(&mut table);
        let layout = table.measure(items)?;
        layout.paint(&mut *self.renderer, self.vertical_offset)
    }
}

impl<R: Renderer + ?Sized> fmt::Debug for View<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("region", &self.region)
            .field("effective_region", &self.effective_region)
            .field("vertical_offset", &self.vertical_offset)
            .finish_non_exhaustive()
    }
}
