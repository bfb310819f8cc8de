//! Renderer for output that is not a terminal (pipes, files, captured buffers).

use std::io::Write;

use super::terminal::FALLBACK_SIZE;
use super::{PlainFormatter, Renderer, SpanFormatter};
use crate::error::RenderError;
use crate::region::Region;
use crate::span::{Span, LINE_TERMINATOR};
use crate::util::text_width;

/// A renderer that writes spans sequentially, in paint order.
///
/// Only the line of a region matters. A paint on a later line than the
/// previous one first ends the current line and emits one line terminator per
/// skipped line; a paint above the current line starts a fresh line. A span
/// that does not end its line is padded with spaces to its region width, but
/// only once something else is painted on the same line, so lines carry no
/// trailing blanks.
///
/// ```rust
/// use spanview::{Region, Renderer, Span, StreamRenderer};
///
/// let mut out = StreamRenderer::new(Vec::new());
/// out.render_to_region(&Span::content("id"), Region::new(0, 0, 4, 1)).unwrap();
/// out.render_to_region(
///     &Span::content("name").then(Span::line_terminator()),
///     Region::new(4, 0, 6, 1),
/// ).unwrap();
/// assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "id  name\n");
/// ```
pub struct StreamRenderer<W: Write> {
    out: W,
    screen: Region,
    formatter: Box<dyn SpanFormatter>,
    /// Line the write position is on, once anything was written.
    line: Option<usize>,
    /// Whether the current line has text that was not terminated.
    open: bool,
    pending_pad: usize,
}

impl<W: Write> StreamRenderer<W> {
    pub fn new(out: W) -> Self {
        StreamRenderer {
            out,
            screen: Region::output(FALLBACK_SIZE.0, FALLBACK_SIZE.1),
            formatter: Box::new(PlainFormatter),
            line: None,
            open: false,
            pending_pad: 0,
        }
    }

    /// Set the region reported as the whole screen.
    pub fn with_screen(mut self, width: usize, height: usize) -> Self {
        self.screen = Region::output(width, height);
        self
    }

    /// Replace the formatter used for non-span values.
    pub fn with_formatter(mut self, formatter: impl SpanFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for StreamRenderer<W> {
    fn render_to_region(&mut self, span: &Span, region: Region) -> Result<(), RenderError> {
        let mut text = String::new();
        match self.line {
            None => {}
            Some(line) if region.top > line => {
                text.push_str(&LINE_TERMINATOR.repeat(region.top - line));
            }
            Some(line) if region.top < line => {
                if self.open {
                    text.push_str(LINE_TERMINATOR);
                }
            }
            Some(_) => text.push_str(&" ".repeat(self.pending_pad)),
        }

        for (run, style) in span.runs() {
            match style {
                Some(style) => text.push_str(&style.apply_to(run).to_string()),
                None => text.push_str(run),
            }
        }

        let plain = span.plain_text();
        let breaks = plain.matches(LINE_TERMINATOR).count();
        let tail = plain.rsplit(LINE_TERMINATOR).next().unwrap_or_default();
        self.line = Some(region.top + breaks);
        if breaks == 0 {
            self.open = true;
            self.pending_pad = region.width.saturating_sub(text_width(tail));
        } else {
            self.open = !tail.is_empty();
            self.pending_pad = 0;
        }

        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn screen_region(&self) -> Region {
        self.screen
    }

    fn formatter(&self) -> &dyn SpanFormatter {
        self.formatter.as_ref()
    }
}
