//! Renderer for an attached terminal.

use console::Term;

use super::{PlainFormatter, Renderer, SpanFormatter};
use crate::error::RenderError;
use crate::region::Region;
use crate::span::Span;
use crate::util::fit_lines;

/// Screen size assumed when no terminal is attached.
pub const FALLBACK_SIZE: (usize, usize) = (80, 24);

/// A renderer that positions the terminal cursor for every painted line.
///
/// Styles carried by spans are applied through `console`, which drops them
/// when colors are disabled for the terminal.
pub struct TerminalRenderer {
    term: Term,
    formatter: Box<dyn SpanFormatter>,
}

impl TerminalRenderer {
    /// Render to standard output.
    pub fn stdout() -> Self {
        Self::new(Term::stdout())
    }

    /// Render to standard error.
    pub fn stderr() -> Self {
        Self::new(Term::stderr())
    }

    pub fn new(term: Term) -> Self {
        TerminalRenderer {
            term,
            formatter: Box::new(PlainFormatter),
        }
    }

    /// Replace the formatter used for non-span values.
    pub fn with_formatter(mut self, formatter: impl SpanFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The underlying terminal handle.
    pub fn term(&self) -> &Term {
        &self.term
    }
}

impl Renderer for TerminalRenderer {
    fn render_to_region(&mut self, span: &Span, region: Region) -> Result<(), RenderError> {
        for (offset, line) in fit_lines(span.runs(), region.width, region.height)
            .iter()
            .enumerate()
        {
            self.term.move_cursor_to(region.left, region.top + offset)?;

            let mut painted = String::new();
            for run in &line.runs {
                match &run.style {
                    Some(style) => painted.push_str(&style.apply_to(&run.text).to_string()),
                    None => painted.push_str(&run.text),
                }
            }
            painted.push_str(&" ".repeat(region.width.saturating_sub(line.width)));
            self.term.write_str(&painted)?;
        }
        self.term.flush()?;
        Ok(())
    }

    fn screen_region(&self) -> Region {
        let (width, height) = terminal_size::terminal_size()
            .map(|(w, h)| (w.0 as usize, h.0 as usize))
            .unwrap_or(FALLBACK_SIZE);
        Region::output(width, height)
    }

    fn formatter(&self) -> &dyn SpanFormatter {
        self.formatter.as_ref()
    }
}
