//! # spanview-test
//!
//! In-process test harness for code that paints through `spanview`.
//!
//! [`RecordingRenderer`] implements [`Renderer`] by remembering every paint
//! request instead of drawing it, so tests can assert on exactly which span
//! went to which region, and in what order.
//!
//! ```rust
//! use spanview::{Region, Span, View};
//! use spanview_test::RecordingRenderer;
//!
//! let mut recorder = RecordingRenderer::new(Region::output(20, 5));
//! let mut view = View::new(&mut recorder);
//! view.write_line(&"hi").unwrap();
//! view.write(&"there").unwrap();
//! drop(view);
//!
//! assert_eq!(recorder.texts(), vec!["hi", "there"]);
//! assert_eq!(recorder.calls()[1].region.top, 1);
//! ```

use std::fmt;

use spanview::{PlainFormatter, Region, RenderError, Renderer, Span, SpanFormatter};

/// One recorded paint request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaintCall {
    pub span: Span,
    pub region: Region,
}

impl PaintCall {
    /// Plain text of the painted span.
    pub fn text(&self) -> String {
        self.span.plain_text()
    }
}

/// A renderer that records paint requests.
pub struct RecordingRenderer {
    screen: Region,
    calls: Vec<PaintCall>,
    formatter: Box<dyn SpanFormatter>,
}

impl RecordingRenderer {
    /// Create a recorder reporting `screen` as the whole output surface.
    pub fn new(screen: Region) -> Self {
        RecordingRenderer {
            screen,
            calls: Vec::new(),
            formatter: Box::new(PlainFormatter),
        }
    }

    /// Replace the formatter used for non-span values.
    pub fn with_formatter(mut self, formatter: impl SpanFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// All paint requests in order.
    pub fn calls(&self) -> &[PaintCall] {
        &self.calls
    }

    /// Plain text of every painted span, in order.
    pub fn texts(&self) -> Vec<String> {
        self.calls.iter().map(PaintCall::text).collect()
    }

    /// Paint requests whose region starts at line `top`.
    pub fn calls_at_line(&self, top: usize) -> Vec<&PaintCall> {
        self.calls.iter().filter(|c| c.region.top == top).collect()
    }

    /// Distinct lines painted on, in first-painted order.
    pub fn painted_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = Vec::new();
        for call in &self.calls {
            if !lines.contains(&call.region.top) {
                lines.push(call.region.top);
            }
        }
        lines
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl fmt::Debug for RecordingRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingRenderer")
            .field("screen", &self.screen)
            .field("calls", &self.calls)
            .finish_non_exhaustive()
    }
}

impl Renderer for RecordingRenderer {
    fn render_to_region(&mut self, span: &Span, region: Region) -> Result<(), RenderError> {
        self.calls.push(PaintCall {
            span: span.clone(),
            region,
        });
        Ok(())
    }

    fn screen_region(&self) -> Region {
        self.screen
    }

    fn formatter(&self) -> &dyn SpanFormatter {
        self.formatter.as_ref()
    }
}

/// A formatter that refuses every value.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingFormatter;

impl SpanFormatter for FailingFormatter {
    fn format(&self, value: &dyn fmt::Display) -> Result<Span, RenderError> {
        Err(RenderError::format(format!("refused to format '{}'", value)))
    }
}
