//! # Spanview - Span Layout for Console Output
//!
//! `spanview` composes text fragments ("spans") into rectangular regions of a
//! console, and lays out lists of items as tables whose column widths come
//! from the rendered content.
//!
//! ## Core Concepts
//!
//! - [`Span`]: Immutable text fragment that knows its rendered length
//! - [`Region`]: Rectangle on the screen (left, top, width, height)
//! - [`Renderer`]: Output surface that paints a span into a region
//! - [`View`]: Line cursor over a region, with table rendering
//! - [`table`]: Column definitions, measurement and painting
//!
//! ## Quick Start
//!
//! ```rust
//! use spanview::{BufferRenderer, Span, View};
//!
//! struct Task {
//!     id: u32,
//!     title: &'static str,
//! }
//!
//! let tasks = vec![
//!     Task { id: 1, title: "Write docs" },
//!     Task { id: 12, title: "Ship" },
//! ];
//!
//! let mut screen = BufferRenderer::new(40, 5);
//! let mut view = View::new(&mut screen);
//!
//! view.write_line(&"Open tasks").unwrap();
//! view.render_table(&tasks, |table| {
//!     table
//!         .column("Id", |t: &Task| Span::content(t.id.to_string()))
//!         .column("Title", |t: &Task| Span::content(t.title));
//! })
//! .unwrap();
//! drop(view);
//!
//! assert_eq!(
//!     screen.lines(),
//!     vec!["Open tasks", "Id  Title", "1   Write docs", "12  Ship", ""]
//! );
//! ```
//!
//! ## Styling
//!
//! Spans carry an optional [`console::Style`]. The engine never interprets
//! styles, it hands them to the renderer, and [`TerminalRenderer`] applies
//! them when colors are enabled.
//!
//! ```rust
//! use spanview::Span;
//! use console::Style;
//!
//! let header = Span::styled("Name", Style::new().bold());
//! assert_eq!(header.content_length(), 4);
//! ```
//!
//! ## Logging
//!
//! Table measurement and cursor movement emit `tracing` events at `debug`
//! and `trace` level. Install any subscriber to see them.

mod error;
pub mod region;
pub mod renderer;
pub mod span;
pub mod table;
mod util;
pub mod view;

// Error type
pub use error::RenderError;

// Geometry and text model
pub use region::Region;
pub use span::{ContainerSpan, ContentSpan, Span, LINE_TERMINATOR};

// Renderers
pub use renderer::{
    BufferRenderer, PlainFormatter, Renderer, SpanFormatter, StreamRenderer, TerminalRenderer,
};

// Views and tables
pub use table::{TableBuilder, TableColumn, TableConfig, TableLayout};
pub use view::{View, ViewRender};

// Utility exports
pub use util::text_width;
