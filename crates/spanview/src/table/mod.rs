//! Column layout for lists of items.
//!
//! A table is described by registering columns on a [`TableBuilder`]. Each
//! column pairs a header span with a function rendering one item into a cell.
//! Widths come from the rendered content: a column is as wide as its widest
//! cell plus its gutter (2 by default), and columns sit side by side from the
//! left edge.
//!
//! ```rust
//! use spanview::table::TableBuilder;
//! use spanview::{BufferRenderer, Span};
//!
//! let langs = [("Rust", 2015), ("OCaml", 1996)];
//!
//! let mut table = TableBuilder::new();
//! table
//!     .column("Language", |l: &(&'static str, u32)| Span::content(l.0))
//!     .column("Since", |l: &(&'static str, u32)| Span::content(l.1.to_string()));
//!
//! let layout = table.measure(&langs).unwrap();
//! let mut screen = BufferRenderer::new(20, 3);
//! layout.paint(&mut screen, 0).unwrap();
//!
//! assert_eq!(screen.lines(), vec!["Language  Since", "Rust      2015", "OCaml     1996"]);
//! ```
//!
//! Inside a [`View`](crate::View), use [`View::render_table`](crate::View::render_table),
//! which paints at the view's current line.

mod column;
mod config;
mod layout;

pub use column::{TableBuilder, TableColumn};
pub use config::{TableConfig, DEFAULT_GUTTER, DEFAULT_HEIGHT};
pub use layout::{MeasuredColumn, TableLayout};
