//! In-memory screen grid.

use std::fmt;

use console::Style;

use super::{PlainFormatter, Renderer, SpanFormatter};
use crate::error::RenderError;
use crate::region::Region;
use crate::span::Span;
use crate::util::{char_width, fit_lines};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Cell {
    Char(char, Option<Style>),
    /// Right half of a double-width character.
    Continuation,
}

impl Cell {
    fn blank() -> Self {
        Cell::Char(' ', None)
    }
}

/// A renderer painting into a fixed-size grid of cells.
///
/// Painted lines are padded with blanks to the region width, so repainting a
/// region replaces what was there. Anything outside the grid is dropped.
///
/// # Example
///
/// ```rust
/// use spanview::{BufferRenderer, Region, Renderer, Span};
///
/// let mut screen = BufferRenderer::new(10, 2);
/// screen.render_to_region(&Span::content("hello"), Region::new(2, 1, 5, 1)).unwrap();
/// assert_eq!(screen.lines(), vec!["", "  hello"]);
/// ```
pub struct BufferRenderer {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
    formatter: Box<dyn SpanFormatter>,
}

impl BufferRenderer {
    /// Create a blank grid of `width` × `height` cells.
    pub fn new(width: usize, height: usize) -> Self {
        BufferRenderer {
            width,
            height,
            cells: vec![vec![Cell::blank(); width]; height],
            formatter: Box::new(PlainFormatter),
        }
    }

    /// Replace the formatter used for non-span values.
    pub fn with_formatter(mut self, formatter: impl SpanFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Grid rows with trailing blanks removed.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                let line: String = row
                    .iter()
                    .filter_map(|cell| match cell {
                        Cell::Char(c, _) => Some(*c),
                        Cell::Continuation => None,
                    })
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// The character painted at a cell, if the cell holds one.
    pub fn char_at(&self, left: usize, top: usize) -> Option<char> {
        match self.cells.get(top)?.get(left)? {
            Cell::Char(c, _) => Some(*c),
            Cell::Continuation => None,
        }
    }

    /// The style painted at a cell.
    pub fn style_at(&self, left: usize, top: usize) -> Option<&Style> {
        match self.cells.get(top)?.get(left)? {
            Cell::Char(_, style) => style.as_ref(),
            Cell::Continuation => None,
        }
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::blank());
        }
    }
}

impl fmt::Display for BufferRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.lines();
        let used = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |i| i + 1);
        for line in &lines[..used] {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BufferRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferRenderer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("lines", &self.lines())
            .finish()
    }
}

/// Blanks the other half of a wide character that `col` is part of.
fn clear_wide(row: &mut [Cell], col: usize) {
    match row[col] {
        Cell::Continuation if col > 0 => row[col - 1] = Cell::blank(),
        Cell::Char(..) if matches!(row.get(col + 1), Some(Cell::Continuation)) => {
            row[col + 1] = Cell::blank();
        }
        _ => {}
    }
}

impl Renderer for BufferRenderer {
    fn render_to_region(&mut self, span: &Span, region: Region) -> Result<(), RenderError> {
        let lines = fit_lines(span.runs(), region.width, region.height);
        let right = region.right().min(self.width);

        for (offset, line) in lines.iter().enumerate() {
            let top = region.top + offset;
            let Some(row) = self.cells.get_mut(top) else {
                break;
            };

            let mut col = region.left;
            for run in &line.runs {
                for c in run.text.chars() {
                    let w = char_width(c);
                    if col + w > right {
                        break;
                    }
                    for cell in col..col + w {
                        clear_wide(row, cell);
                    }
                    row[col] = Cell::Char(c, run.style.clone());
                    if w == 2 {
                        row[col + 1] = Cell::Continuation;
                    }
                    col += w;
                }
            }
            while col < right {
                clear_wide(row, col);
                row[col] = Cell::blank();
                col += 1;
            }
        }
        Ok(())
    }

    fn screen_region(&self) -> Region {
        Region::output(self.width, self.height)
    }

    fn formatter(&self) -> &dyn SpanFormatter {
        self.formatter.as_ref()
    }
}
