//! Measurement and painting of a table.
//!
//! Column widths depend on every cell, and painted output cannot be widened
//! afterwards, so a table goes through two separate stages:
//!
//! 1. [`TableBuilder::measure`] renders every cell, computes widths and left
//!    offsets, and returns a finished [`TableLayout`].
//! 2. [`TableLayout::paint`] hands each cell to a renderer, row by row.
//!
//! A failing cell renderer stops stage 1, so nothing is painted.

use tracing::debug;

use super::column::TableBuilder;
use crate::error::RenderError;
use crate::region::Region;
use crate::renderer::Renderer;
use crate::span::Span;

/// A column with its geometry fixed and its cells rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasuredColumn {
    left: usize,
    width: usize,
    gutter: usize,
    height: usize,
    cells: Vec<Span>,
}

impl MeasuredColumn {
    /// Horizontal offset of the column.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Column width, gutter included.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn gutter(&self) -> usize {
        self.gutter
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cells in row order; index 0 is the header.
    pub fn cells(&self) -> &[Span] {
        &self.cells
    }

    /// The region the cell of `row` is painted into.
    pub fn cell_region(&self, top: usize, row: usize) -> Region {
        Region::new(self.left, top + row, self.width, self.height)
    }
}

/// The finished geometry of a table, ready to paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLayout {
    columns: Vec<MeasuredColumn>,
    rows: usize,
}

impl TableLayout {
    pub fn columns(&self) -> &[MeasuredColumn] {
        &self.columns
    }

    /// Number of rows painted, header included.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Sum of all column widths.
    pub fn total_width(&self) -> usize {
        self.columns.iter().map(MeasuredColumn::width).sum()
    }

    /// Paints every row, header first, starting at line `top`.
    ///
    /// The last cell of each row is followed by a line terminator.
    pub fn paint<R: Renderer + ?Sized>(
        &self,
        renderer: &mut R,
        top: usize,
    ) -> Result<(), RenderError> {
        let last = self.columns.len().saturating_sub(1);

        for row in 0..self.rows {
            for (index, column) in self.columns.iter().enumerate() {
                let region = column.cell_region(top, row);
                let cell = &column.cells[row];
                if index == last {
                    let cell = cell.clone().then(Span::line_terminator());
                    renderer.render_to_region(&cell, region)?;
                } else {
                    renderer.render_to_region(cell, region)?;
                }
            }
        }
        Ok(())
    }
}

impl<T> TableBuilder<'_, T> {
    /// Renders every cell for `items` and fixes the column geometry.
    ///
    /// Each column is as wide as its widest cell (header included) plus its
    /// gutter. Columns are placed left to right without gaps.
    pub fn measure(&self, items: &[T]) -> Result<TableLayout, RenderError> {
        if let Some((index, column)) = self
            .columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.height == 0)
        {
            return Err(RenderError::invalid_argument(format!(
                "column {} ('{}') has height 0",
                index,
                column.header.plain_text()
            )));
        }

        let mut columns = Vec::with_capacity(self.columns.len());
        let mut left = 0;

        for column in &self.columns {
            let cells = column.build_cells(items)?;
            let content = cells.iter().map(Span::content_length).max().unwrap_or(0);
            let width = column.gutter + content;

            columns.push(MeasuredColumn {
                left,
                width,
                gutter: column.gutter,
                height: column.height,
                cells,
            });
            left += width;
        }

        debug!(
            columns = columns.len(),
            rows = items.len() + 1,
            total_width = left,
            "measured table"
        );

        Ok(TableLayout {
            columns,
            rows: items.len() + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::renderer::BufferRenderer;
    use crate::table::TableColumn;

    struct Person {
        name: &'static str,
        age: &'static str,
    }

    fn people() -> Vec<Person> {
        vec![
            Person { name: "Alice", age: "30" },
            Person { name: "Bob", age: "41" },
            Person { name: "Charlie", age: "27" },
        ]
    }

    fn people_table<'a>() -> TableBuilder<'a, Person> {
        let mut table = TableBuilder::new();
        table
            .column("Name", |p: &Person| p.name.into())
            .column("Age", |p: &Person| p.age.into());
        table
    }

    #[test]
    fn test_measure_widths_and_offsets() {
        let layout = people_table().measure(&people()).unwrap();
        let columns = layout.columns();
        assert_eq!((columns[0].left(), columns[0].width()), (0, 9));
        assert_eq!((columns[1].left(), columns[1].width()), (9, 5));
        assert_eq!(layout.row_count(), 4);
        assert_eq!(layout.total_width(), 14);
    }

    #[test]
    fn test_measure_header_wider_than_cells() {
        let mut table = TableBuilder::new();
        table.column("Identifier", |n: &u8| n.to_string().into());
        let layout = table.measure(&[1, 2]).unwrap();
        assert_eq!(layout.columns()[0].width(), 12);
    }

    #[test]
    fn test_measure_empty_items_keeps_header_row() {
        let layout = people_table().measure(&[]).unwrap();
        assert_eq!(layout.row_count(), 1);
        assert_eq!(layout.columns()[0].cells().len(), 1);
        assert_eq!(layout.columns()[0].width(), 6);
    }

    #[test]
    fn test_measure_empty_cells_still_get_gutter() {
        let mut table = TableBuilder::new();
        table
            .column(Span::empty(), |_: &u8| Span::empty())
            .add(TableColumn::new(Span::empty(), |_: &u8| Span::empty()).gutter(3));
        let layout = table.measure(&[1, 2]).unwrap();
        assert_eq!(layout.columns()[0].width(), 2);
        assert_eq!(layout.columns()[1].left(), 2);
        assert_eq!(layout.columns()[1].width(), 3);
    }

    #[test]
    fn test_measure_rejects_zero_height_before_rendering() {
        let calls = Cell::new(0);
        let mut table = TableBuilder::new();
        table
            .column("a", |n: &u8| {
                calls.set(calls.get() + 1);
                n.to_string().into()
            })
            .add(TableColumn::new("b", |_: &u8| Span::empty()).height(0));
        let err = table.measure(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, RenderError::InvalidArgument(_)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_paint_lays_out_rows() {
        let layout = people_table().measure(&people()).unwrap();
        let mut screen = BufferRenderer::new(20, 5);
        layout.paint(&mut screen, 0).unwrap();
        assert_eq!(
            screen.lines(),
            vec!["Name     Age", "Alice    30", "Bob      41", "Charlie  27", ""]
        );
    }

    #[test]
    fn test_paint_starts_at_top() {
        let layout = people_table().measure(&[]).unwrap();
        let mut screen = BufferRenderer::new(20, 3);
        layout.paint(&mut screen, 2).unwrap();
        assert_eq!(screen.lines(), vec!["", "", "Name  Age"]);
    }

    #[test]
    fn test_paint_no_columns_paints_nothing() {
        let table: TableBuilder<'_, u8> = TableBuilder::new();
        let layout = table.measure(&[1, 2]).unwrap();
        let mut screen = BufferRenderer::new(5, 3);
        layout.paint(&mut screen, 0).unwrap();
        assert_eq!(screen.to_string(), "");
    }
}
