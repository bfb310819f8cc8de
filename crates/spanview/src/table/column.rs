//! Column definitions and the builder columns are registered on.

use super::config::TableConfig;
use crate::error::RenderError;
use crate::span::Span;

type CellRenderer<'a, T> = Box<dyn Fn(&T) -> Result<Span, RenderError> + 'a>;

/// One table column: a header and a function rendering an item into a cell.
pub struct TableColumn<'a, T> {
    pub(super) header: Span,
    pub(super) render_cell: CellRenderer<'a, T>,
    pub(super) gutter: usize,
    pub(super) height: usize,
}

impl<'a, T> TableColumn<'a, T> {
    /// Create a column with the default gutter and height.
    pub fn new(header: impl Into<Span>, render_cell: impl Fn(&T) -> Span + 'a) -> Self {
        Self::try_new(header, move |item| Ok(render_cell(item)))
    }

    /// Create a column whose cell renderer can fail.
    ///
    /// The first failure aborts the table before any cell is painted.
    pub fn try_new(
        header: impl Into<Span>,
        render_cell: impl Fn(&T) -> Result<Span, RenderError> + 'a,
    ) -> Self {
        let defaults = TableConfig::default();
        TableColumn {
            header: header.into(),
            render_cell: Box::new(render_cell),
            gutter: defaults.gutter,
            height: defaults.height,
        }
    }

    /// Set the blank space added after the widest cell.
    pub fn gutter(mut self, gutter: usize) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set how many rows each cell may occupy.
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn header(&self) -> &Span {
        &self.header
    }

    /// Build the header cell followed by one cell per item.
    pub(super) fn build_cells(&self, items: &[T]) -> Result<Vec<Span>, RenderError> {
        let mut cells = Vec::with_capacity(items.len() + 1);
        cells.push(self.header.clone());
        for item in items {
            cells.push((self.render_cell)(item)?);
        }
        Ok(cells)
    }
}

impl<T> std::fmt::Debug for TableColumn<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableColumn")
            .field("header", &self.header)
            .field("gutter", &self.gutter)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Collects the columns of one table, in left-to-right order.
///
/// ```rust
/// use spanview::table::TableBuilder;
///
/// struct Pet { name: &'static str, age: u8 }
///
/// let pets = [Pet { name: "Rex", age: 3 }, Pet { name: "Tom", age: 11 }];
///
/// let mut table = TableBuilder::new();
/// table
///     .column("Name", |p: &Pet| p.name.into())
///     .column("Age", |p: &Pet| p.age.to_string().into());
///
/// let layout = table.measure(&pets).unwrap();
/// assert_eq!(layout.columns()[0].width(), 6);
/// assert_eq!(layout.columns()[1].left(), 6);
/// ```
pub struct TableBuilder<'a, T> {
    pub(super) columns: Vec<TableColumn<'a, T>>,
    config: TableConfig,
}

impl<'a, T> TableBuilder<'a, T> {
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create a builder whose new columns start from `config`.
    pub fn with_config(config: TableConfig) -> Self {
        TableBuilder {
            columns: Vec::new(),
            config,
        }
    }

    /// Change the defaults for columns registered after this call.
    pub fn config(&mut self, config: TableConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Register a column using the builder's defaults.
    pub fn column(
        &mut self,
        header: impl Into<Span>,
        render_cell: impl Fn(&T) -> Span + 'a,
    ) -> &mut Self {
        let column = TableColumn::new(header, render_cell);
        self.push_with_defaults(column)
    }

    /// Register a fallible column using the builder's defaults.
    pub fn try_column(
        &mut self,
        header: impl Into<Span>,
        render_cell: impl Fn(&T) -> Result<Span, RenderError> + 'a,
    ) -> &mut Self {
        let column = TableColumn::try_new(header, render_cell);
        self.push_with_defaults(column)
    }

    /// Register a fully configured column as is.
    pub fn add(&mut self, column: TableColumn<'a, T>) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Registered columns in order.
    pub fn columns(&self) -> &[TableColumn<'a, T>] {
        &self.columns
    }

    fn push_with_defaults(&mut self, column: TableColumn<'a, T>) -> &mut Self {
        let column = column.gutter(self.config.gutter).height(self.config.height);
        self.add(column)
    }
}

impl<T> Default for TableBuilder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_defaults() {
        let column: TableColumn<'_, u32> = TableColumn::new("n", |n: &u32| n.to_string().into());
        assert_eq!(column.gutter, 2);
        assert_eq!(column.height, 1);
    }

    #[test]
    fn test_build_cells_prepends_header() {
        let column = TableColumn::new("n", |n: &u32| n.to_string().into());
        let cells = column.build_cells(&[7, 42]).unwrap();
        assert_eq!(cells, vec![Span::content("n"), "7".into(), "42".into()]);
    }

    #[test]
    fn test_build_cells_propagates_failure() {
        let column = TableColumn::try_new("n", |n: &u32| {
            if *n == 0 {
                Err(RenderError::format("zero"))
            } else {
                Ok(n.to_string().into())
            }
        });
        let err = column.build_cells(&[1, 0, 2]).unwrap_err();
        assert!(matches!(err, RenderError::Format(_)));
    }

    #[test]
    fn test_builder_keeps_registration_order() {
        let mut table = TableBuilder::new();
        table
            .column("a", |_: &u8| Span::empty())
            .column("b", |_: &u8| Span::empty())
            .column("c", |_: &u8| Span::empty());
        let headers: Vec<String> = table
            .columns()
            .iter()
            .map(|c| c.header().plain_text())
            .collect();
        assert_eq!(headers, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_builder_config_applies_to_later_columns() {
        let mut table = TableBuilder::new();
        table
            .column("a", |_: &u8| Span::empty())
            .config(TableConfig::default().gutter(5))
            .column("b", |_: &u8| Span::empty())
            .add(TableColumn::new("c", |_: &u8| Span::empty()).gutter(0));
        let gutters: Vec<usize> = table.columns().iter().map(|c| c.gutter).collect();
        assert_eq!(gutters, vec![2, 5, 0]);
    }
}
