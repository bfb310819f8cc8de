//! Column defaults.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Gutter used when none is configured.
pub const DEFAULT_GUTTER: usize = 2;

/// Cell height used when none is configured.
pub const DEFAULT_HEIGHT: usize = 1;

/// Defaults applied to columns registered on a [`TableBuilder`](super::TableBuilder).
///
/// Missing keys fall back to the defaults, so an empty document is valid:
///
/// ```rust
/// use spanview::table::TableConfig;
///
/// let config = TableConfig::from_yaml("gutter: 4").unwrap();
/// assert_eq!(config.gutter, 4);
/// assert_eq!(config.height, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Blank columns added after the widest cell of each column.
    pub gutter: usize,
    /// Rows each cell may occupy.
    pub height: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            gutter: DEFAULT_GUTTER,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl TableConfig {
    /// Parse a config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn gutter(mut self, gutter: usize) -> Self {
        self.gutter = gutter;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
}
