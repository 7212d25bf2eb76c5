//! Raw tabular payload returned by the Sheets values endpoint

use serde::{Deserialize, Serialize};

/// One spreadsheet row; cells are positionally meaningful
pub type RawRow = Vec<String>;

/// `values.get` response body. Only `values` is consumed; a tab with no
/// populated cells omits the field entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SheetValues {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default, rename = "majorDimension")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<RawRow>,
}

impl SheetValues {
    pub fn from_rows(values: Vec<RawRow>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Header row, if any
    pub fn header(&self) -> Option<&RawRow> {
        self.values.first()
    }

    /// Rows after the header
    pub fn data_rows(&self) -> &[RawRow] {
        self.values.get(1..).unwrap_or(&[])
    }
}
