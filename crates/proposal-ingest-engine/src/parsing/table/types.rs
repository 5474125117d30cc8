use serde::Serialize;
use uuid::Uuid;

/// Header labels of a parsed table. `col3` is present only for 3-column tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableHeaders {
    pub col1: String,
    pub col2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col3: Option<String>,
}

/// One data row. Missing cells are padded with `""`, never left absent,
/// so `col3` is `Some` exactly when the table has three columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Opaque per-row key for editors; not derived from the row content.
    pub id: Uuid,
    pub col1: String,
    pub col2: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col3: Option<String>,
}

/// A table recovered from pasted delimiter-separated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSpec {
    pub title: String,
    /// Always 2 or 3.
    pub column_count: usize,
    pub headers: TableHeaders,
    pub rows: Vec<TableRow>,
}

impl TableSpec {
    /// Cell values of every row in column order, without ids.
    pub fn cells(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = vec![row.col1.as_str(), row.col2.as_str()];
                if let Some(col3) = &row.col3 {
                    cells.push(col3.as_str());
                }
                cells
            })
            .collect()
    }

    /// Header labels in column order.
    pub fn header_labels(&self) -> Vec<&str> {
        let mut labels = vec![self.headers.col1.as_str(), self.headers.col2.as_str()];
        if let Some(col3) = &self.headers.col3 {
            labels.push(col3.as_str());
        }
        labels
    }
}
