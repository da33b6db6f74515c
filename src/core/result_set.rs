use serde::{Deserialize, Serialize};

/// Identifies one result set within a query execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceRef {
    pub batch_id: usize,
    pub result_id: usize,
}

impl DataSourceRef {
    #[must_use]
    pub const fn new(batch_id: usize, result_id: usize) -> Self {
        Self {
            batch_id,
            result_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    pub column_name: String,
}

impl ColumnInfo {
    #[must_use]
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
        }
    }
}

/// Shape of one result set as reported by the row-data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSetSummary {
    pub id: usize,
    pub batch_id: usize,
    pub row_count: usize,
    pub column_info: Vec<ColumnInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub id: usize,
    pub result_set_summaries: Vec<ResultSetSummary>,
}

/// Decoded cell as delivered by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCellValue {
    pub display_value: String,
    pub is_null: bool,
}

impl DbCellValue {
    #[must_use]
    pub fn new(display_value: impl Into<String>) -> Self {
        Self {
            display_value: display_value.into(),
            is_null: false,
        }
    }

    #[must_use]
    pub fn null() -> Self {
        Self {
            display_value: "NULL".to_owned(),
            is_null: true,
        }
    }
}

/// Contiguous block of rows returned by a single provider fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSubset {
    pub row_count: usize,
    pub rows: Vec<Vec<DbCellValue>>,
}

impl ResultSubset {
    #[must_use]
    pub fn new(rows: Vec<Vec<DbCellValue>>) -> Self {
        Self {
            row_count: rows.len(),
            rows,
        }
    }
}

/// Column names plus display-string rows handed to the renderer.
///
/// Produced fresh by every successful fetch and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowDataMatrix {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RowDataMatrix {
    /// Builds the matrix from a result-set summary and the rows fetched for it.
    #[must_use]
    pub fn from_result(summary: &ResultSetSummary, subset: ResultSubset) -> Self {
        let columns = summary
            .column_info
            .iter()
            .map(|column| column.column_name.clone())
            .collect();
        Self {
            columns,
            rows: convert_rows(subset.rows),
        }
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.columns.len(), self.rows.len())
    }
}

fn convert_row(row: Vec<DbCellValue>) -> Vec<String> {
    row.into_iter().map(|cell| cell.display_value).collect()
}

#[cfg(feature = "parallel-conversion")]
fn convert_rows(rows: Vec<Vec<DbCellValue>>) -> Vec<Vec<String>> {
    use rayon::prelude::*;

    rows.into_par_iter().map(convert_row).collect()
}

#[cfg(not(feature = "parallel-conversion"))]
fn convert_rows(rows: Vec<Vec<DbCellValue>>) -> Vec<Vec<String>> {
    rows.into_iter().map(convert_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_keeps_column_order_and_display_values() {
        let summary = ResultSetSummary {
            id: 0,
            batch_id: 0,
            row_count: 2,
            column_info: vec![ColumnInfo::new("name"), ColumnInfo::new("total")],
        };
        let subset = ResultSubset::new(vec![
            vec![DbCellValue::new("north"), DbCellValue::new("12")],
            vec![DbCellValue::new("south"), DbCellValue::null()],
        ]);

        let matrix = RowDataMatrix::from_result(&summary, subset);

        assert_eq!(matrix.columns, vec!["name", "total"]);
        assert_eq!(matrix.rows[1], vec!["south", "NULL"]);
        assert_eq!(matrix.shape(), (2, 2));
    }
}
