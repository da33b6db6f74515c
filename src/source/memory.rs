use std::cell::RefCell;

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};
use indexmap::IndexMap;

use crate::core::{
    BatchSummary, ColumnInfo, DataSourceRef, DbCellValue, ResultSetSummary, ResultSubset,
};
use crate::error::{ChartError, ChartResult};

use super::RowDataProvider;

#[derive(Debug, Clone)]
struct StoredResultSet {
    summary: ResultSetSummary,
    rows: Vec<Vec<DbCellValue>>,
}

/// Provider backed by result sets held in memory.
///
/// Every `get_rows` call is recorded so callers can assert what was fetched.
#[derive(Debug, Default)]
pub struct InMemoryRowProvider {
    result_sets: IndexMap<DataSourceRef, StoredResultSet>,
    failure: Option<String>,
    requests: RefCell<Vec<(DataSourceRef, usize, usize)>>,
}

impl InMemoryRowProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a result set with plain display values and returns its reference.
    pub fn add_result_set(
        &mut self,
        batch_id: usize,
        columns: &[&str],
        rows: Vec<Vec<&str>>,
    ) -> DataSourceRef {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(DbCellValue::new).collect())
            .collect();
        self.add_cells(batch_id, columns, rows)
    }

    pub fn add_cells(
        &mut self,
        batch_id: usize,
        columns: &[&str],
        rows: Vec<Vec<DbCellValue>>,
    ) -> DataSourceRef {
        let result_id = self
            .result_sets
            .keys()
            .filter(|reference| reference.batch_id == batch_id)
            .count();
        let reference = DataSourceRef::new(batch_id, result_id);
        let summary = ResultSetSummary {
            id: result_id,
            batch_id,
            row_count: rows.len(),
            column_info: columns.iter().map(|name| ColumnInfo::new(*name)).collect(),
        };
        self.result_sets
            .insert(reference, StoredResultSet { summary, rows });
        reference
    }

    /// Makes every subsequent fetch fail with `message`.
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    /// `(reference, row_offset, row_count)` of every fetch so far.
    #[must_use]
    pub fn requests(&self) -> Vec<(DataSourceRef, usize, usize)> {
        self.requests.borrow().clone()
    }
}

impl RowDataProvider for InMemoryRowProvider {
    fn batch_sets(&self) -> Vec<BatchSummary> {
        let mut batches: IndexMap<usize, BatchSummary> = IndexMap::new();
        for (reference, stored) in &self.result_sets {
            batches
                .entry(reference.batch_id)
                .or_insert_with(|| BatchSummary {
                    id: reference.batch_id,
                    result_set_summaries: Vec::new(),
                })
                .result_set_summaries
                .push(stored.summary.clone());
        }
        batches.into_values().collect()
    }

    fn get_rows(
        &self,
        reference: DataSourceRef,
        row_offset: usize,
        row_count: usize,
    ) -> LocalBoxFuture<'static, ChartResult<ResultSubset>> {
        self.requests
            .borrow_mut()
            .push((reference, row_offset, row_count));

        let result = match (&self.failure, self.result_sets.get(&reference)) {
            (Some(message), _) => Err(ChartError::Provider(message.clone())),
            (None, None) => Err(ChartError::Provider(format!(
                "result set {}/{} does not exist",
                reference.batch_id, reference.result_id
            ))),
            (None, Some(stored)) => Ok(ResultSubset::new(
                stored
                    .rows
                    .iter()
                    .skip(row_offset)
                    .take(row_count)
                    .cloned()
                    .collect(),
            )),
        };
        future::ready(result).boxed_local()
    }
}
