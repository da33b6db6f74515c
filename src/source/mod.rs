//! Row-data provider seam.

mod memory;

pub use memory::InMemoryRowProvider;

use futures::future::LocalBoxFuture;

use crate::core::{BatchSummary, DataSourceRef, ResultSetSummary, ResultSubset};
use crate::error::ChartResult;

/// Source of decoded result-set rows, typically a query runner.
pub trait RowDataProvider {
    /// Batches and result sets that are currently available.
    fn batch_sets(&self) -> Vec<BatchSummary>;

    /// Fetches `row_count` rows starting at `row_offset` from one result set.
    fn get_rows(
        &self,
        reference: DataSourceRef,
        row_offset: usize,
        row_count: usize,
    ) -> LocalBoxFuture<'static, ChartResult<ResultSubset>>;

    /// Summary of the referenced result set, or `None` while it is not
    /// available yet.
    fn result_set_summary(&self, reference: DataSourceRef) -> Option<ResultSetSummary> {
        self.batch_sets()
            .into_iter()
            .find(|batch| batch.id == reference.batch_id)?
            .result_set_summaries
            .into_iter()
            .find(|summary| summary.id == reference.result_id)
    }
}
