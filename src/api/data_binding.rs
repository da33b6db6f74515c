//! Lazy fetch/bind pipeline coupling a row-data provider and a result-set
//! reference to the matrix handed to the renderer.
//!
//! Every change of source or selection, and every issued fetch, advances a
//! generation counter. A completed fetch is only published when it carries
//! the latest generation, so a late response for an old selection can never
//! overwrite data for a newer one.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::{DataSourceRef, ResultSetSummary, RowDataMatrix};
use crate::error::ChartResult;
use crate::source::RowDataProvider;

/// In-flight fetch of one result set.
#[must_use = "a fetch request does nothing until executed"]
pub struct FetchRequest {
    generation: u64,
    reference: DataSourceRef,
    summary: ResultSetSummary,
    row_count: usize,
    provider: Rc<dyn RowDataProvider>,
}

impl FetchRequest {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn reference(&self) -> DataSourceRef {
        self.reference
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Fetches the rows and converts them into a matrix.
    pub async fn execute(self) -> FetchOutcome {
        let rows = self
            .provider
            .get_rows(self.reference, 0, self.row_count)
            .await;
        FetchOutcome {
            generation: self.generation,
            reference: self.reference,
            result: rows.map(|subset| RowDataMatrix::from_result(&self.summary, subset)),
        }
    }
}

impl fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchRequest")
            .field("generation", &self.generation)
            .field("reference", &self.reference)
            .field("row_count", &self.row_count)
            .finish_non_exhaustive()
    }
}

/// Result of an executed [`FetchRequest`], to be handed back to the pipeline.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub reference: DataSourceRef,
    pub result: ChartResult<RowDataMatrix>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchApplied {
    Published(Rc<RowDataMatrix>),
    Stale { generation: u64, latest: u64 },
}

#[derive(Default)]
pub struct DataBinding {
    source: Option<Rc<dyn RowDataProvider>>,
    selection: Option<DataSourceRef>,
    generation: u64,
    /// Generation of the fetch issued for the current source and selection
    /// that has not been completed yet.
    outstanding: Option<u64>,
    matrix: Option<Rc<RowDataMatrix>>,
    row_fetch_limit: Option<usize>,
}

impl DataBinding {
    #[must_use]
    pub fn new(row_fetch_limit: Option<usize>) -> Self {
        Self {
            row_fetch_limit,
            ..Self::default()
        }
    }

    /// Binds the active row-data provider, replacing any previous one.
    pub fn attach_source(&mut self, source: Rc<dyn RowDataProvider>) -> Option<FetchRequest> {
        self.source = Some(source);
        self.generation += 1;
        self.try_fetch()
    }

    /// Selects the result set to chart, superseding any previous selection.
    pub fn select_result(&mut self, reference: DataSourceRef) -> Option<FetchRequest> {
        self.selection = Some(reference);
        self.generation += 1;
        self.try_fetch()
    }

    /// Issues a fetch when both a source and a resolvable selection exist.
    ///
    /// Returns `None` while a fetch for the unchanged source and selection
    /// is still outstanding, so that fetch stays current.
    pub fn try_fetch(&mut self) -> Option<FetchRequest> {
        let (Some(source), Some(reference)) = (self.source.as_ref(), self.selection) else {
            return None;
        };
        if self.outstanding == Some(self.generation) {
            trace!(
                generation = self.generation,
                batch_id = reference.batch_id,
                result_id = reference.result_id,
                "fetch already outstanding"
            );
            return None;
        }
        let Some(summary) = source.result_set_summary(reference) else {
            debug!(
                batch_id = reference.batch_id,
                result_id = reference.result_id,
                "result set not available yet; fetch skipped"
            );
            return None;
        };

        self.generation += 1;
        self.outstanding = Some(self.generation);
        let row_count = self
            .row_fetch_limit
            .map_or(summary.row_count, |limit| summary.row_count.min(limit));
        debug!(
            generation = self.generation,
            batch_id = reference.batch_id,
            result_id = reference.result_id,
            row_count,
            "fetch issued"
        );
        Some(FetchRequest {
            generation: self.generation,
            reference,
            summary,
            row_count,
            provider: Rc::clone(source),
        })
    }

    /// Publishes a completed fetch if it is still the latest one.
    ///
    /// Provider failures of the latest fetch are returned as errors and keep
    /// the previously published matrix.
    pub fn complete(&mut self, outcome: FetchOutcome) -> ChartResult<FetchApplied> {
        if outcome.generation != self.generation {
            debug!(
                generation = outcome.generation,
                latest = self.generation,
                "stale fetch discarded"
            );
            return Ok(FetchApplied::Stale {
                generation: outcome.generation,
                latest: self.generation,
            });
        }
        self.outstanding = None;

        let matrix = outcome.result.inspect_err(|err| {
            warn!(
                error = %err,
                batch_id = outcome.reference.batch_id,
                result_id = outcome.reference.result_id,
                "fetch failed; keeping previous data"
            );
        })?;
        let (columns, rows) = matrix.shape();
        debug!(generation = outcome.generation, columns, rows, "row data published");
        let matrix = Rc::new(matrix);
        self.matrix = Some(Rc::clone(&matrix));
        Ok(FetchApplied::Published(matrix))
    }

    #[must_use]
    pub fn matrix(&self) -> Option<&Rc<RowDataMatrix>> {
        self.matrix.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> Option<DataSourceRef> {
        self.selection
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Whether the latest issued fetch has not been completed yet.
    #[must_use]
    pub fn has_outstanding_fetch(&self) -> bool {
        self.outstanding == Some(self.generation)
    }

    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.generation
    }
}
