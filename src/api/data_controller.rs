use std::rc::Rc;

use tracing::debug;

use crate::controls::ControlHost;
use crate::core::{DataSourceRef, RowDataMatrix};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::Renderer;
use crate::source::RowDataProvider;

use super::{ChartPanel, FetchApplied, FetchOutcome, FetchRequest};

impl<R: Renderer, H: ControlHost> ChartPanel<R, H> {
    /// Binds the active row-data provider.
    ///
    /// Returns the fetch to run when a result set is already selected and
    /// available in the new provider.
    pub fn attach_source(&mut self, source: Rc<dyn RowDataProvider>) -> Option<FetchRequest> {
        let request = self.binding.attach_source(source);
        self.emit_event(ChartEvent::SourceAttached);
        request
    }

    /// Selects the result set to chart, superseding any earlier selection.
    pub fn select_result(&mut self, reference: DataSourceRef) -> Option<FetchRequest> {
        let request = self.binding.select_result(reference);
        self.emit_event(ChartEvent::ResultSelected { reference });
        request
    }

    /// Entry point for "chart this result" host commands.
    pub fn chart(&mut self, reference: DataSourceRef) -> Option<FetchRequest> {
        debug!(
            batch_id = reference.batch_id,
            result_id = reference.result_id,
            "chart requested"
        );
        self.select_result(reference)
    }

    /// Hands a finished fetch back to the panel.
    ///
    /// Returns `true` when the matrix was published (and pushed to a mounted
    /// renderer), `false` when the outcome was stale and discarded.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) -> ChartResult<bool> {
        match self.binding.complete(outcome)? {
            FetchApplied::Published(matrix) => {
                let (columns, rows) = matrix.shape();
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.set_data(matrix)?;
                }
                self.emit_event(ChartEvent::DataBound { columns, rows });
                Ok(true)
            }
            FetchApplied::Stale { generation, latest } => {
                self.emit_event(ChartEvent::FetchDiscarded { generation, latest });
                Ok(false)
            }
        }
    }

    /// Selects `reference` and drives the resulting fetch to completion.
    ///
    /// Returns `false` when nothing could be fetched yet.
    pub async fn chart_and_wait(&mut self, reference: DataSourceRef) -> ChartResult<bool> {
        let Some(request) = self.chart(reference) else {
            return Ok(false);
        };
        let outcome = request.execute().await;
        self.complete_fetch(outcome)
    }

    /// Most recently published matrix.
    #[must_use]
    pub fn data(&self) -> Option<&Rc<RowDataMatrix>> {
        self.binding.matrix()
    }

    #[must_use]
    pub fn selection(&self) -> Option<DataSourceRef> {
        self.binding.selection()
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        self.binding.has_source()
    }
}
