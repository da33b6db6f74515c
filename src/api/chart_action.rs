//! "Chart" command offered on result grids.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::controls::ControlHost;
use crate::core::DataSourceRef;
use crate::render::Renderer;

use super::{ChartPanel, FetchRequest};

/// Grid state the command is invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridActionContext {
    pub batch_id: usize,
    pub result_id: usize,
}

/// Anything that can chart a result set, normally the active query editor's
/// chart panel.
pub trait ChartTarget {
    fn chart(&mut self, reference: DataSourceRef) -> Option<FetchRequest>;
}

impl<R: Renderer, H: ControlHost> ChartTarget for ChartPanel<R, H> {
    fn chart(&mut self, reference: DataSourceRef) -> Option<FetchRequest> {
        ChartPanel::chart(self, reference)
    }
}

#[derive(Debug)]
pub enum ActionOutcome {
    /// No chart target was active.
    NotHandled,
    /// Forwarded to the target, possibly with a fetch to drive.
    Charted(Option<FetchRequest>),
}

impl ActionOutcome {
    #[must_use]
    pub fn handled(&self) -> bool {
        matches!(self, Self::Charted(_))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChartDataAction;

impl ChartDataAction {
    pub const ID: &'static str = "grid.chart";
    pub const LABEL: &'static str = "Chart";
    pub const ICON: &'static str = "viewChart";

    pub fn run(
        &self,
        context: &GridActionContext,
        target: Option<&mut dyn ChartTarget>,
    ) -> ActionOutcome {
        let Some(target) = target else {
            debug!(action = Self::ID, "no active chart target");
            return ActionOutcome::NotHandled;
        };
        let reference = DataSourceRef::new(context.batch_id, context.result_id);
        ActionOutcome::Charted(target.chart(reference))
    }
}
