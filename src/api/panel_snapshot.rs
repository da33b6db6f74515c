use serde::{Deserialize, Serialize};

use crate::controls::{ControlHost, ControlRegion};
use crate::core::{ChartType, DataSourceRef, OptionKey};
use crate::render::Renderer;

use super::{ChartPanel, OptionsState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSnapshot {
    pub key: OptionKey,
    pub region: ControlRegion,
    pub visible: bool,
}

/// Serializable panel state used by regression tests and debugging tooling.
///
/// Nothing rebuilds a panel from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub chart_type: ChartType,
    pub options: OptionsState,
    pub controls: Vec<ControlSnapshot>,
    pub selection: Option<DataSourceRef>,
    pub data_shape: Option<(usize, usize)>,
    pub fetch_generation: u64,
    pub mounted: bool,
}

impl<R: Renderer, H: ControlHost> ChartPanel<R, H> {
    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        let controls = self
            .synthesizer
            .control_states(self.model.state())
            .into_iter()
            .map(|(key, region, visible)| ControlSnapshot {
                key,
                region,
                visible,
            })
            .collect();
        PanelSnapshot {
            chart_type: self.model.chart_type(),
            options: self.model.state().clone(),
            controls,
            selection: self.binding.selection(),
            data_shape: self.binding.matrix().map(|matrix| matrix.shape()),
            fetch_generation: self.binding.latest_generation(),
            mounted: self.is_mounted(),
        }
    }
}
