use serde::{Deserialize, Serialize};

use crate::core::{ChartType, DataSourceRef, OptionKey, OptionValue, Viewport};

/// Read-only panel summary passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub chart_type: ChartType,
    pub option_count: usize,
    pub control_count: usize,
    pub selection: Option<DataSourceRef>,
    /// `(columns, rows)` of the published matrix.
    pub data_shape: Option<(usize, usize)>,
    pub mounted: bool,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    ChartTypeChanged { from: ChartType, to: ChartType },
    OptionChanged { key: OptionKey, value: OptionValue },
    ControlsRebuilt { destroyed: usize, built: usize },
    VisibilityUpdated { hidden: Vec<OptionKey> },
    Mounted,
    LayoutChanged { viewport: Viewport },
    SourceAttached,
    ResultSelected { reference: DataSourceRef },
    DataBound { columns: usize, rows: usize },
    FetchDiscarded { generation: u64, latest: u64 },
}

/// Hook interface for code that wants to follow panel activity without
/// owning any of its state.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: &ObserverContext);
}
