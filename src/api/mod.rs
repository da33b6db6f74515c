//! Chart configuration and data-binding engine.

mod chart_action;
mod chart_panel;
mod control_synthesizer;
mod data_binding;
mod data_controller;
mod json_contract;
mod observer_registry;
mod option_schema;
mod options_controller;
mod options_model;
mod options_state;
mod panel_config;
mod panel_lifecycle;
mod panel_snapshot;
mod validation;

pub use chart_action::{ActionOutcome, ChartDataAction, ChartTarget, GridActionContext};
pub use chart_panel::ChartPanel;
pub use control_synthesizer::{ControlSynthesizer, RebuildReport};
pub use data_binding::{DataBinding, FetchApplied, FetchOutcome, FetchRequest};
pub use json_contract::{PANEL_SNAPSHOT_JSON_SCHEMA_V1, PanelSnapshotJsonContractV1};
pub use option_schema::{
    ComboChoices, DIRECTION_HORIZONTAL, DIRECTION_VERTICAL, OptionDescriptor, OptionKind,
    OptionSchema, VisibilityRule, general_options, schema_for, type_options,
};
pub use options_model::{OptionsChange, OptionsModel, SubscriptionId};
pub use options_state::{OptionsMap, OptionsState};
pub use panel_config::ChartPanelConfig;
pub use panel_snapshot::{ControlSnapshot, PanelSnapshot};
pub use validation::parse_number_input;
