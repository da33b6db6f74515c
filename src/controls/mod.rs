//! Host UI seam.
//!
//! The chart panel never touches a widget toolkit directly. It asks a
//! [`ControlHost`] to create, destroy and show/hide controls, and the host
//! reports user edits back through `ChartPanel::on_control_input`.

mod headless;

pub use headless::{HeadlessContainer, HeadlessControl, HeadlessControlHost};

use serde::{Deserialize, Serialize};

use crate::core::OptionKey;
use crate::error::ChartResult;

/// Host-assigned handle of one synthesized control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlId(pub u64);

/// Area of the options pane a control lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlRegion {
    /// Controls shared by every chart type; built once.
    General,
    /// Controls for the active chart type; rebuilt on every type switch.
    TypeSpecific,
}

/// Initial state of a control to construct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlKind {
    Checkbox { checked: bool },
    Combo { choices: Vec<String>, selected: usize },
    TextInput { value: String },
    NumberInput { value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSpec {
    pub key: OptionKey,
    pub label: String,
    pub kind: ControlKind,
}

/// Raw user edit reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlInput {
    Toggled(bool),
    Selected(usize),
    Text(String),
}

pub trait ControlHost {
    fn create_control(
        &mut self,
        region: ControlRegion,
        spec: &ControlSpec,
    ) -> ChartResult<ControlId>;

    /// Destroys a control and drops every event subscription attached to it.
    fn destroy_control(&mut self, id: ControlId);

    fn set_control_visible(&mut self, id: ControlId, visible: bool);

    /// Refreshes a control's displayed value after a programmatic write.
    fn update_control(&mut self, id: ControlId, kind: &ControlKind);
}

/// Areas the panel contributes to its host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelArea {
    Graph,
    Options,
}

/// Structure created once on first mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelLayout {
    pub container_class: &'static str,
    pub areas: [PanelArea; 2],
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            container_class: "chart-view-container",
            areas: [PanelArea::Graph, PanelArea::Options],
        }
    }
}

/// Region supplied by the host to mount the panel into.
pub trait PanelContainer {
    fn attach(&mut self, layout: &PanelLayout);
}
