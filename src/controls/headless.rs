use std::collections::BTreeMap;

use crate::core::OptionKey;
use crate::error::ChartResult;

use super::{
    ControlHost, ControlId, ControlKind, ControlRegion, ControlSpec, PanelContainer, PanelLayout,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessControl {
    pub region: ControlRegion,
    pub spec: ControlSpec,
    pub visible: bool,
}

/// In-memory control host used by tests and headless embedding.
///
/// It keeps every live control so callers can inspect what a real toolkit
/// would display.
#[derive(Debug, Default)]
pub struct HeadlessControlHost {
    controls: BTreeMap<ControlId, HeadlessControl>,
    next_id: u64,
    pub created_count: usize,
    pub destroyed_count: usize,
}

impl HeadlessControlHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn control(&self, id: ControlId) -> Option<&HeadlessControl> {
        self.controls.get(&id)
    }

    /// Live control bound to `key`, if any.
    #[must_use]
    pub fn find(&self, key: OptionKey) -> Option<(ControlId, &HeadlessControl)> {
        self.controls
            .iter()
            .find(|(_, control)| control.spec.key == key)
            .map(|(id, control)| (*id, control))
    }

    #[must_use]
    pub fn id_of(&self, key: OptionKey) -> Option<ControlId> {
        self.find(key).map(|(id, _)| id)
    }

    #[must_use]
    pub fn is_visible(&self, key: OptionKey) -> Option<bool> {
        self.find(key).map(|(_, control)| control.visible)
    }

    /// Keys of live controls in `region`, in creation order.
    #[must_use]
    pub fn keys_in(&self, region: ControlRegion) -> Vec<OptionKey> {
        self.controls
            .values()
            .filter(|control| control.region == region)
            .map(|control| control.spec.key)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl ControlHost for HeadlessControlHost {
    fn create_control(
        &mut self,
        region: ControlRegion,
        spec: &ControlSpec,
    ) -> ChartResult<ControlId> {
        let id = ControlId(self.next_id);
        self.next_id += 1;
        self.created_count += 1;
        self.controls.insert(
            id,
            HeadlessControl {
                region,
                spec: spec.clone(),
                visible: true,
            },
        );
        Ok(id)
    }

    fn destroy_control(&mut self, id: ControlId) {
        if self.controls.remove(&id).is_some() {
            self.destroyed_count += 1;
        }
    }

    fn set_control_visible(&mut self, id: ControlId, visible: bool) {
        if let Some(control) = self.controls.get_mut(&id) {
            control.visible = visible;
        }
    }

    fn update_control(&mut self, id: ControlId, kind: &ControlKind) {
        if let Some(control) = self.controls.get_mut(&id) {
            control.spec.kind = kind.clone();
        }
    }
}

/// Container that only counts how often the panel attached itself.
#[derive(Debug, Default)]
pub struct HeadlessContainer {
    pub attach_count: usize,
    pub last_layout: Option<PanelLayout>,
}

impl PanelContainer for HeadlessContainer {
    fn attach(&mut self, layout: &PanelLayout) {
        self.attach_count += 1;
        self.last_layout = Some(layout.clone());
    }
}
