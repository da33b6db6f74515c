use tracing::trace;

use crate::controls::{ControlHost, ControlId, ControlInput, ControlRegion};
use crate::core::{ChartType, OptionKey, OptionValue};
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::{ChartPanel, OptionsChange};

impl<R: Renderer, H: ControlHost> ChartPanel<R, H> {
    /// Programmatic option write.
    ///
    /// The bound control is refreshed to show the new value, then the change
    /// is dispatched exactly like a user edit.
    pub fn set_option(&mut self, key: OptionKey, value: OptionValue) -> ChartResult<OptionsChange> {
        let change = self.model.set(key, value)?;
        if change.is_changed() {
            self.synthesizer
                .refresh_value(&mut self.controls, key, self.model.state());
        }
        self.dispatch_options_change(&change)?;
        Ok(change)
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) -> ChartResult<OptionsChange> {
        self.set_option(OptionKey::Type, OptionValue::text(chart_type.id()))
    }

    /// Entry point for user edits reported by the control host.
    ///
    /// Input for controls released by an earlier rebuild is ignored, and a
    /// value equal to the stored one is never written.
    pub fn on_control_input(
        &mut self,
        id: ControlId,
        input: ControlInput,
    ) -> ChartResult<OptionsChange> {
        let Some((key, value)) = self.synthesizer.resolve_input(id, input)? else {
            return Ok(OptionsChange::Unchanged);
        };
        if self.model.get(key) == Some(&value) {
            trace!(key = %key, "control input matches stored value");
            return Ok(OptionsChange::Unchanged);
        }
        let change = self.model.set(key, value)?;
        self.dispatch_options_change(&change)?;
        Ok(change)
    }

    /// Structural changes rebuild the type-specific controls; cosmetic ones
    /// only re-evaluate visibility. Both end with a renderer push.
    fn dispatch_options_change(&mut self, change: &OptionsChange) -> ChartResult<()> {
        match change {
            OptionsChange::Unchanged => return Ok(()),
            OptionsChange::Structural { from, to } => {
                self.emit_event(ChartEvent::ChartTypeChanged {
                    from: *from,
                    to: *to,
                });
                let report = self.synthesizer.rebuild_type_specific(
                    &mut self.controls,
                    self.model.schema().type_specific(),
                    self.model.state(),
                )?;
                self.emit_event(ChartEvent::ControlsRebuilt {
                    destroyed: report.destroyed,
                    built: report.built,
                });
                self.emit_event(ChartEvent::VisibilityUpdated {
                    hidden: report.hidden,
                });
            }
            OptionsChange::Cosmetic { key, value } => {
                self.emit_event(ChartEvent::OptionChanged {
                    key: *key,
                    value: value.clone(),
                });
                let hidden = self
                    .synthesizer
                    .apply_visibility(&mut self.controls, self.model.state());
                self.emit_event(ChartEvent::VisibilityUpdated { hidden });
            }
        }
        self.push_options()
    }

    pub(super) fn push_options(&mut self) -> ChartResult<()> {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.set_options(self.model.state())?;
        }
        Ok(())
    }

    /// Keys of the controls currently synthesized in `region`.
    #[must_use]
    pub fn control_keys(&self, region: ControlRegion) -> Vec<OptionKey> {
        self.synthesizer
            .control_states(self.model.state())
            .into_iter()
            .filter(|(_, candidate, _)| *candidate == region)
            .map(|(key, _, _)| key)
            .collect()
    }

    #[must_use]
    pub fn control_id(&self, key: OptionKey) -> Option<ControlId> {
        self.synthesizer.control_id(key)
    }
}
