use tracing::{debug, trace};

use crate::controls::{
    ControlHost, ControlId, ControlInput, ControlKind, ControlRegion, ControlSpec,
};
use crate::core::{OptionKey, OptionValue};
use crate::error::ChartResult;

use super::validation::{invalid_value, parse_number_input};
use super::{OptionDescriptor, OptionKind, OptionsState};

/// Counts and visibility outcome of one type-specific rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildReport {
    pub destroyed: usize,
    pub built: usize,
    pub hidden: Vec<OptionKey>,
}

#[derive(Debug, Clone)]
struct ControlBinding {
    id: ControlId,
    region: ControlRegion,
    descriptor: OptionDescriptor,
}

/// Creates one host control per option descriptor and translates control
/// input back into option writes.
///
/// Input for a control id that is no longer bound (destroyed by a rebuild)
/// resolves to nothing.
#[derive(Debug, Default)]
pub struct ControlSynthesizer {
    bindings: Vec<ControlBinding>,
}

impl ControlSynthesizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds controls for `descriptors` in list order inside `region`.
    pub fn build<H: ControlHost + ?Sized>(
        &mut self,
        host: &mut H,
        region: ControlRegion,
        descriptors: &[OptionDescriptor],
        state: &OptionsState,
    ) -> ChartResult<usize> {
        for descriptor in descriptors {
            let spec = control_spec(descriptor, state);
            let id = host.create_control(region, &spec)?;
            trace!(key = %descriptor.key, control = id.0, "control created");
            self.bindings.push(ControlBinding {
                id,
                region,
                descriptor: descriptor.clone(),
            });
        }
        Ok(descriptors.len())
    }

    /// Destroys every control of `region` and releases its bindings.
    pub fn destroy_region<H: ControlHost + ?Sized>(
        &mut self,
        host: &mut H,
        region: ControlRegion,
    ) -> usize {
        let mut destroyed = 0;
        self.bindings.retain(|binding| {
            if binding.region != region {
                return true;
            }
            host.destroy_control(binding.id);
            destroyed += 1;
            false
        });
        destroyed
    }

    /// Destroy-then-build of the type-specific region, followed by one
    /// visibility pass so fresh controls start in the right state.
    pub fn rebuild_type_specific<H: ControlHost + ?Sized>(
        &mut self,
        host: &mut H,
        descriptors: &[OptionDescriptor],
        state: &OptionsState,
    ) -> ChartResult<RebuildReport> {
        let destroyed = self.destroy_region(host, ControlRegion::TypeSpecific);
        let built = self.build(host, ControlRegion::TypeSpecific, descriptors, state)?;
        let hidden = self.apply_visibility(host, state);
        debug!(
            destroyed,
            built,
            hidden = hidden.len(),
            chart_type = %state.chart_type(),
            "type-specific controls rebuilt"
        );
        Ok(RebuildReport {
            destroyed,
            built,
            hidden,
        })
    }

    /// Shows or hides every bound control that has a visibility rule.
    /// Returns the keys whose rule evaluated to false.
    pub fn apply_visibility<H: ControlHost + ?Sized>(
        &self,
        host: &mut H,
        state: &OptionsState,
    ) -> Vec<OptionKey> {
        let mut hidden = Vec::new();
        for binding in &self.bindings {
            if !binding.descriptor.has_visibility_rule() {
                continue;
            }
            let visible = binding.descriptor.is_visible(state);
            host.set_control_visible(binding.id, visible);
            if !visible {
                hidden.push(binding.descriptor.key);
            }
        }
        hidden
    }

    /// Pushes the stored value of `key` into its control, if one is bound.
    pub fn refresh_value<H: ControlHost + ?Sized>(
        &self,
        host: &mut H,
        key: OptionKey,
        state: &OptionsState,
    ) {
        if let Some(binding) = self.bindings.iter().find(|b| b.descriptor.key == key) {
            let spec = control_spec(&binding.descriptor, state);
            host.update_control(binding.id, &spec.kind);
        }
    }

    /// Maps raw control input to the option write it stands for.
    ///
    /// `Ok(None)` means the control is no longer bound.
    pub fn resolve_input(
        &self,
        id: ControlId,
        input: ControlInput,
    ) -> ChartResult<Option<(OptionKey, OptionValue)>> {
        let Some(binding) = self.bindings.iter().find(|binding| binding.id == id) else {
            debug!(control = id.0, "input for released control ignored");
            return Ok(None);
        };
        let descriptor = &binding.descriptor;
        let value = match (&descriptor.kind, input) {
            (OptionKind::Checkbox { .. }, ControlInput::Toggled(checked)) => {
                OptionValue::Bool(checked)
            }
            (OptionKind::Combo { choices, .. }, ControlInput::Selected(index)) => {
                let choice = choices.get(index).ok_or_else(|| {
                    invalid_value(
                        descriptor.key,
                        format!("selection {index} is out of range for {} choices", choices.len()),
                    )
                })?;
                OptionValue::text(*choice)
            }
            (OptionKind::TextInput { .. }, ControlInput::Text(text)) => OptionValue::Text(text),
            (OptionKind::NumberInput { .. }, ControlInput::Text(text)) => parse_number_input(&text),
            (kind, input) => {
                return Err(invalid_value(
                    descriptor.key,
                    format!("{} control cannot handle {input:?}", kind.name()),
                ));
            }
        };
        Ok(Some((descriptor.key, value)))
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn control_id(&self, key: OptionKey) -> Option<ControlId> {
        self.bindings
            .iter()
            .find(|binding| binding.descriptor.key == key)
            .map(|binding| binding.id)
    }

    /// `(key, region, visible)` for every bound control, in build order.
    #[must_use]
    pub fn control_states(&self, state: &OptionsState) -> Vec<(OptionKey, ControlRegion, bool)> {
        self.bindings
            .iter()
            .map(|binding| {
                (
                    binding.descriptor.key,
                    binding.region,
                    binding.descriptor.is_visible(state),
                )
            })
            .collect()
    }
}

/// Control construction payload for `descriptor`, seeded from the current
/// value (falling back to the descriptor default).
fn control_spec(descriptor: &OptionDescriptor, state: &OptionsState) -> ControlSpec {
    let current = state
        .get(descriptor.key)
        .cloned()
        .unwrap_or_else(|| descriptor.default_value());
    let kind = match &descriptor.kind {
        OptionKind::Checkbox { default } => ControlKind::Checkbox {
            checked: current.as_bool().unwrap_or(*default),
        },
        OptionKind::Combo {
            choices,
            display_choices,
            ..
        } => {
            let labels = display_choices.as_ref().unwrap_or(choices);
            let selected = current
                .as_text()
                .and_then(|text| choices.iter().position(|choice| *choice == text))
                .unwrap_or(0);
            ControlKind::Combo {
                choices: labels.iter().map(|label| (*label).to_owned()).collect(),
                selected,
            }
        }
        OptionKind::TextInput { .. } => ControlKind::TextInput {
            value: current.to_input_text(),
        },
        OptionKind::NumberInput { .. } => ControlKind::NumberInput {
            value: current.to_input_text(),
        },
    };
    ControlSpec {
        key: descriptor.key,
        label: descriptor.label.to_owned(),
        kind,
    }
}
