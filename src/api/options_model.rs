//! Reactive options model.
//!
//! `set` is the single mutation path for [`OptionsState`]. A write that does
//! not change the stored value is reported as [`OptionsChange::Unchanged`]
//! and has no side effects. A changing write of `type` is structural (the
//! schema is swapped); any other changing write is cosmetic (only visibility
//! and the renderer's copy of the options need refreshing).

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ChartType, OptionKey, OptionValue};
use crate::error::{ChartError, ChartResult};

use super::validation::{invalid_value, validate_option_value};
use super::{OptionSchema, OptionsState};

/// Classification of a write, ordered by how much work it causes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionsChange {
    Unchanged,
    Cosmetic { key: OptionKey, value: OptionValue },
    Structural { from: ChartType, to: ChartType },
}

impl OptionsChange {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

type OptionsListener = Box<dyn FnMut(&OptionsChange, &OptionsState)>;

pub struct OptionsModel {
    state: OptionsState,
    schema: OptionSchema,
    listeners: Vec<(SubscriptionId, OptionsListener)>,
    next_subscription: u64,
}

impl OptionsModel {
    /// Creates a model seeded with every default of `chart_type`'s schema.
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        let schema = OptionSchema::for_chart_type(chart_type);
        let mut state = OptionsState::new(chart_type);
        state.install_schema(&schema);
        Self {
            state,
            schema,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    #[must_use]
    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.state.get(key)
    }

    #[must_use]
    pub fn state(&self) -> &OptionsState {
        &self.state
    }

    #[must_use]
    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.state.chart_type()
    }

    /// Writes `value` under `key` and reports what kind of change it was.
    ///
    /// Keys outside the current schema and values of the wrong kind are
    /// rejected without touching the state.
    pub fn set(&mut self, key: OptionKey, value: OptionValue) -> ChartResult<OptionsChange> {
        let change = if key == OptionKey::Type {
            self.set_chart_type_value(&value)?
        } else {
            self.set_plain(key, value)?
        };

        if change.is_changed() {
            for (_, listener) in &mut self.listeners {
                listener(&change, &self.state);
            }
        }
        Ok(change)
    }

    /// Typed shortcut for writing the `type` discriminant.
    pub fn set_chart_type(&mut self, chart_type: ChartType) -> ChartResult<OptionsChange> {
        self.set(OptionKey::Type, OptionValue::text(chart_type.id()))
    }

    /// Current visibility of every option that has a visibility rule.
    #[must_use]
    pub fn visibility(&self) -> Vec<(OptionKey, bool)> {
        self.schema
            .descriptors()
            .filter(|descriptor| descriptor.has_visibility_rule())
            .map(|descriptor| (descriptor.key, descriptor.is_visible(&self.state)))
            .collect()
    }

    /// Registers a listener called after every changing write.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&OptionsChange, &OptionsState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `true` when it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _)| *candidate != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn set_chart_type_value(&mut self, value: &OptionValue) -> ChartResult<OptionsChange> {
        let id = value
            .as_text()
            .ok_or_else(|| invalid_value(OptionKey::Type, "chart type must be a text id"))?;
        let next: ChartType = id.parse()?;
        let previous = self.state.chart_type();
        if next == previous {
            trace!(chart_type = %next, "chart type unchanged");
            return Ok(OptionsChange::Unchanged);
        }

        self.schema = OptionSchema::for_chart_type(next);
        self.state.install_schema(&self.schema);
        debug!(
            from = %previous,
            to = %next,
            option_count = self.state.len(),
            "chart type changed; option schema reinstalled"
        );
        Ok(OptionsChange::Structural {
            from: previous,
            to: next,
        })
    }

    fn set_plain(&mut self, key: OptionKey, value: OptionValue) -> ChartResult<OptionsChange> {
        let descriptor = self
            .schema
            .get(key)
            .ok_or_else(|| ChartError::UnknownOptionKey {
                chart_type: self.state.chart_type().id().to_owned(),
                key: key.as_str().to_owned(),
            })?;
        validate_option_value(descriptor, &value)?;

        if self.state.get(key) == Some(&value) {
            trace!(key = %key, "option write suppressed; value unchanged");
            return Ok(OptionsChange::Unchanged);
        }

        debug!(key = %key, value = ?value, "option changed");
        self.state.insert(key, value.clone());
        Ok(OptionsChange::Cosmetic { key, value })
    }
}
