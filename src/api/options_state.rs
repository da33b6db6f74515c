use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ChartType, OptionKey, OptionValue};
use crate::error::{ChartError, ChartResult};

use super::OptionSchema;

pub type OptionsMap = IndexMap<OptionKey, OptionValue>;

/// Live option values for the active chart type.
///
/// Always holds `type`; the remaining keys are exactly those of the schema
/// installed by the options model. Serializes as the flat config object the
/// renderer consumes, e.g. `{"type":"bar","title":"",...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OptionsMap", into = "OptionsMap")]
pub struct OptionsState {
    chart_type: ChartType,
    values: OptionsMap,
}

impl OptionsState {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        let mut values = OptionsMap::new();
        values.insert(OptionKey::Type, OptionValue::text(chart_type.id()));
        Self { chart_type, values }
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.values.get(&key)
    }

    #[must_use]
    pub fn text(&self, key: OptionKey) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_text)
    }

    #[must_use]
    pub fn bool(&self, key: OptionKey) -> Option<bool> {
        self.get(key).and_then(OptionValue::as_bool)
    }

    #[must_use]
    pub fn number(&self, key: OptionKey) -> Option<f64> {
        self.get(key).and_then(OptionValue::as_number)
    }

    #[must_use]
    pub fn contains_key(&self, key: OptionKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn keys(&self) -> impl Iterator<Item = OptionKey> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &OptionValue)> {
        self.values.iter().map(|(key, value)| (*key, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json_value(&self) -> ChartResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Raw write; the options model is responsible for validation.
    pub(crate) fn insert(&mut self, key: OptionKey, value: OptionValue) -> Option<OptionValue> {
        self.values.insert(key, value)
    }

    /// Installs `schema`: switches the type, drops keys outside the schema,
    /// keeps general values, and reseeds every type-specific key to its default.
    pub(crate) fn install_schema(&mut self, schema: &OptionSchema) {
        self.chart_type = schema.chart_type();
        self.values.retain(|key, _| schema.contains(*key));
        self.values
            .insert(OptionKey::Type, OptionValue::text(schema.chart_type().id()));
        for descriptor in schema.general() {
            if !self.values.contains_key(&descriptor.key) {
                self.values.insert(descriptor.key, descriptor.default_value());
            }
        }
        for descriptor in schema.type_specific() {
            self.values.insert(descriptor.key, descriptor.default_value());
        }
        let order = schema.keys();
        let rank = |key: &OptionKey| {
            order
                .iter()
                .position(|candidate| candidate == key)
                .unwrap_or(usize::MAX)
        };
        self.values
            .sort_by(|left, _, right, _| rank(left).cmp(&rank(right)));
    }
}

impl TryFrom<OptionsMap> for OptionsState {
    type Error = ChartError;

    fn try_from(values: OptionsMap) -> Result<Self, Self::Error> {
        let chart_type = values
            .get(&OptionKey::Type)
            .and_then(OptionValue::as_text)
            .ok_or_else(|| ChartError::InvalidData("options are missing `type`".to_owned()))?
            .parse()?;
        Ok(Self { chart_type, values })
    }
}

impl From<OptionsState> for OptionsMap {
    fn from(state: OptionsState) -> Self {
        state.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_schema_drops_stale_keys_and_keeps_general_values() {
        let mut state = OptionsState::new(ChartType::Bar);
        state.install_schema(&OptionSchema::for_chart_type(ChartType::Bar));
        state.insert(OptionKey::Title, OptionValue::text("Sales"));
        state.insert(OptionKey::YAxisMin, OptionValue::number(5.0));

        state.install_schema(&OptionSchema::for_chart_type(ChartType::Pie));

        assert_eq!(state.chart_type(), ChartType::Pie);
        assert_eq!(state.text(OptionKey::Type), Some("pie"));
        assert_eq!(state.text(OptionKey::Title), Some("Sales"));
        assert!(!state.contains_key(OptionKey::YAxisMin));
        assert_eq!(
            state.keys().collect::<Vec<_>>(),
            OptionSchema::for_chart_type(ChartType::Pie).keys()
        );
    }

    #[test]
    fn json_is_flat_and_round_trips() {
        let mut state = OptionsState::new(ChartType::Line);
        state.install_schema(&OptionSchema::for_chart_type(ChartType::Line));

        let json = serde_json::to_string(&state).expect("serialize");
        assert!(json.starts_with(r#"{"type":"line","title":"""#), "{json}");

        let parsed: OptionsState = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, state);
    }

    #[test]
    fn json_without_valid_type_is_rejected() {
        assert!(serde_json::from_str::<OptionsState>(r#"{"title":"x"}"#).is_err());
        assert!(serde_json::from_str::<OptionsState>(r#"{"type":"radar"}"#).is_err());
    }
}
