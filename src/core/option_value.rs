use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Validated option key; the serde name is the renderer config entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionKey {
    Type,
    Title,
    DataDirection,
    ColumnsAsLabels,
    LabelFirstColumn,
    LegendPosition,
    XAxisLabel,
    YAxisLabel,
    XAxisMin,
    XAxisMax,
    YAxisMin,
    YAxisMax,
    Encoding,
    ImageFormat,
}

impl OptionKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Title => "title",
            Self::DataDirection => "dataDirection",
            Self::ColumnsAsLabels => "columnsAsLabels",
            Self::LabelFirstColumn => "labelFirstColumn",
            Self::LegendPosition => "legendPosition",
            Self::XAxisLabel => "xAxisLabel",
            Self::YAxisLabel => "yAxisLabel",
            Self::XAxisMin => "xAxisMin",
            Self::XAxisMax => "xAxisMax",
            Self::YAxisMin => "yAxisMin",
            Self::YAxisMax => "yAxisMax",
            Self::Encoding => "encoding",
            Self::ImageFormat => "imageFormat",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of one option.
///
/// Numbers compare by value with `NaN == NaN`, so re-entering the same
/// malformed number does not count as a change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// No value; used for unset numeric bounds.
    #[default]
    Empty,
    Bool(bool),
    Number(OrderedFloat<f64>),
    Text(String),
}

impl OptionValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.into_inner()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text shown inside a text or number input for this value.
    #[must_use]
    pub fn to_input_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => value.into_inner().to_string(),
            Self::Text(value) => value.clone(),
        }
    }

    /// Short name of the value kind, used in validation messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_numbers_compare_equal() {
        assert_eq!(OptionValue::number(f64::NAN), OptionValue::number(f64::NAN));
        assert_ne!(OptionValue::number(1.0), OptionValue::number(2.0));
    }

    #[test]
    fn untagged_serde_maps_json_kinds() {
        let values: Vec<OptionValue> =
            serde_json::from_str(r#"[null, true, 2.5, "top"]"#).expect("parse values");
        assert_eq!(
            values,
            vec![
                OptionValue::Empty,
                OptionValue::Bool(true),
                OptionValue::number(2.5),
                OptionValue::text("top"),
            ]
        );
    }

    #[test]
    fn key_serde_name_matches_as_str() {
        let json = serde_json::to_string(&OptionKey::LabelFirstColumn).expect("serialize");
        assert_eq!(json, format!("\"{}\"", OptionKey::LabelFirstColumn.as_str()));
    }
}
