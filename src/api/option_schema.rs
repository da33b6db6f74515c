//! Static registry mapping each chart type to its option descriptors.
//!
//! Descriptor kinds are plain data here; turning them into controls is the
//! job of the control synthesizer.

use smallvec::{SmallVec, smallvec};

use crate::core::{ChartType, OptionKey, OptionValue};
use crate::error::ChartResult;

use super::OptionsState;

/// Predicate deciding whether an option's control is shown for the current state.
pub type VisibilityRule = fn(&OptionsState) -> bool;

pub type ComboChoices = SmallVec<[&'static str; 5]>;

pub const DIRECTION_VERTICAL: &str = "vertical";
pub const DIRECTION_HORIZONTAL: &str = "horizontal";

/// Kind of control plus the payload needed to construct it.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    Checkbox {
        default: bool,
    },
    Combo {
        choices: ComboChoices,
        /// Labels shown to the user, 1:1 with `choices`.
        display_choices: Option<ComboChoices>,
        default: &'static str,
    },
    TextInput {
        default: &'static str,
    },
    NumberInput {
        default: Option<f64>,
    },
}

impl OptionKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Checkbox { .. } => "checkbox",
            Self::Combo { .. } => "combo",
            Self::TextInput { .. } => "input",
            Self::NumberInput { .. } => "numberInput",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    pub key: OptionKey,
    pub label: &'static str,
    pub kind: OptionKind,
    pub visible_when: Option<VisibilityRule>,
}

impl OptionDescriptor {
    #[must_use]
    pub fn default_value(&self) -> OptionValue {
        match &self.kind {
            OptionKind::Checkbox { default } => OptionValue::Bool(*default),
            OptionKind::Combo { default, .. } => OptionValue::text(*default),
            OptionKind::TextInput { default } => OptionValue::text(*default),
            OptionKind::NumberInput { default } => {
                default.map_or(OptionValue::Empty, OptionValue::number)
            }
        }
    }

    /// Evaluates the visibility rule; options without one are always shown.
    #[must_use]
    pub fn is_visible(&self, state: &OptionsState) -> bool {
        self.visible_when.is_none_or(|rule| rule(state))
    }

    #[must_use]
    pub fn has_visibility_rule(&self) -> bool {
        self.visible_when.is_some()
    }
}

/// General descriptors followed by the type-specific ones for one chart type.
#[derive(Debug, Clone)]
pub struct OptionSchema {
    chart_type: ChartType,
    general: Vec<OptionDescriptor>,
    type_specific: Vec<OptionDescriptor>,
}

impl OptionSchema {
    #[must_use]
    pub fn for_chart_type(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            general: general_options(),
            type_specific: type_options(chart_type),
        }
    }

    /// Resolves a schema from a renderer id such as `"pie"`.
    pub fn for_id(id: &str) -> ChartResult<Self> {
        Ok(Self::for_chart_type(id.parse()?))
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn general(&self) -> &[OptionDescriptor] {
        &self.general
    }

    #[must_use]
    pub fn type_specific(&self) -> &[OptionDescriptor] {
        &self.type_specific
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.general.iter().chain(self.type_specific.iter())
    }

    #[must_use]
    pub fn get(&self, key: OptionKey) -> Option<&OptionDescriptor> {
        self.descriptors().find(|descriptor| descriptor.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: OptionKey) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<OptionKey> {
        self.descriptors().map(|descriptor| descriptor.key).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.general.len() + self.type_specific.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered descriptors for `chart_type`: general set first, then type-specific.
#[must_use]
pub fn schema_for(chart_type: ChartType) -> Vec<OptionDescriptor> {
    OptionSchema::for_chart_type(chart_type)
        .descriptors()
        .cloned()
        .collect()
}

/// Descriptors present for every chart type.
#[must_use]
pub fn general_options() -> Vec<OptionDescriptor> {
    vec![
        OptionDescriptor {
            key: OptionKey::Type,
            label: "Chart Type",
            kind: OptionKind::Combo {
                choices: ChartType::ALL.iter().map(|t| t.id()).collect(),
                display_choices: Some(ChartType::ALL.iter().map(|t| t.label()).collect()),
                default: ChartType::default().id(),
            },
            visible_when: None,
        },
        OptionDescriptor {
            key: OptionKey::Title,
            label: "Title",
            kind: OptionKind::TextInput { default: "" },
            visible_when: None,
        },
    ]
}

#[must_use]
pub fn type_options(chart_type: ChartType) -> Vec<OptionDescriptor> {
    match chart_type {
        ChartType::Bar | ChartType::Line => vec![
            data_direction(),
            columns_as_labels(),
            label_first_column(),
            legend_position(),
            text_input(OptionKey::YAxisLabel, "Y Axis Label"),
            number_input(OptionKey::YAxisMin, "Y Axis Minimum Value"),
            number_input(OptionKey::YAxisMax, "Y Axis Maximum Value"),
            text_input(OptionKey::XAxisLabel, "X Axis Label"),
        ],
        ChartType::HorizontalBar => vec![
            data_direction(),
            columns_as_labels(),
            label_first_column(),
            legend_position(),
            text_input(OptionKey::XAxisLabel, "X Axis Label"),
            number_input(OptionKey::XAxisMin, "X Axis Minimum Value"),
            number_input(OptionKey::XAxisMax, "X Axis Maximum Value"),
            text_input(OptionKey::YAxisLabel, "Y Axis Label"),
        ],
        ChartType::Pie | ChartType::Doughnut => vec![
            data_direction(),
            columns_as_labels(),
            label_first_column(),
            legend_position(),
        ],
        ChartType::Scatter | ChartType::TimeSeries => vec![
            legend_position(),
            text_input(OptionKey::YAxisLabel, "Y Axis Label"),
            number_input(OptionKey::YAxisMin, "Y Axis Minimum Value"),
            number_input(OptionKey::YAxisMax, "Y Axis Maximum Value"),
            text_input(OptionKey::XAxisLabel, "X Axis Label"),
            number_input(OptionKey::XAxisMin, "X Axis Minimum Value"),
            number_input(OptionKey::XAxisMax, "X Axis Maximum Value"),
        ],
        ChartType::Table | ChartType::Count => Vec::new(),
        ChartType::Image => vec![
            OptionDescriptor {
                key: OptionKey::Encoding,
                label: "Encoding",
                kind: OptionKind::Combo {
                    choices: smallvec!["hex", "base64"],
                    display_choices: None,
                    default: "hex",
                },
                visible_when: None,
            },
            OptionDescriptor {
                key: OptionKey::ImageFormat,
                label: "Image Format",
                kind: OptionKind::Combo {
                    choices: smallvec!["jpeg", "png"],
                    display_choices: None,
                    default: "jpeg",
                },
                visible_when: None,
            },
        ],
    }
}

fn data_direction() -> OptionDescriptor {
    OptionDescriptor {
        key: OptionKey::DataDirection,
        label: "Data Direction",
        kind: OptionKind::Combo {
            choices: smallvec![DIRECTION_VERTICAL, DIRECTION_HORIZONTAL],
            display_choices: Some(smallvec!["Vertical", "Horizontal"]),
            default: DIRECTION_VERTICAL,
        },
        visible_when: None,
    }
}

fn columns_as_labels() -> OptionDescriptor {
    OptionDescriptor {
        key: OptionKey::ColumnsAsLabels,
        label: "Use column names as labels",
        kind: OptionKind::Checkbox { default: false },
        visible_when: Some(direction_is_vertical),
    }
}

fn label_first_column() -> OptionDescriptor {
    OptionDescriptor {
        key: OptionKey::LabelFirstColumn,
        label: "Use first column as row label",
        kind: OptionKind::Checkbox { default: false },
        visible_when: Some(direction_is_horizontal),
    }
}

fn direction_is_vertical(state: &OptionsState) -> bool {
    state.text(OptionKey::DataDirection) == Some(DIRECTION_VERTICAL)
}

fn direction_is_horizontal(state: &OptionsState) -> bool {
    state.text(OptionKey::DataDirection) == Some(DIRECTION_HORIZONTAL)
}

fn legend_position() -> OptionDescriptor {
    OptionDescriptor {
        key: OptionKey::LegendPosition,
        label: "Legend Position",
        kind: OptionKind::Combo {
            choices: smallvec!["top", "bottom", "left", "right", "none"],
            display_choices: Some(smallvec!["Top", "Bottom", "Left", "Right", "None"]),
            default: "top",
        },
        visible_when: None,
    }
}

fn text_input(key: OptionKey, label: &'static str) -> OptionDescriptor {
    OptionDescriptor {
        key,
        label,
        kind: OptionKind::TextInput { default: "" },
        visible_when: None,
    }
}

fn number_input(key: OptionKey, label: &'static str) -> OptionDescriptor {
    OptionDescriptor {
        key,
        label,
        kind: OptionKind::NumberInput { default: None },
        visible_when: None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_schema_starts_with_general_descriptors() {
        let general: Vec<OptionKey> = general_options().iter().map(|d| d.key).collect();
        for chart_type in ChartType::ALL {
            let keys = OptionSchema::for_chart_type(chart_type).keys();
            assert_eq!(&keys[..general.len()], general.as_slice(), "{chart_type}");
        }
    }

    #[test]
    fn type_combo_offers_only_registered_types() {
        let schema = OptionSchema::for_chart_type(ChartType::Bar);
        let Some(OptionKind::Combo { choices, .. }) = schema.get(OptionKey::Type).map(|d| &d.kind)
        else {
            panic!("type must be a combo");
        };
        for choice in choices {
            assert!(OptionSchema::for_id(choice).is_ok(), "{choice}");
        }
        assert_eq!(choices.len(), ChartType::ALL.len());
    }

    #[test]
    fn combo_display_labels_match_choices() {
        for chart_type in ChartType::ALL {
            for descriptor in schema_for(chart_type) {
                if let OptionKind::Combo {
                    choices,
                    display_choices: Some(labels),
                    default,
                } = &descriptor.kind
                {
                    assert_eq!(choices.len(), labels.len(), "{}", descriptor.key);
                    assert!(choices.contains(default), "{}", descriptor.key);
                }
            }
        }
    }

    #[test]
    fn table_and_count_have_no_type_specific_options() {
        assert!(type_options(ChartType::Table).is_empty());
        assert!(type_options(ChartType::Count).is_empty());
        let keys: HashSet<OptionKey> = schema_for(ChartType::Table).iter().map(|d| d.key).collect();
        assert_eq!(keys, HashSet::from([OptionKey::Type, OptionKey::Title]));
    }

    #[test]
    fn unknown_id_fails_fast() {
        assert!(OptionSchema::for_id("sunburst").is_err());
    }
}
