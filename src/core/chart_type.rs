use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Discriminant selecting the visualization and its option schema.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    Bar,
    HorizontalBar,
    Line,
    Pie,
    Doughnut,
    Scatter,
    TimeSeries,
    Table,
    /// Scorecard showing the first row's values.
    Count,
    Image,
}

impl ChartType {
    /// Every registered chart type, in the order offered by the type combo.
    pub const ALL: [Self; 10] = [
        Self::Bar,
        Self::HorizontalBar,
        Self::Line,
        Self::Pie,
        Self::Doughnut,
        Self::Scatter,
        Self::TimeSeries,
        Self::Table,
        Self::Count,
        Self::Image,
    ];

    /// Stable identifier shared with the renderer configuration.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontalBar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Scatter => "scatter",
            Self::TimeSeries => "timeSeries",
            Self::Table => "table",
            Self::Count => "count",
            Self::Image => "image",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::HorizontalBar => "Horizontal Bar",
            Self::Line => "Line",
            Self::Pie => "Pie",
            Self::Doughnut => "Doughnut",
            Self::Scatter => "Scatter",
            Self::TimeSeries => "Time Series",
            Self::Table => "Table",
            Self::Count => "Count",
            Self::Image => "Image",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|chart_type| chart_type.id() == s)
            .ok_or_else(|| ChartError::UnknownChartType(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for chart_type in ChartType::ALL {
            assert_eq!(chart_type.id().parse::<ChartType>().ok(), Some(chart_type));
        }
    }

    #[test]
    fn unregistered_id_is_rejected() {
        let err = "radar".parse::<ChartType>().expect_err("radar is not registered");
        assert!(matches!(err, ChartError::UnknownChartType(id) if id == "radar"));
    }

    #[test]
    fn serde_uses_renderer_ids() {
        let json = serde_json::to_string(&ChartType::HorizontalBar).expect("serialize");
        assert_eq!(json, "\"horizontalBar\"");
    }
}
