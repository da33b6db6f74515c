use serde::{Deserialize, Serialize};

use crate::core::ChartType;
use crate::error::{ChartError, ChartResult};

/// Panel bootstrap configuration.
///
/// Serializable so hosts can ship defaults in their settings files. Missing
/// fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPanelConfig {
    #[serde(default = "default_initial_chart_type")]
    pub initial_chart_type: ChartType,
    /// Upper bound on rows fetched for one chart; `None` fetches the full result set.
    #[serde(default)]
    pub row_fetch_limit: Option<usize>,
}

impl Default for ChartPanelConfig {
    fn default() -> Self {
        Self {
            initial_chart_type: default_initial_chart_type(),
            row_fetch_limit: None,
        }
    }
}

impl ChartPanelConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart type selected when the panel is created.
    #[must_use]
    pub fn with_initial_chart_type(mut self, chart_type: ChartType) -> Self {
        self.initial_chart_type = chart_type;
        self
    }

    /// Caps the number of rows requested per fetch.
    ///
    /// A limit of zero is rejected when the panel is created.
    #[must_use]
    pub fn with_row_fetch_limit(mut self, limit: Option<usize>) -> Self {
        self.row_fetch_limit = limit;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse panel config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.row_fetch_limit == Some(0) {
            return Err(ChartError::InvalidData(
                "row fetch limit must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_initial_chart_type() -> ChartType {
    ChartType::Bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config = ChartPanelConfig::from_json_str("{}").expect("parse");
        assert_eq!(config, ChartPanelConfig::default());
    }

    #[test]
    fn json_fields_override_defaults() {
        let config = ChartPanelConfig::from_json_str(
            r#"{"initial_chart_type":"timeSeries","row_fetch_limit":500}"#,
        )
        .expect("parse");
        assert_eq!(config.initial_chart_type, ChartType::TimeSeries);
        assert_eq!(config.row_fetch_limit, Some(500));
    }

    #[test]
    fn zero_row_limit_is_rejected() {
        assert!(ChartPanelConfig::from_json_str(r#"{"row_fetch_limit":0}"#).is_err());
    }

    #[test]
    fn zero_row_limit_from_builder_fails_validation() {
        let config = ChartPanelConfig::new().with_row_fetch_limit(Some(0));
        assert!(matches!(config.validate(), Err(ChartError::InvalidData(_))));
        assert!(
            ChartPanelConfig::new()
                .with_row_fetch_limit(Some(1))
                .validate()
                .is_ok()
        );
    }
}
