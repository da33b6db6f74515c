use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown chart type: `{0}`")]
    UnknownChartType(String),

    #[error("option `{key}` is not part of the `{chart_type}` schema")]
    UnknownOptionKey { chart_type: String, key: String },

    #[error("invalid value for option `{key}`: {reason}")]
    InvalidOptionValue { key: String, reason: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("row data provider failed: {0}")]
    Provider(String),

    #[error("renderer rejected update: {0}")]
    Renderer(String),
}
