pub mod chart_type;
pub mod option_value;
pub mod result_set;
pub mod types;

pub use chart_type::ChartType;
pub use option_value::{OptionKey, OptionValue};
pub use result_set::{
    BatchSummary, ColumnInfo, DataSourceRef, DbCellValue, ResultSetSummary, ResultSubset,
    RowDataMatrix,
};
pub use types::Viewport;
