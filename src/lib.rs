//! query-chart: chart configuration and data-binding engine for query
//! result panels.
//!
//! The crate keeps a per-chart-type option schema consistent while the user
//! edits options, synthesizes host controls for it, and lazily binds rows of
//! a selected result set to a chart renderer. Drawing, widget toolkits and
//! query execution stay behind the [`render::Renderer`],
//! [`controls::ControlHost`] and [`source::RowDataProvider`] seams.

pub mod api;
pub mod controls;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod source;
pub mod telemetry;

pub use api::{ChartPanel, ChartPanelConfig};
pub use error::{ChartError, ChartResult};
