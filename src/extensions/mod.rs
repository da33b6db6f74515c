//! Optional hooks layered on top of the panel.

pub mod observers;

pub use observers::{ChartEvent, ChartObserver, ObserverContext};
