mod null_renderer;

pub use null_renderer::NullRenderer;

use std::rc::Rc;

use crate::api::OptionsState;
use crate::core::{RowDataMatrix, Viewport};
use crate::error::ChartResult;

/// Contract implemented by the chart drawing delegate.
///
/// The panel hands over read-only snapshots: options are borrowed for the
/// duration of the call, data is shared and never mutated afterwards.
/// A backend draws whenever it holds both.
pub trait Renderer {
    fn set_options(&mut self, options: &OptionsState) -> ChartResult<()>;

    fn set_data(&mut self, data: Rc<RowDataMatrix>) -> ChartResult<()>;

    fn layout(&mut self, viewport: Viewport) -> ChartResult<()>;
}
