use std::rc::Rc;

use crate::api::OptionsState;
use crate::core::{RowDataMatrix, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

/// Renderer that draws nothing and records what it was given.
///
/// With `strict` set it rejects `NaN` option values, mimicking a drawing
/// backend that refuses malformed numeric bounds.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub strict: bool,
    pub options: Option<OptionsState>,
    pub data: Option<Rc<RowDataMatrix>>,
    pub viewport: Option<Viewport>,
    pub options_push_count: usize,
    pub data_push_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

impl Renderer for NullRenderer {
    fn set_options(&mut self, options: &OptionsState) -> ChartResult<()> {
        if self.strict {
            if let Some((key, _)) = options
                .iter()
                .find(|(_, value)| value.as_number().is_some_and(f64::is_nan))
            {
                return Err(ChartError::Renderer(format!("option `{key}` is not a number")));
            }
        }
        self.options = Some(options.clone());
        self.options_push_count += 1;
        Ok(())
    }

    fn set_data(&mut self, data: Rc<RowDataMatrix>) -> ChartResult<()> {
        self.data = Some(data);
        self.data_push_count += 1;
        Ok(())
    }

    fn layout(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = Some(viewport);
        Ok(())
    }
}
