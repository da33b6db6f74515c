use tracing::{debug, trace};

use crate::controls::{ControlHost, PanelContainer, PanelLayout};
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::validation::validate_viewport;
use super::{ChartPanel, FetchRequest};

impl<R: Renderer, H: ControlHost> ChartPanel<R, H> {
    /// Attaches the panel to `container`.
    ///
    /// The first call builds the graph/options layout and instantiates the
    /// renderer with the current options; later calls only re-attach the
    /// existing layout. If data is already available it is pushed to the
    /// renderer. Otherwise a fetch is re-attempted and returned, unless one
    /// for the current selection is still outstanding.
    pub fn mount<C, F>(
        &mut self,
        container: &mut C,
        make_renderer: F,
    ) -> ChartResult<Option<FetchRequest>>
    where
        C: PanelContainer + ?Sized,
        F: FnOnce() -> R,
    {
        if self.renderer.is_none() {
            let mut renderer = make_renderer();
            renderer.set_options(self.model.state())?;
            self.renderer = Some(renderer);
            self.layout = Some(PanelLayout::default());
            debug!(chart_type = %self.model.chart_type(), "chart panel mounted");
            self.emit_event(ChartEvent::Mounted);
        } else {
            trace!("chart panel already mounted; re-attaching layout");
        }

        if let Some(layout) = self.layout.as_ref() {
            container.attach(layout);
        }

        match (self.binding.matrix().cloned(), self.renderer.as_mut()) {
            (Some(matrix), Some(renderer)) => {
                renderer.set_data(matrix)?;
                Ok(None)
            }
            _ => Ok(self.binding.try_fetch()),
        }
    }

    /// Forwards the available content size to the renderer. No-op while unmounted.
    pub fn layout(&mut self, viewport: Viewport) -> ChartResult<()> {
        let Some(renderer) = self.renderer.as_mut() else {
            trace!("layout ignored; panel not mounted");
            return Ok(());
        };
        let viewport = validate_viewport(viewport)?;
        renderer.layout(viewport)?;
        self.emit_event(ChartEvent::LayoutChanged { viewport });
        Ok(())
    }
}
