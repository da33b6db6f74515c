use crate::controls::ControlHost;
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartObserver, ObserverContext};
use crate::render::Renderer;

use super::ChartPanel;

impl<R: Renderer, H: ControlHost> ChartPanel<R, H> {
    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn ChartObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    #[must_use]
    pub fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            chart_type: self.model.chart_type(),
            option_count: self.model.state().len(),
            control_count: self.synthesizer.binding_count(),
            selection: self.binding.selection(),
            data_shape: self.binding.matrix().map(|matrix| matrix.shape()),
            mounted: self.is_mounted(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(&event, &context);
        }
    }
}
