use tracing::debug;

use crate::controls::{ControlHost, ControlRegion, PanelLayout};
use crate::core::{ChartType, OptionKey, OptionValue};
use crate::error::ChartResult;
use crate::extensions::ChartObserver;
use crate::render::Renderer;

use super::{
    ChartPanelConfig, ControlSynthesizer, DataBinding, OptionSchema, OptionsChange, OptionsModel,
    OptionsState, SubscriptionId,
};

/// Results-panel facade consumed by host applications.
///
/// `ChartPanel` owns the options model, the synthesized controls and the
/// data binding, and forwards options and data to the renderer once it is
/// mounted.
pub struct ChartPanel<R: Renderer, H: ControlHost> {
    pub(super) controls: H,
    pub(super) renderer: Option<R>,
    pub(super) layout: Option<PanelLayout>,
    pub(super) model: OptionsModel,
    pub(super) synthesizer: ControlSynthesizer,
    pub(super) binding: DataBinding,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
    pub(super) config: ChartPanelConfig,
}

impl<R: Renderer, H: ControlHost> ChartPanel<R, H> {
    /// Creates an unmounted panel and synthesizes its option controls.
    pub fn new(controls: H, config: ChartPanelConfig) -> ChartResult<Self> {
        config.validate()?;
        let model = OptionsModel::new(config.initial_chart_type);
        let mut panel = Self {
            controls,
            renderer: None,
            layout: None,
            model,
            synthesizer: ControlSynthesizer::new(),
            binding: DataBinding::new(config.row_fetch_limit),
            observers: Vec::new(),
            config,
        };

        let schema = OptionSchema::for_chart_type(config.initial_chart_type);
        panel.synthesizer.build(
            &mut panel.controls,
            ControlRegion::General,
            schema.general(),
            panel.model.state(),
        )?;
        panel.synthesizer.rebuild_type_specific(
            &mut panel.controls,
            schema.type_specific(),
            panel.model.state(),
        )?;
        debug!(
            chart_type = %config.initial_chart_type,
            controls = panel.synthesizer.binding_count(),
            "chart panel created"
        );
        Ok(panel)
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.model.chart_type()
    }

    #[must_use]
    pub fn option(&self, key: OptionKey) -> Option<&OptionValue> {
        self.model.get(key)
    }

    #[must_use]
    pub fn options(&self) -> &OptionsState {
        self.model.state()
    }

    #[must_use]
    pub fn options_model(&self) -> &OptionsModel {
        &self.model
    }

    /// Registers a listener for option changes made through this panel.
    pub fn subscribe_options(
        &mut self,
        listener: impl FnMut(&OptionsChange, &OptionsState) + 'static,
    ) -> SubscriptionId {
        self.model.subscribe(listener)
    }

    pub fn unsubscribe_options(&mut self, id: SubscriptionId) -> bool {
        self.model.unsubscribe(id)
    }

    #[must_use]
    pub fn config(&self) -> ChartPanelConfig {
        self.config
    }

    #[must_use]
    pub fn controls(&self) -> &H {
        &self.controls
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.renderer.is_some()
    }

    #[must_use]
    pub fn into_parts(self) -> (H, Option<R>) {
        (self.controls, self.renderer)
    }
}
