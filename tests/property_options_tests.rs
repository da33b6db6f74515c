use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use query_chart::api::{ChartPanel, ChartPanelConfig, OptionSchema, OptionsChange};
use query_chart::controls::{ControlRegion, HeadlessContainer, HeadlessControlHost};
use query_chart::core::{ChartType, OptionKey, OptionValue};
use query_chart::render::NullRenderer;

type Panel = ChartPanel<NullRenderer, HeadlessControlHost>;

fn chart_type_strategy() -> impl Strategy<Value = ChartType> {
    (0..ChartType::ALL.len()).prop_map(|index| ChartType::ALL[index])
}

fn mounted_panel() -> Panel {
    let mut panel: Panel = ChartPanel::new(HeadlessControlHost::new(), ChartPanelConfig::default())
        .expect("panel");
    let mut container = HeadlessContainer::default();
    let _ = panel
        .mount(&mut container, NullRenderer::default)
        .expect("mount");
    panel
}

proptest! {
    #[test]
    fn state_and_controls_track_schema_across_switches(
        switches in prop::collection::vec(chart_type_strategy(), 1..12)
    ) {
        let mut panel = mounted_panel();
        for chart_type in switches {
            panel.set_chart_type(chart_type).expect("switch");

            let schema = OptionSchema::for_chart_type(chart_type);
            let state_keys: Vec<OptionKey> = panel.options().keys().collect();
            prop_assert_eq!(&state_keys, &schema.keys());

            let mut control_keys = panel.control_keys(ControlRegion::General);
            control_keys.extend(panel.control_keys(ControlRegion::TypeSpecific));
            prop_assert_eq!(&control_keys, &schema.keys());
            prop_assert_eq!(panel.controls().len(), schema.len());
        }
    }

    #[test]
    fn repeating_a_write_never_pushes_again(title in "[a-zA-Z0-9 ]{0,16}") {
        let mut panel = mounted_panel();
        let first = panel
            .set_option(OptionKey::Title, OptionValue::text(title.clone()))
            .expect("first write");
        let pushes = panel.renderer().expect("mounted").options_push_count;

        let second = panel
            .set_option(OptionKey::Title, OptionValue::text(title))
            .expect("second write");

        prop_assert_eq!(second, OptionsChange::Unchanged);
        prop_assert_eq!(panel.renderer().expect("mounted").options_push_count, pushes);
        prop_assert_eq!(first.is_changed(), pushes == 2);
    }

    #[test]
    fn title_survives_any_switch(title in "[a-z]{1,12}", target in chart_type_strategy()) {
        let mut panel = mounted_panel();
        panel
            .set_option(OptionKey::Title, OptionValue::text(title.clone()))
            .expect("title");
        panel.set_chart_type(target).expect("switch");

        prop_assert_eq!(panel.options().text(OptionKey::Title), Some(title.as_str()));
    }
}

#[test]
fn panel_subscribers_see_every_effective_change() {
    let mut panel = mounted_panel();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = panel.subscribe_options(move |change, state| {
        sink.borrow_mut().push((change.is_structural(), state.chart_type()));
    });

    panel.set_chart_type(ChartType::Pie).expect("switch");
    panel.set_chart_type(ChartType::Pie).expect("same type");
    panel
        .set_option(OptionKey::LegendPosition, OptionValue::text("left"))
        .expect("legend");
    assert!(panel.unsubscribe_options(id));
    panel.set_chart_type(ChartType::Bar).expect("switch back");

    assert_eq!(
        *seen.borrow(),
        vec![(true, ChartType::Pie), (false, ChartType::Pie)]
    );
}
