use std::rc::Rc;

use futures::executor::block_on;
use query_chart::api::{ChartPanel, ChartPanelConfig, PanelSnapshot};
use query_chart::controls::{ControlRegion, HeadlessContainer, HeadlessControlHost};
use query_chart::core::{ChartType, OptionKey, OptionValue};
use query_chart::render::NullRenderer;
use query_chart::source::InMemoryRowProvider;

type Panel = ChartPanel<NullRenderer, HeadlessControlHost>;

fn populated_panel() -> Panel {
    let mut panel: Panel = ChartPanel::new(
        HeadlessControlHost::new(),
        ChartPanelConfig::new().with_initial_chart_type(ChartType::Line),
    )
    .expect("panel init");
    let mut provider = InMemoryRowProvider::new();
    let reference = provider.add_result_set(0, &["x", "y"], vec![vec!["1", "2"], vec!["3", "4"]]);
    let _ = panel.attach_source(Rc::new(provider));
    let mut container = HeadlessContainer::default();
    let _ = panel
        .mount(&mut container, NullRenderer::default)
        .expect("mount");
    assert!(block_on(panel.chart_and_wait(reference)).expect("chart"));
    panel
        .set_option(OptionKey::Title, OptionValue::text("Trend"))
        .expect("title");
    panel
        .set_option(OptionKey::YAxisMax, OptionValue::number(40.0))
        .expect("y max");
    panel
}

#[test]
fn snapshot_reflects_panel_state() {
    let snapshot = populated_panel().snapshot();

    assert_eq!(snapshot.chart_type, ChartType::Line);
    assert_eq!(snapshot.options.text(OptionKey::Title), Some("Trend"));
    assert_eq!(snapshot.data_shape, Some((2, 2)));
    assert!(snapshot.mounted);
    assert_eq!(snapshot.controls.len(), 10);
    let hidden: Vec<_> = snapshot
        .controls
        .iter()
        .filter(|control| !control.visible)
        .map(|control| control.key)
        .collect();
    assert_eq!(hidden, vec![OptionKey::LabelFirstColumn]);
    assert!(
        snapshot
            .controls
            .iter()
            .take(2)
            .all(|control| control.region == ControlRegion::General)
    );
}

#[test]
fn snapshot_contract_round_trips() {
    let panel = populated_panel();
    let json = panel.snapshot_json_contract_v1_pretty().expect("serialize");

    assert!(json.contains("\"schema_version\": 1"));
    let parsed = PanelSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, panel.snapshot());
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = populated_panel().snapshot();
    let bare = serde_json::to_string(&snapshot).expect("serialize");

    let parsed = PanelSnapshot::from_json_compat_str(&bare).expect("parse");
    assert_eq!(parsed.options, snapshot.options);
}

#[test]
fn unsupported_contract_version_is_rejected() {
    let snapshot = populated_panel().snapshot();
    let payload = serde_json::json!({ "schema_version": 9, "snapshot": snapshot });

    assert!(PanelSnapshot::from_json_compat_str(&payload.to_string()).is_err());
}
