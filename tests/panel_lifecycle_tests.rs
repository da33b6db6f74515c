use std::rc::Rc;

use futures::executor::block_on;
use query_chart::api::{ChartPanel, ChartPanelConfig};
use query_chart::controls::{HeadlessContainer, HeadlessControlHost, PanelArea};
use query_chart::core::{DataSourceRef, Viewport};
use query_chart::render::NullRenderer;
use query_chart::source::InMemoryRowProvider;
use query_chart::ChartError;

type Panel = ChartPanel<NullRenderer, HeadlessControlHost>;

fn panel() -> Panel {
    ChartPanel::new(HeadlessControlHost::new(), ChartPanelConfig::default()).expect("panel init")
}

#[test]
fn mount_creates_layout_and_renderer_once() {
    let mut panel = panel();
    let mut first = HeadlessContainer::default();
    let mut second = HeadlessContainer::default();
    let mut factory_calls = 0;

    let _ = panel
        .mount(&mut first, || {
            factory_calls += 1;
            NullRenderer::default()
        })
        .expect("first mount");
    let _ = panel
        .mount(&mut second, || {
            factory_calls += 1;
            NullRenderer::default()
        })
        .expect("second mount");

    assert_eq!(factory_calls, 1);
    assert!(panel.is_mounted());
    assert_eq!(first.attach_count, 1);
    assert_eq!(second.attach_count, 1);
    let layout = second.last_layout.expect("layout attached");
    assert_eq!(layout.areas, [PanelArea::Graph, PanelArea::Options]);
    assert_eq!(panel.renderer().expect("renderer").options_push_count, 1);
}

#[test]
fn layout_is_ignored_until_mounted() {
    let mut panel = panel();
    panel
        .layout(Viewport::new(640, 480))
        .expect("no-op while unmounted");

    let mut container = HeadlessContainer::default();
    let _ = panel
        .mount(&mut container, NullRenderer::default)
        .expect("mount");
    panel.layout(Viewport::new(640, 480)).expect("layout");

    assert_eq!(
        panel.renderer().and_then(|r| r.viewport),
        Some(Viewport::new(640, 480))
    );
}

#[test]
fn zero_sized_layout_is_rejected() {
    let mut panel = panel();
    let mut container = HeadlessContainer::default();
    let _ = panel
        .mount(&mut container, NullRenderer::default)
        .expect("mount");

    let err = panel.layout(Viewport::new(0, 0)).expect_err("invalid size");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 0 }));
    assert!(panel.renderer().and_then(|r| r.viewport).is_none());
}

#[test]
fn mount_keeps_fetch_already_in_flight() {
    let mut panel = panel();
    let mut provider = InMemoryRowProvider::new();
    let reference = provider.add_result_set(0, &["value"], vec![vec!["1"]]);
    let _ = panel.attach_source(Rc::new(provider));
    let in_flight = panel.chart(reference).expect("fetch issued");

    let mut container = HeadlessContainer::default();
    let retry = panel
        .mount(&mut container, NullRenderer::default)
        .expect("mount");

    assert!(retry.is_none());
    assert!(panel.complete_fetch(block_on(in_flight.execute())).expect("complete"));
    assert_eq!(
        panel.renderer().and_then(|r| r.data.as_ref()).map(|d| d.shape()),
        Some((1, 1))
    );
}

#[test]
fn remount_while_fetch_in_flight_still_publishes() {
    let mut panel = panel();
    let mut first = HeadlessContainer::default();
    let _ = panel
        .mount(&mut first, NullRenderer::default)
        .expect("mount");
    let mut provider = InMemoryRowProvider::new();
    let reference = provider.add_result_set(0, &["a", "b"], vec![vec!["1", "2"]]);
    let _ = panel.attach_source(Rc::new(provider));
    let in_flight = panel.chart(reference).expect("fetch issued");

    let mut second = HeadlessContainer::default();
    let _ = panel
        .mount(&mut second, NullRenderer::default)
        .expect("remount");
    let _ = panel
        .mount(&mut first, NullRenderer::default)
        .expect("remount back");

    assert!(panel.complete_fetch(block_on(in_flight.execute())).expect("complete"));
    assert_eq!(panel.data().map(|d| d.shape()), Some((2, 1)));
    assert_eq!(panel.renderer().expect("mounted").data_push_count, 1);
}

#[test]
fn mount_retries_fetch_after_failed_attempt() {
    let mut panel = panel();
    let mut failing = InMemoryRowProvider::new();
    let reference = failing.add_result_set(0, &["value"], vec![vec!["1"]]);
    failing.fail_with("session busy");
    let _ = panel.attach_source(Rc::new(failing));
    let failed = panel.chart(reference).expect("fetch issued");
    let failed_generation = failed.generation();
    assert!(panel.complete_fetch(block_on(failed.execute())).is_err());

    let mut container = HeadlessContainer::default();
    let retry = panel
        .mount(&mut container, NullRenderer::default)
        .expect("mount")
        .expect("fetch retried on mount");

    assert_eq!(retry.reference(), reference);
    assert!(retry.generation() > failed_generation);
}

#[test]
fn unknown_selection_leaves_nothing_to_fetch_on_mount() {
    let mut panel = panel();
    let _ = panel.attach_source(Rc::new(InMemoryRowProvider::new()));
    assert!(panel.chart(DataSourceRef::new(3, 0)).is_none());

    let mut container = HeadlessContainer::default();
    let fetch = panel
        .mount(&mut container, NullRenderer::default)
        .expect("mount");

    assert!(fetch.is_none());
    assert!(panel.renderer().and_then(|r| r.data.as_ref()).is_none());
}
