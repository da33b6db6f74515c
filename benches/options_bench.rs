use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use query_chart::api::{ChartPanel, ChartPanelConfig};
use query_chart::controls::{HeadlessContainer, HeadlessControlHost};
use query_chart::core::{
    ChartType, ColumnInfo, DbCellValue, OptionKey, OptionValue, ResultSetSummary, ResultSubset,
    RowDataMatrix,
};
use query_chart::render::NullRenderer;
use std::hint::black_box;

type Panel = ChartPanel<NullRenderer, HeadlessControlHost>;

fn mounted_panel() -> Panel {
    let mut panel: Panel = ChartPanel::new(HeadlessControlHost::new(), ChartPanelConfig::default())
        .expect("panel");
    let mut container = HeadlessContainer::default();
    let _ = panel
        .mount(&mut container, NullRenderer::default)
        .expect("mount");
    panel
}

fn bench_type_switch_cycle(c: &mut Criterion) {
    let mut panel = mounted_panel();

    c.bench_function("type_switch_cycle_all_types", |b| {
        b.iter(|| {
            for chart_type in ChartType::ALL {
                panel
                    .set_chart_type(black_box(chart_type))
                    .expect("switch should succeed");
            }
        })
    });
}

fn bench_cosmetic_write(c: &mut Criterion) {
    let mut panel = mounted_panel();
    let mut flip = false;

    c.bench_function("cosmetic_direction_toggle", |b| {
        b.iter(|| {
            flip = !flip;
            let direction = if flip { "horizontal" } else { "vertical" };
            panel
                .set_option(OptionKey::DataDirection, OptionValue::text(direction))
                .expect("write should succeed");
        })
    });
}

fn bench_matrix_from_result_10k(c: &mut Criterion) {
    let summary = ResultSetSummary {
        id: 0,
        batch_id: 0,
        row_count: 10_000,
        column_info: (0..8).map(|i| ColumnInfo::new(format!("col{i}"))).collect(),
    };
    let rows: Vec<Vec<DbCellValue>> = (0..10_000)
        .map(|row| {
            (0..8)
                .map(|col| {
                    if (row + col) % 13 == 0 {
                        DbCellValue::null()
                    } else {
                        DbCellValue::new((row * col).to_string())
                    }
                })
                .collect()
        })
        .collect();

    c.bench_function("matrix_from_result_10k_x8", |b| {
        b.iter_batched(
            || ResultSubset::new(rows.clone()),
            |subset| RowDataMatrix::from_result(black_box(&summary), subset),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_type_switch_cycle,
    bench_cosmetic_write,
    bench_matrix_from_result_10k
);
criterion_main!(benches);
