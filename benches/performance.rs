use calgrid::controller::{reduce, CalendarAction, CalendarRuntime, CalendarState};
use calgrid::host::NoDataSource;
use calgrid::layout::GridLayout;
use calgrid::types::{CalendarConfig, GridCoordinate};
use calgrid::MonthGrid;
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn test_config() -> CalendarConfig {
    let today = NaiveDate::from_ymd_opt(2019, 3, 26).unwrap();
    CalendarConfig::new(2018, 10, today)
}

fn test_layout() -> GridLayout {
    GridLayout::new(350.0, 280.0).unwrap()
}

/// Benchmark month grid construction for different spans
fn bench_grid_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_build");

    group.bench_function("ten_years", |b| {
        b.iter(|| MonthGrid::build(black_box(2018), black_box(10)))
    });

    group.bench_function("hundred_years", |b| {
        b.iter(|| MonthGrid::build(black_box(1950), black_box(100)))
    });

    group.finish();
}

/// Benchmark reducer transitions
fn bench_reducer(c: &mut Criterion) {
    let grid = MonthGrid::build(2018, 10).unwrap();
    let layout = test_layout();
    let mut state = CalendarState::initial(&grid, &layout, &test_config()).unwrap();
    state.is_paging_enabled = true;

    let mut group = c.benchmark_group("reducer");

    group.bench_function("drag_end_paging", |b| {
        let action = CalendarAction::DragEnded {
            target_offset_y: layout.section_offset(60),
            velocity_y: 2.0,
        };
        b.iter(|| reduce(black_box(state), black_box(&action), &grid, &layout))
    });

    group.bench_function("scrolled_frame", |b| {
        let action = CalendarAction::Scrolled {
            offset_y: layout.section_offset(30) + 17.0,
        };
        b.iter(|| reduce(black_box(state), black_box(&action), &grid, &layout))
    });

    group.bench_function("tap_cell", |b| {
        let action = CalendarAction::TapCell(GridCoordinate::new(14, 3));
        b.iter(|| reduce(black_box(state), black_box(&action), &grid, &layout))
    });

    group.finish();
}

/// Benchmark runtime dispatch and view building
fn bench_runtime(c: &mut Criterion) {
    let mut group = c.benchmark_group("runtime");

    group.bench_function("dispatch_drag_end", |b| {
        let mut runtime = CalendarRuntime::new(&test_config(), test_layout()).unwrap();
        runtime.dispatch(CalendarAction::SetPagingEnabled(true));
        let height = runtime.layout().section_height();
        let mut section = 0usize;
        b.iter(|| {
            section = (section + 1) % 121;
            runtime.dispatch(black_box(CalendarAction::DragEnded {
                target_offset_y: section as f64 * height,
                velocity_y: 1.5,
            }))
        })
    });

    group.bench_function("view_cells_one_section", |b| {
        let runtime = CalendarRuntime::new(&test_config(), test_layout()).unwrap();
        b.iter(|| {
            let view = runtime.view(&NoDataSource);
            let count = view.item_count(14).unwrap();
            (0..count)
                .map(|item| view.cell(GridCoordinate::new(14, item)).unwrap())
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_grid_build, bench_reducer, bench_runtime);
criterion_main!(benches);
