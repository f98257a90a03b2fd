// Copyright 2025 the Spanscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use spanscope_event_state::wheel::{Modifiers, WheelInput};
use spanscope_measure::{ElementMetrics, GlyphMetrics};
use spanscope_view::{
    ColumnKind, ColumnRef, ElementId, Extent, NodeKey, NodeRef, SpanRef, SpanTextRef, ViewConfig,
    ViewManager,
};

const ORIGIN: f64 = 1_700_000_000_000.0;
const TIMELINE: ElementId = ElementId(1);

struct Fixed;

impl ElementMetrics<ElementId> for Fixed {
    fn element_width(&self, element: &ElementId) -> Option<f64> {
        Some(200.0 + (element.0 % 97) as f64 * 4.0)
    }
}

impl GlyphMetrics for Fixed {
    fn glyph_advance(&self, _: char) -> f64 {
        7.0
    }
}

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// A manager with `rows` rendered rows over a one minute trace.
fn populated(rows: usize) -> ViewManager<Fixed> {
    let mut view = ViewManager::new(0.4, 0.6, ViewConfig::default(), Fixed).unwrap();
    view.initialize_trace_space(ORIGIN, 60_000.0, 1.0).unwrap();
    view.initialize_physical_space(1_600.0, 900.0).unwrap();
    for slot in 0..120 {
        view.register_timeline_tick_ref(slot, Some(ElementId(10_000 + slot as u64)));
    }

    let mut rng = Lcg(0xdecaf);
    for slot in 0..rows {
        let base = 100 + slot as u64 * 8;
        let space = Extent::new(ORIGIN + rng.next_f64() * 55_000.0, rng.next_f64() * 5_000.0);
        let node = NodeRef::new(NodeKey(slot as u64), slot % 12, space);
        view.register_column_ref(
            ColumnKind::List,
            slot,
            Some(ColumnRef {
                element: ElementId(base),
                content: Some(ElementId(base + 1)),
                node: node.clone(),
            }),
        );
        view.register_column_ref(
            ColumnKind::SpanList,
            slot,
            Some(ColumnRef {
                element: if slot == 0 { TIMELINE } else { ElementId(base + 2) },
                content: None,
                node,
            }),
        );
        view.register_span_bar_ref(slot, Some(SpanRef { element: ElementId(base + 3), space }));
        view.register_arrow_ref(slot, Some(SpanRef { element: ElementId(base + 4), space }));
        view.register_span_text_ref(
            slot,
            Some(SpanTextRef {
                element: ElementId(base + 5),
                text: "GET /api/0/organizations/{organization_slug}/events/",
                space,
            }),
        );
    }
    view.tick(0.0);
    view
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("view/draw");
    for rows in [40, 200] {
        group.bench_function(format!("{rows}_rows"), |b| {
            let mut view = populated(rows);
            b.iter(|| black_box(view.draw().span_bars.len()));
        });
    }
    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    c.bench_function("view/wheel_zoom_and_pan", |b| {
        b.iter_batched(
            || populated(40),
            |mut view| {
                for i in 0..32 {
                    let zoom = WheelInput::new(Vec2::new(0.0, -4.0), Point::new(800.0, 0.0))
                        .with_modifiers(Modifiers::META);
                    view.route_wheel(TIMELINE, zoom);
                    let dx = if i % 2 == 0 { 30.0 } else { -12.0 };
                    let pan = WheelInput::new(Vec2::new(dx, 0.0), Point::ZERO);
                    view.route_wheel(TIMELINE, pan);
                }
                black_box(*view.trace_view())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_zoom_animation(c: &mut Criterion) {
    c.bench_function("view/zoom_into_span_frames", |b| {
        b.iter_batched(
            || populated(40),
            |mut view| {
                view.on_zoom_into_space(Extent::new(ORIGIN + 12_000.0, 250.0));
                let mut now = 0.0;
                while view.tick(now) {
                    now += 16.0;
                }
                black_box(*view.trace_view())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_draw, bench_wheel, bench_zoom_animation);
criterion_main!(benches);
