// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use toast_stack::toast::{layout, CardInput, LayoutParams, ManualClock, ToastRequest, ToastStore};

fn cards(count: usize) -> Vec<CardInput> {
    let store = ToastStore::with_clock(ManualClock::new());
    for i in 0..count {
        let id = store.add(ToastRequest::success(format!("toast {i}")));
        if i % 2 == 0 {
            store.set_measured_height(id, 40.0 + i as f32);
        }
    }
    store
        .snapshot()
        .into_iter()
        .map(|toast| CardInput {
            id: toast.id,
            measured_height: toast.measured_height,
            shown: true,
        })
        .collect()
}

fn stack_layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_layout");
    let params = LayoutParams::default();

    for count in [3_usize, 20, 200] {
        let input = cards(count);
        for expanded in [false, true] {
            let label = if expanded { "expanded" } else { "collapsed" };
            group.bench_with_input(BenchmarkId::new(label, count), &input, |b, input| {
                b.iter(|| black_box(layout::compute(black_box(input), expanded, &params)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, stack_layout_benchmark);
criterion_main!(benches);
