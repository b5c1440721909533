// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification queue.
//!
//! Measures the performance of:
//! - Sustained insertion past capacity (eviction + fade + removal)
//! - Batch replacement with an oversized batch

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};
use toast_feed::notifications::{
    Controller, ControllerOptions, FeedUser, GeneratorOptions, NotificationRecord, Priority,
};

fn record(i: usize) -> NotificationRecord {
    NotificationRecord::new(
        FeedUser::new(format!("user {i}")),
        "liked your post",
        "12:00:00",
        Priority::ALL[i % Priority::ALL.len()],
    )
}

/// Benchmark inserting far more records than fit, ticking between inserts.
fn bench_insert_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("insert_tick_1000", |b| {
        b.iter_batched(
            || (0..1000).map(record).collect::<Vec<_>>(),
            |records| {
                let mut controller =
                    Controller::new(ControllerOptions::default(), GeneratorOptions::default());
                let t0 = Instant::now();
                for (i, r) in records.into_iter().enumerate() {
                    let now = t0 + Duration::from_millis(i as u64 * 50);
                    controller.tick(now);
                    controller.insert(r, now);
                }
                black_box(controller.len());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark replacing the queue with an oversized batch.
fn bench_replace_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_queue");

    group.bench_function("replace_all_500", |b| {
        let mut controller =
            Controller::new(ControllerOptions::default(), GeneratorOptions::default());
        b.iter_batched(
            || (0..500).map(record).collect::<Vec<_>>(),
            |batch| {
                controller.replace_all(batch, Instant::now());
                black_box(controller.len());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_insert_churn, bench_replace_all);
criterion_main!(benches);
