// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for toast queue operations.
//!
//! Measures the performance of:
//! - Pushing a burst of notifications
//! - Dismissing from the middle of a full queue
//! - Expiring a full queue through the virtual clock

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_toasts::ui::notifications::{ManualScheduler, NotificationId, Queue, Severity};
use std::hint::black_box;
use std::time::Duration;

const BURST: usize = 50;

fn filled_queue() -> (Queue<ManualScheduler>, Vec<NotificationId>) {
    let mut queue = Queue::new(ManualScheduler::new());
    let ids = (0..BURST)
        .map(|n| queue.notify(format!("toast {n}"), Severity::Info))
        .collect();
    (queue, ids)
}

fn bench_push_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_operations");

    group.bench_function("push_burst", |b| {
        b.iter(|| {
            let (queue, _) = filled_queue();
            black_box(queue.len());
        });
    });

    group.finish();
}

fn bench_dismiss_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_operations");

    group.bench_function("dismiss_middle", |b| {
        b.iter_batched(
            filled_queue,
            |(mut queue, ids)| {
                black_box(queue.dismiss(ids[BURST / 2]));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_expire_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_operations");

    group.bench_function("expire_all", |b| {
        b.iter_batched(
            filled_queue,
            |(mut queue, _)| {
                black_box(queue.advance(Duration::from_millis(3000)));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_push_burst, bench_dismiss_middle, bench_expire_all);
criterion_main!(benches);
