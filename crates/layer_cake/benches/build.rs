// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![allow(missing_docs, reason = "Benchmarks don't require documentation")]

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use layer_cake::{Cake, Delegate, Layer};

trait Counter {
    fn count(&self, value: u64) -> u64;
}

struct Zero;

impl Counter for Zero {
    fn count(&self, value: u64) -> u64 {
        value
    }
}

#[derive(Default)]
struct Increment {
    next: Delegate<dyn Counter>,
}

impl Counter for Increment {
    fn count(&self, value: u64) -> u64 {
        self.next.count(value) + 1
    }
}

impl Layer<dyn Counter> for Increment {
    fn delegate_slot(&mut self) -> Option<&mut Delegate<dyn Counter>> {
        Some(&mut self.next)
    }

    fn into_service(self: Box<Self>) -> Arc<dyn Counter> {
        Arc::new(*self)
    }
}

fn cake(layers: usize) -> Cake<dyn Counter> {
    (0..layers).fold(Cake::<dyn Counter>::new(Arc::new(Zero)), |cake, i| {
        cake.layer_if_with(i % 4 != 3, Increment::default)
    })
}

fn entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for layers in [1, 8, 64] {
        group.bench_function(format!("wire_{layers}"), |b| {
            b.iter(|| black_box(cake(layers).build()));
        });
    }

    group.finish();

    let mut group = c.benchmark_group("call");

    let direct: Arc<dyn Counter> = Arc::new(Zero);
    group.bench_function("direct", |b| {
        b.iter(|| black_box(direct.count(black_box(1))));
    });

    for layers in [1, 8, 64] {
        let Ok(composite) = cake(layers).build() else {
            return;
        };

        group.bench_function(format!("through_{layers}"), |b| {
            b.iter(|| black_box(composite.count(black_box(1))));
        });
    }

    group.finish();
}

criterion_group!(benches, entry);
criterion_main!(benches);
