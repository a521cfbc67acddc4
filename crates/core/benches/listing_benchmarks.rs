use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gestmat_core::{paginate, search_matches, PageRequest};

#[derive(Debug, Clone)]
struct Record {
    name: String,
    email: String,
}

fn synthetic_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| Record {
            name: format!("Agent {i}"),
            email: format!("agent.{i}@adjarra.bj"),
        })
        .collect()
}

fn bench_filter_then_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_then_paginate");

    for &size in &[100usize, 1_000, 10_000] {
        let records = synthetic_records(size);
        let request = PageRequest::new(Some(3), Some(15)).expect("valid page request");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| {
                let filtered: Vec<&Record> = records
                    .iter()
                    .filter(|r| search_matches(black_box("agent.1"), &[&r.name, &r.email]))
                    .collect();
                black_box(paginate(filtered, &request))
            });
        });
    }

    group.finish();
}

fn bench_paginate_only(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    let request = PageRequest::new(Some(42), Some(15)).expect("valid page request");

    c.bench_function("paginate_10k", |b| {
        b.iter(|| black_box(paginate(records.clone(), &request)));
    });
}

criterion_group!(benches, bench_filter_then_paginate, bench_paginate_only);
criterion_main!(benches);
