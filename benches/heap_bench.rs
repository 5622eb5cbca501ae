//! Push/pop throughput benchmarks
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heap_priority_queue::{Heap, HeapPriorityQueue, MinimumHeap};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Pseudo-random keys with a fixed seed so runs are comparable
fn keys(n: usize) -> Vec<u64> {
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % 1_000_000
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &SIZES {
        let input = keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut heap = MinimumHeap::with_capacity(input.len());
                for &k in input {
                    heap.insert(k, k);
                }
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_then_pop_all");
    for &n in &SIZES {
        let input = keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut queue = HeapPriorityQueue::with_capacity(input.len());
                for &k in input {
                    queue.insert_with_priority(k, ());
                }
                let mut sum = 0u64;
                while let Ok((k, ())) = queue.pop_with_priority() {
                    sum = sum.wrapping_add(k);
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state");
    for &n in &SIZES {
        let input = keys(n * 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut queue = HeapPriorityQueue::with_capacity(n);
                for &k in &input[..n] {
                    queue.insert_with_priority(k, k);
                }
                for &k in &input[n..] {
                    queue.insert_with_priority(k, k);
                    black_box(queue.pop().ok());
                }
                black_box(queue.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_drain, bench_steady_state);
criterion_main!(benches);
