//! Benchmarks for this crate's [`SkipList`].

use criterion::{AxisScale, BenchmarkId, Criterion, PlotConfiguration, black_box};
use rand::{Rng, SeedableRng, rngs::StdRng};
use sentinel_skiplist::SkipList;

/// Benchmarking sizes.
const SIZES: [usize; 4] = [10, 100, 1000, 10_000];

/// Levels used for every list; enough for the largest size.
const DEPTH: usize = 14;

fn filled(rng: &mut StdRng, size: usize) -> SkipList {
    let mut sl = SkipList::with_seed(DEPTH, 0x1234_abcd).expect("depth is non-zero");
    while sl.len() < size {
        sl.insert(rng.random_range(-1_000_000..1_000_000));
    }
    sl
}

/// Benchmarking insertion followed by removal of a fresh key.
#[inline]
pub fn insert_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Insert/Delete");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut sl = filled(&mut rng, size);

            b.iter(|| {
                let key = rng.random_range(-1_000_000..1_000_000);
                if sl.insert(key) {
                    sl.delete(key);
                }
            });
        });
    }
}

/// Benchmarking membership queries.
#[inline]
pub fn contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Contains");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for size in SIZES {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let sl = filled(&mut rng, size);
            let keys: Vec<i32> = std::iter::repeat_with(|| rng.random_range(-1_000_000..1_000_000))
                .take(10)
                .collect();

            b.iter(|| {
                for &key in &keys {
                    black_box(sl.contains(key));
                }
            });
        });
    }
}

/// Benchmarking the effect of depth on a fixed-size list.
#[inline]
pub fn depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("SkipList Depth");

    for depth in [1, 2, 4, 8, 14] {
        group.bench_function(BenchmarkId::from_parameter(depth), |b| {
            let mut rng = StdRng::seed_from_u64(0x1234_abcd);
            let mut sl = SkipList::with_seed(depth, 0x1234_abcd).expect("depth is non-zero");
            sl.extend(std::iter::repeat_with(|| rng.random_range(-10_000..10_000)).take(1000));

            b.iter(|| black_box(sl.contains(rng.random_range(-10_000..10_000))));
        });
    }
}

/// Run all benchmarks.
#[inline]
pub fn benchmark(c: &mut Criterion) {
    insert_delete(c);
    contains(c);
    depth(c);
}
