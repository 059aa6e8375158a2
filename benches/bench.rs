use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use classic_sorts::Algorithm;
use sort_test_tools::patterns;

const TEST_LENS: [usize; 3] = [10, 100, 1_000];

fn should_run_benchmark(name: &str) -> bool {
    env::var("BENCH_FILTER").map_or(true, |filter| name.contains(&filter))
}

fn measure_comp_count(
    name: &str,
    test_len: usize,
    algorithm: Algorithm,
    pattern: fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 { 10_000 } else { 100 };

    let mut comp_count = 0u64;

    for _ in 0..run_count {
        let mut test_data = pattern(test_len);
        algorithm.sort_by(black_box(&mut test_data), |a, b| {
            comp_count += 1;
            a.cmp(b)
        });
    }

    // If there is on average less than a single comparison this will be wrong.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

fn bench_algorithm(c: &mut Criterion, algorithm: Algorithm) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    let bench_name = algorithm.name();

    for test_len in TEST_LENS {
        for (pattern_name, pattern) in &pattern_providers {
            let name = format!("{bench_name}-{pattern_name}-{test_len}");
            if !should_run_benchmark(&name) {
                continue;
            }

            if env::var("MEASURE_COMP").is_ok() {
                measure_comp_count(&name, test_len, algorithm, *pattern);
                continue;
            }

            let batch_size = if test_len > 30 {
                BatchSize::LargeInput
            } else {
                BatchSize::SmallInput
            };

            c.bench_function(&name, |b| {
                b.iter_batched(
                    || pattern(test_len),
                    |mut test_data| algorithm.sort(black_box(&mut test_data)),
                    batch_size,
                )
            });
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        bench_algorithm(c, algorithm);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
