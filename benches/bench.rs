use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use pivot_sort::{recursive, work_stack};
use sort_test_tools::{patterns, Sort};

#[inline(never)]
fn bench_sort<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    bench_name: &str,
    sort_func: impl Fn(Vec<T>) -> Vec<T>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(
        &format!("{bench_name}-{transform_name}-{pattern_name}-{test_size}"),
        |b| {
            b.iter_batched(
                || transform(pattern_provider(test_size)),
                |test_data| sort_func(black_box(test_data)),
                batch_size,
            )
        },
    );
}

fn measure_comp_count(
    name: &str,
    test_size: usize,
    instrumented_sort_func: impl Fn(),
    comp_count: Rc<RefCell<u64>>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_size <= 20 {
        100_000
    } else if test_size < 1_000 {
        3000
    } else {
        100
    };

    *comp_count.borrow_mut() = 0;
    for _ in 0..run_count {
        instrumented_sort_func();
    }

    let total = *comp_count.borrow() / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

#[inline(never)]
fn bench_impl<T: Ord + std::fmt::Debug, S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    if test_size > S::max_len() {
        return;
    }

    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        if transform_name == "i32" {
            let name = format!("{bench_name}-comp-{transform_name}-{pattern_name}-{test_size}");
            // Instrument via sort_by to ensure the type properties such as Copy of the type
            // that is being sorted doesn't change.
            let comp_count = Rc::new(RefCell::new(0u64));
            let comp_count_copy = comp_count.clone();
            let instrumented_sort_func = || {
                let test_data = transform(pattern_provider(test_size));
                black_box(S::sort_by(black_box(test_data), |a, b| {
                    *comp_count_copy.borrow_mut() += 1;
                    a.cmp(b)
                }));
            };
            measure_comp_count(&name, test_size, instrumented_sort_func, comp_count);
        }
    } else {
        bench_sort(
            c,
            test_size,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

fn bench_patterns<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_size: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_d20", |len| patterns::random_uniform(len, 0..20)),
        ("random_p5", |len| patterns::random_sorted(len, 95.0)),
        ("random_z1", |len| patterns::random_zipf(len, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        // The fixed pivot makes the sorted patterns quadratic, keep them to the smaller sizes.
        let is_quadratic = matches!(*pattern_name, "ascending" | "descending");
        if is_quadratic && test_size > 10_000 {
            continue;
        }

        bench_impl::<T, recursive::SortImpl>(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );

        bench_impl::<T, work_stack::SortImpl>(
            c,
            test_size,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    // Distribute points somewhat evenly up to 100k in log10 space.
    let test_sizes = [0, 1, 2, 3, 5, 10, 20, 50, 100, 500, 1_000, 2_048, 10_000, 100_000];

    patterns::use_random_seed_each_time();

    for test_size in test_sizes {
        bench_patterns(c, test_size, "i32", |values| values);

        bench_patterns(c, test_size, "u64", |values| {
            values
                .into_iter()
                .map(|val| {
                    // Extends the value into the 64 bit range,
                    // while preserving input order.
                    let x = ((val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.checked_mul(i32::MAX as u64).unwrap()
                })
                .collect()
        });

        bench_patterns(c, test_size, "string", |values| {
            values
                .into_iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect::<Vec<_>>()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
