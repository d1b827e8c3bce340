use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use psum::{FenwickTree, PrefixArray};

fn bench_prefix_sums(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_sums");

    for n in [1_000usize, 100_000] {
        let values: Vec<i64> = (0..n as i64).map(|v| v % 97 - 48).collect();
        let ft = FenwickTree::from_values(&values).unwrap();
        let mut pa = PrefixArray::<i64>::new(n);
        for (i, &v) in values.iter().enumerate() {
            pa.update(i, v).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("fenwick_query", n), &n, |b, &n| {
            b.iter(|| {
                for i in (0..n).step_by(n / 100) {
                    black_box(ft.query(i).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("implicit_query", n), &n, |b, &n| {
            b.iter(|| {
                for i in (0..n).step_by(n / 100) {
                    black_box(pa.query(i).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("fenwick_update", n), &n, |b, &n| {
            let mut ft = ft.clone();
            b.iter(|| {
                for i in (0..n).step_by(n / 100) {
                    ft.update(black_box(i), 1).unwrap();
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("fenwick_build", n), &values, |b, values| {
            b.iter(|| black_box(FenwickTree::from_values(values).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_prefix_sums);
criterion_main!(benches);
