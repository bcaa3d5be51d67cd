use criterion::{criterion_group, criterion_main, Criterion};
use pe254::{sum_sg, sum_sg_mod, sum_sg_mod_checked, PrefixTable};

const MOD: u64 = 1_000_000_000_000_000;

fn run_all_benchmarks(c: &mut Criterion) {
    let table = PrefixTable::new();

    let mut group_mod = c.benchmark_group("sum_sg_mod");
    group_mod.bench_function("n_1000", |b| b.iter(|| sum_sg_mod(&table, 1_000, MOD)));
    group_mod.bench_function("n_10000", |b| b.iter(|| sum_sg_mod(&table, 10_000, MOD)));
    group_mod.sample_size(10);
    group_mod.bench_function("n_100000", |b| b.iter(|| sum_sg_mod(&table, 100_000, MOD)));
    group_mod.finish();

    let mut group_paths = c.benchmark_group("fast_vs_checked_n_2000");
    group_paths.bench_function("fast", |b| b.iter(|| sum_sg_mod(&table, 2_000, MOD)));
    group_paths.bench_function("checked", |b| {
        b.iter(|| sum_sg_mod_checked(&table, 2_000, MOD))
    });
    group_paths.bench_function("naive", |b| {
        b.iter(|| sum_sg(&table, 2_000).map(|s| s.rem(MOD)))
    });
    group_paths.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
