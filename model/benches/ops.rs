use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use model::{Granularity, Model, MontgomeryParams, ShiftDirection, VecReg};

const Q: u32 = 8380417;

fn lane_ops(c: &mut Criterion) {
    let m: Model = Model::new();
    let a: VecReg = VecReg::from_fn(|i| 0x9e3779b9u32.wrapping_mul(i as u32 + 1));
    let b: VecReg = VecReg::from_fn(|i| 0x85ebca6bu32.wrapping_mul(i as u32 + 3));
    let params: MontgomeryParams = MontgomeryParams::new(Q).unwrap();

    let mut group = c.benchmark_group("lane_ops");
    group.bench_function("addv", |bch| bch.iter(|| m.addv(black_box(a), black_box(b))));
    group.bench_function("addvm", |bch| {
        bch.iter(|| m.addvm(black_box(a), black_box(b), Q))
    });
    group.bench_function("mulv", |bch| bch.iter(|| m.mulv(black_box(a), black_box(b))));
    group.bench_function("mulvm", |bch| {
        bch.iter(|| m.mulvm(black_box(a), black_box(b), Q, params).unwrap())
    });
    group.bench_function("mont_mulv", |bch| {
        bch.iter(|| m.mont_mulv(black_box(a), black_box(b), Q, params).unwrap())
    });
    group.finish();
}

fn reg_ops(c: &mut Criterion) {
    let m: Model = Model::new();
    let a: VecReg = VecReg::from_fn(|i| 0x9e3779b9u32.wrapping_mul(i as u32 + 1));
    let b: VecReg = VecReg::from_fn(|i| 0x85ebca6bu32.wrapping_mul(i as u32 + 3));

    let mut group = c.benchmark_group("reg_ops");
    for amount in [1usize, 32, 100, 255] {
        group.bench_with_input(BenchmarkId::new("shift_right", amount), &amount, |bch, &k| {
            bch.iter(|| m.shift(black_box(a), k, ShiftDirection::Right).unwrap())
        });
    }
    for g in [Granularity::G32, Granularity::G64, Granularity::G128] {
        group.bench_with_input(BenchmarkId::new("trn1", g.bits()), &g, |bch, &g| {
            bch.iter(|| m.trn1(black_box(a), black_box(b), g))
        });
    }
    for w in [13usize, 24, 32] {
        group.bench_with_input(BenchmarkId::new("pack", w), &w, |bch, &w| {
            bch.iter(|| m.pack(black_box(a), w).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, lane_ops, reg_ops);
criterion_main!(benches);
