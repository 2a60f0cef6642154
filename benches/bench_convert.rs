use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use kapoio_unit::{BigInt, ConversionOptions, Denomination, from_wei, to_wei};

fn bench_to_wei_kappa(c: &mut Criterion) {
    c.bench_function("to_wei_kappa", |b| {
        b.iter(|| black_box(to_wei(black_box("123.456789"), Some("kappa")).unwrap()));
    });
}

fn bench_to_wei_integer(c: &mut Criterion) {
    c.bench_function("to_wei_integer", |b| {
        b.iter(|| black_box(to_wei(black_box("1000000"), Some("gwei")).unwrap()));
    });
}

fn bench_to_wei_large(c: &mut Criterion) {
    c.bench_function("to_wei_large", |b| {
        let amount = "123456789012345678901234567890.123456789012345678";
        b.iter(|| black_box(to_wei(black_box(amount), Some("kappa")).unwrap()));
    });
}

fn bench_from_wei_kappa(c: &mut Criterion) {
    c.bench_function("from_wei_kappa", |b| {
        let wei: BigInt = "123456789000000000000".parse().unwrap();
        b.iter(|| black_box(from_wei(&wei, Some("kappa"), ConversionOptions::new()).unwrap()));
    });
}

fn bench_from_wei_padded(c: &mut Criterion) {
    c.bench_function("from_wei_padded", |b| {
        let wei: BigInt = "123456789000000000000".parse().unwrap();
        let options = ConversionOptions::new().with_pad(true);
        b.iter(|| black_box(from_wei(&wei, Some("kappa"), options).unwrap()));
    });
}

fn bench_from_wei_commify(c: &mut Criterion) {
    c.bench_function("from_wei_commify", |b| {
        let wei: BigInt = "123456789012345678901234567890123456789".parse().unwrap();
        let options = ConversionOptions::new().with_commify(true);
        b.iter(|| black_box(from_wei(&wei, Some("kappa"), options).unwrap()));
    });
}

fn bench_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_gwei", |b| {
        b.iter(|| {
            let wei = to_wei(black_box("42.123456789"), Some("gwei")).unwrap();
            black_box(from_wei(wei, Some("gwei"), ConversionOptions::new()).unwrap())
        });
    });
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_unit", |b| {
        b.iter(|| black_box(Denomination::resolve(black_box(Some("Microkappa"))).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_to_wei_kappa,
    bench_to_wei_integer,
    bench_to_wei_large,
    bench_from_wei_kappa,
    bench_from_wei_padded,
    bench_from_wei_commify,
    bench_round_trip,
    bench_resolve,
);

criterion_main!(benches);
