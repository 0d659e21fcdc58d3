#[macro_use]
extern crate criterion;
extern crate libexact;

use criterion::{black_box, Criterion};
use libexact::{poly, poly_gcd, Fp, Fraction, Polynomial};

/// (x - 1)(x + 2)(x - 3)(x + 4)(x - 5) and (x - 1)(x - 3)(x + 6)
fn fraction_inputs() -> (Polynomial<Fraction>, Polynomial<Fraction>) {
    let roots = |rs: &[i64]| {
        rs.iter()
            .fold(poly![1], |acc, &r| acc * poly![-r, 1])
    };
    (roots(&[1, -2, 3, -4, 5]), roots(&[1, 3, -6]))
}

fn finite_field_inputs() -> (Polynomial<Fp<10007>>, Polynomial<Fp<10007>>) {
    let p = |seed: u64, len: u64| -> Polynomial<Fp<10007>> {
        (0..len).map(|i| Fp::new(seed * i * i + 7 * i + 1)).collect()
    };
    (p(31, 24), p(17, 16))
}

fn bench_poly_mul(c: &mut Criterion) {
    let (a, b) = fraction_inputs();
    c.bench_function("poly_mul", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });
}

fn bench_poly_div_rem(c: &mut Criterion) {
    let (a, b) = fraction_inputs();
    c.bench_function("poly_div_rem", |bench| {
        bench.iter(|| black_box(&a).div_rem(black_box(&b)))
    });
}

fn bench_poly_gcd(c: &mut Criterion) {
    let (a, b) = fraction_inputs();
    c.bench_function("poly_gcd", |bench| {
        bench.iter(|| poly_gcd(black_box(&a), black_box(&b)))
    });
}

fn bench_poly_gcd_finite_field(c: &mut Criterion) {
    let (a, b) = finite_field_inputs();
    c.bench_function("poly_gcd_fp", |bench| {
        bench.iter(|| poly_gcd(black_box(&a), black_box(&b)))
    });
}

criterion_group!(
    poly_benches,
    bench_poly_mul,
    bench_poly_div_rem,
    bench_poly_gcd,
    bench_poly_gcd_finite_field
);
criterion_main!(poly_benches);
