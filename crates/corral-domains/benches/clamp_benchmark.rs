// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use corral_domains::{DomainSpec, FiniteNumber, Int8, SafeInt};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const BATCH: usize = 4096;

fn raw_batch_i64(seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..BATCH).map(|_| rng.random::<i64>()).collect()
}

fn raw_batch_f64(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..BATCH).map(|_| rng.random::<f64>() * 1e300).collect()
}

fn bench_clamp(c: &mut Criterion) {
    let raws = raw_batch_i64(1);
    let mut group = c.benchmark_group("clamp");
    group.throughput(Throughput::Elements(BATCH as u64));
    group.bench_function("int8", |b| {
        b.iter(|| {
            for &raw in &raws {
                black_box(Int8::clamp(black_box(raw)));
            }
        })
    });
    group.bench_function("safe_int", |b| {
        b.iter(|| {
            for &raw in &raws {
                black_box(SafeInt::clamp(black_box(raw)));
            }
        })
    });
    group.finish();
}

fn bench_arith(c: &mut Criterion) {
    let lhs: Vec<_> = raw_batch_i64(2).iter().map(|&r| SafeInt::clamp(r)).collect();
    let rhs: Vec<_> = raw_batch_i64(3).iter().map(|&r| SafeInt::clamp(r)).collect();
    let flhs: Vec<_> = raw_batch_f64(4)
        .iter()
        .map(|&r| FiniteNumber::clamp(r))
        .collect();

    let mut group = c.benchmark_group("arith");
    group.throughput(Throughput::Elements(BATCH as u64));
    group.bench_function("safe_int_mul", |b| {
        b.iter(|| {
            for (&x, &y) in lhs.iter().zip(&rhs) {
                black_box(x.mul(y));
            }
        })
    });
    group.bench_function("safe_int_add", |b| {
        b.iter(|| {
            for (&x, &y) in lhs.iter().zip(&rhs) {
                black_box(x.add(y));
            }
        })
    });
    group.bench_function("finite_number_mul", |b| {
        b.iter(|| {
            for (&x, &y) in flhs.iter().zip(flhs.iter().rev()) {
                black_box(x.mul(y));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_clamp, bench_arith);
criterion_main!(benches);
