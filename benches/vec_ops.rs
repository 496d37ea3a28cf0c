use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vec128::{F32x4, F64x2, I32x4};

const LANES: usize = 4096;

/// Deterministic pseudo-random fill; keeps runs comparable without pulling
/// rand into the hot path.
fn lcg_fill_i32(seed: u64, out: &mut [i32]) {
    let mut state = seed;
    for v in out.iter_mut() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        *v = (state >> 33) as i32;
    }
}

fn lcg_fill_f32(seed: u64, out: &mut [f32]) {
    let mut state = seed;
    for v in out.iter_mut() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        *v = ((state >> 40) as f32) / 256.0 - 32000.0;
    }
}

fn bench_int_arith(c: &mut Criterion) {
    let mut a = vec![0i32; LANES];
    let mut b = vec![0i32; LANES];
    lcg_fill_i32(0x1234_5678, &mut a);
    lcg_fill_i32(0x9ABC_DEF0, &mut b);

    let mut group = c.benchmark_group("i32x4");
    group.throughput(Throughput::Elements(LANES as u64));

    group.bench_function("mul_add", |bench| {
        bench.iter(|| {
            let mut acc = I32x4::zero();
            for (ca, cb) in a.chunks_exact(4).zip(b.chunks_exact(4)) {
                let va = I32x4::from_array([ca[0], ca[1], ca[2], ca[3]]);
                let vb = I32x4::from_array([cb[0], cb[1], cb[2], cb[3]]);
                acc = acc + va * vb;
            }
            black_box(acc.to_array())
        })
    });

    group.bench_function("compare_choose", |bench| {
        bench.iter(|| {
            let mut acc = I32x4::zero();
            for (ca, cb) in a.chunks_exact(4).zip(b.chunks_exact(4)) {
                let va = I32x4::from_array([ca[0], ca[1], ca[2], ca[3]]);
                let vb = I32x4::from_array([cb[0], cb[1], cb[2], cb[3]]);
                acc = acc + va.gt(vb).choose(va, vb);
            }
            black_box(acc.to_array())
        })
    });

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut a = vec![0i32; LANES];
    lcg_fill_i32(0xDEAD_BEEF, &mut a);

    let mut group = c.benchmark_group("shuffle");
    group.throughput(Throughput::Elements(LANES as u64));

    // A permutation that needs a multi-step sequence on aarch64.
    group.bench_function("reverse_4x32", |bench| {
        bench.iter(|| {
            let mut acc = I32x4::zero();
            for ca in a.chunks_exact(4) {
                let v = I32x4::from_array([ca[0], ca[1], ca[2], ca[3]]);
                acc = acc + v.shuffle::<0, 1, 2, 3>();
            }
            black_box(acc.to_array())
        })
    });

    group.bench_function("broadcast_lane2", |bench| {
        bench.iter(|| {
            let mut acc = I32x4::zero();
            for ca in a.chunks_exact(4) {
                let v = I32x4::from_array([ca[0], ca[1], ca[2], ca[3]]);
                acc = acc + v.shuffle::<2, 2, 2, 2>();
            }
            black_box(acc.to_array())
        })
    });

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut a = vec![0.0f32; LANES];
    lcg_fill_f32(0x0F0F_F0F0, &mut a);

    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(LANES as u64));

    group.bench_function("f32_nearest_i32", |bench| {
        bench.iter(|| {
            let mut acc = I32x4::zero();
            for ca in a.chunks_exact(4) {
                let v = F32x4::from_array([ca[0], ca[1], ca[2], ca[3]]);
                acc = acc + v.convert_nearest_i32x4();
            }
            black_box(acc.to_array())
        })
    });

    group.bench_function("f32_widen_f64", |bench| {
        bench.iter(|| {
            let mut acc = F64x2::zero();
            for ca in a.chunks_exact(4) {
                let v = F32x4::from_array([ca[0], ca[1], ca[2], ca[3]]);
                acc = acc + v.widen_f64x2();
            }
            black_box(acc.to_array())
        })
    });

    group.finish();
}

fn bench_safe_divide(c: &mut Criterion) {
    let mut a = vec![0.0f32; LANES];
    let mut b = vec![0.0f32; LANES];
    lcg_fill_f32(0x1111_2222, &mut a);
    lcg_fill_f32(0x3333_4444, &mut b);
    // Sprinkle zero divisors so the guard path is exercised.
    for v in b.iter_mut().step_by(17) {
        *v = 0.0;
    }

    let mut group = c.benchmark_group("safe_divide");
    group.throughput(Throughput::Elements(LANES as u64));

    group.bench_function("f32x4", |bench| {
        bench.iter(|| {
            let mut acc = F32x4::zero();
            for (ca, cb) in a.chunks_exact(4).zip(b.chunks_exact(4)) {
                let va = F32x4::from_array([ca[0], ca[1], ca[2], ca[3]]);
                let vb = F32x4::from_array([cb[0], cb[1], cb[2], cb[3]]);
                acc = acc + va.safe_divide(vb);
            }
            black_box(acc.to_array())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_int_arith,
    bench_shuffle,
    bench_convert,
    bench_safe_divide
);
criterion_main!(benches);
