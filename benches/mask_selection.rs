use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qr_symbol::{assemble, ECLevel};

fn payload(len: usize) -> Vec<bool> {
    let mut state = 0x2545_F491u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state & 1 == 1
        })
        .collect()
}

fn bench_assemble(c: &mut Criterion) {
    let v1_bits = payload(208);
    c.bench_function("assemble_v1_m", |b| {
        b.iter(|| assemble(black_box(&v1_bits), 1, ECLevel::M).unwrap())
    });

    let v6_bits = payload(1000);
    c.bench_function("assemble_v6_h", |b| {
        b.iter(|| assemble(black_box(&v6_bits), 6, ECLevel::H).unwrap())
    });
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
