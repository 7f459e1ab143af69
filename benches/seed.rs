//! Benchmarks for mnemonic encoding and seed derivation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seedphrase::mnemonic::{create_seed, MnemonicEncoder};

fn bench_to_mnemonic(c: &mut Criterion) {
    let encoder = MnemonicEncoder::new("english").expect("english wordlist");
    let entropy = [0x7fu8; 32];

    c.bench_function("to_mnemonic_256", |b| {
        b.iter(|| encoder.to_mnemonic(black_box(&entropy)));
    });
}

fn bench_create_seed(c: &mut Criterion) {
    let phrase = "prefer judge blouse motor naive october legal labor exact sustain stuff direct";

    c.bench_function("create_seed", |b| {
        b.iter(|| create_seed(black_box(phrase), black_box("151515888")));
    });
}

criterion_group!(benches, bench_to_mnemonic, bench_create_seed);
criterion_main!(benches);
