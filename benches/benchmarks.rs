//! Performance benchmarks for the signature scheme and the proof protocol

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use elgamal_zkp::{
    run_challenge, sign, verify_signature, KeyPair, ProofParams, Prover, Verifier,
};
use num_bigint::BigUint;

fn benchmark_key_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_generation");

    for bits in [32u64, 64, 128].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bits), bits, |b, &bits| {
            b.iter(|| KeyPair::generate(bits).expect("keygen failed"));
        });
    }

    group.finish();
}

fn benchmark_signing(c: &mut Criterion) {
    let keypair = KeyPair::generate(128).expect("keygen failed");
    let message = BigUint::from(123_456_789u64);

    c.bench_function("sign_random_nonce", |b| {
        b.iter(|| sign(&keypair.private_key, black_box(&message), None).expect("signing failed"));
    });
}

fn benchmark_verification(c: &mut Criterion) {
    let keypair = KeyPair::generate(128).expect("keygen failed");
    let message = BigUint::from(123_456_789u64);
    let sig = sign(&keypair.private_key, &message, None).expect("signing failed");

    c.bench_function("verify_signature", |b| {
        b.iter(|| verify_signature(black_box(&sig), &keypair.public_key, &message));
    });
}

fn benchmark_challenge(c: &mut Criterion) {
    // p = 23, g = 5, y = 5^6 mod 23 = 8
    let params = ProofParams::new(
        BigUint::from(23u32),
        BigUint::from(5u32),
        BigUint::from(8u32),
    )
    .expect("invalid parameters");
    let prover = Prover::honest(params.clone(), BigUint::from(6u32)).expect("bad secret");
    let verifier = Verifier::new(params);

    let mut group = c.benchmark_group("challenge");

    for rounds in [1u32, 8, 32].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(rounds), rounds, |b, &rounds| {
            b.iter(|| run_challenge(&prover, &verifier, rounds).expect("challenge failed"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_key_generation,
    benchmark_signing,
    benchmark_verification,
    benchmark_challenge
);
criterion_main!(benches);
