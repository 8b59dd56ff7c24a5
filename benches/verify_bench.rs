// Benchmark: proof verification and claim-ledger marking.
//
// Usage:
//   cargo bench --bench verify_bench
//
// Notes:
// - Trees are built once per size; only `verify_claim` is timed.
// - Ledger groups mark N consecutive indices into a fresh ledger per
//   iteration, so the bitmap's word reuse shows up against the mapping.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use merkle_airdrop::hash::Digest32;
use merkle_airdrop::merkle::{hash_sorted_pair, leaf_hash, verify_claim};
use merkle_airdrop::{Address, BitmapLedger, ClaimLedger, MappingLedger, U256};

/// Allowlist sizes (leaves).
const SIZES: &[usize] = &[16, 1024, 65_536];

/// Marks per ledger iteration.
const MARKS: &[u64] = &[256, 4096];

// ---- helpers ------------------------------------------------------------------

/// Layers bottom-up, sorted pairs, unpaired node promoted.
fn build_layers(n: usize) -> (Vec<Address>, Vec<Vec<Digest32>>) {
    let accounts: Vec<Address> = (0..n as u64).map(Address::from_low_u64).collect();
    let leaves = accounts
        .iter()
        .enumerate()
        .map(|(i, a)| leaf_hash(a, U256::from(i as u64)))
        .collect();

    let mut layers: Vec<Vec<Digest32>> = vec![leaves];
    while let Some(prev) = layers.last().filter(|l| l.len() > 1) {
        let next = prev
            .chunks(2)
            .map(|p| if p.len() == 2 { hash_sorted_pair(&p[0], &p[1]) } else { p[0] })
            .collect();
        layers.push(next);
    }
    (accounts, layers)
}

fn proof_for(layers: &[Vec<Digest32>], mut i: usize) -> Vec<Digest32> {
    let mut proof = Vec::new();
    for layer in &layers[..layers.len() - 1] {
        if let Some(s) = layer.get(i ^ 1) {
            proof.push(*s);
        }
        i /= 2;
    }
    proof
}

// ---- benches ------------------------------------------------------------------

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify_claim");
    for &n in SIZES {
        let (accounts, layers) = build_layers(n);
        let root = layers[layers.len() - 1][0];
        let i = n / 2;
        let proof = proof_for(&layers, i);
        let index = U256::from(i as u64);

        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("{n}_leaves"), |b| {
            b.iter(|| verify_claim(black_box(&accounts[i]), index, black_box(&proof), &root))
        });
    }
    group.finish();
}

fn mark_all<L: ClaimLedger>(mut ledger: L, n: u64) -> L {
    for i in 0..n {
        ledger.mark_claimed(U256::from(i));
    }
    ledger
}

fn bench_ledgers(c: &mut Criterion) {
    for &n in MARKS {
        let mut group = c.benchmark_group(format!("ledger/{n}_marks"));
        group.throughput(Throughput::Elements(n));

        group.bench_function("mapping", |b| {
            b.iter_batched(MappingLedger::new, |l| mark_all(l, n), BatchSize::SmallInput)
        });
        group.bench_function("bitmap", |b| {
            b.iter_batched(BitmapLedger::new, |l| mark_all(l, n), BatchSize::SmallInput)
        });
        group.finish();
    }
}

criterion_group!(benches, bench_verify, bench_ledgers);
criterion_main!(benches);
