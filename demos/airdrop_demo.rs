//! Airdrop demo: build an allowlist, then claim it through both ledgers and
//! the commit-reveal NFT flow.
//!
//! Build & run:
//!   cargo run --release --example airdrop_demo -- --help
//!   cargo run --release --example airdrop_demo -- --accounts=300
//!   RUST_LOG=merkle_airdrop=debug cargo run --example airdrop_demo
//!
//! Notes:
//! - Accounts are deterministic (`Address::from_low_u64`), so roots are
//!   reproducible across runs.
//! - The storage-cost figures use the fresh/update slot prices the ledgers
//!   report; they are estimates, not measured gas.

use std::env;

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;

use merkle_airdrop::hash::{digest_to_hex, Digest32};
use merkle_airdrop::merkle::{hash_sorted_pair, leaf_hash};
use merkle_airdrop::reveal::seed_commitment;
use merkle_airdrop::{
    Address, AirdropConfig, BitmapLedger, Call, Chain, ClaimLedger, MappingLedger, MerkleAirdrop,
    MerkleAirdropNft, U256,
};

#[derive(Debug, Clone, Copy)]
struct Opts {
    accounts: usize, // allowlist size
    reward: u128,    // fungible amount per claim
    seed: u64,       // seed each NFT claimant commits to
}

fn print_help_and_exit() -> ! {
    eprintln!(
        r#"airdrop_demo — claim a generated allowlist through every airdrop flavour

USAGE:
  airdrop_demo [--accounts=N] [--reward=AMOUNT] [--seed=U64]

OPTIONS:
  --accounts=N      Allowlist size. Default: 64
  --reward=AMOUNT   Tokens paid per fungible claim. Default: 100
  --seed=U64        Seed committed by NFT claimants. Default: 1337
  --help            Show this help.
"#
    );
    std::process::exit(0);
}

fn parse_args() -> Result<Opts> {
    let mut opts = Opts { accounts: 64, reward: 100, seed: 1337 };
    for arg in env::args().skip(1) {
        if arg == "--help" || arg == "-h" {
            print_help_and_exit();
        }
        let (key, val) =
            arg.split_once('=').ok_or_else(|| anyhow!("expected --key=value: {arg}"))?;
        match key {
            "--accounts" => opts.accounts = val.parse().context("--accounts")?,
            "--reward" => opts.reward = val.parse().context("--reward")?,
            "--seed" => opts.seed = val.parse().context("--seed")?,
            _ => bail!("unknown option {key}"),
        }
    }
    if opts.accounts == 0 {
        bail!("--accounts must be at least 1");
    }
    Ok(opts)
}

/// Layers of a sorted-pair tree, leaves first.
fn build_layers(leaves: Vec<Digest32>) -> Vec<Vec<Digest32>> {
    let mut layers = vec![leaves];
    while let Some(prev) = layers.last().filter(|l| l.len() > 1) {
        let next = prev
            .chunks(2)
            .map(|p| if p.len() == 2 { hash_sorted_pair(&p[0], &p[1]) } else { p[0] })
            .collect();
        layers.push(next);
    }
    layers
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

fn run_fungible<L: ClaimLedger + Default + Clone>(
    label: &str,
    cfg: &AirdropConfig,
    accounts: &[Address],
    layers: &[Vec<Digest32>],
) -> Result<()> {
    let mut chain = Chain::deploy(MerkleAirdrop::<L>::from_config(cfg));
    for (i, who) in accounts.iter().enumerate() {
        let call = Call::Claim { proof: proof_for(layers, i), index: U256::from(i as u64) };
        chain.execute(*who, call).map_err(|e| anyhow!("{label} claim {i}: {e}"))?;
    }

    let c = chain.contract();
    let stats = c.ledger().write_stats();
    info!(
        ledger = label,
        slots = c.ledger().slots_used(),
        fresh = stats.fresh,
        updates = stats.updates,
        cost = stats.cost(),
        reserve_left = c.reward().reserve(),
        "fungible airdrop complete"
    );
    Ok(())
}

fn run_nft(
    cfg: &AirdropConfig,
    opts: &Opts,
    accounts: &[Address],
    layers: &[Vec<Digest32>],
) -> Result<()> {
    let mut chain = Chain::deploy(MerkleAirdropNft::from_config(cfg));
    let seed = U256::from(opts.seed);

    for who in accounts {
        chain.execute(*who, Call::Commit { commitment: seed_commitment(seed) })?;
    }
    chain.mine(cfg.min_reveal_delay);

    for (i, who) in accounts.iter().enumerate() {
        let proof = proof_for(layers, i);
        let index = U256::from(i as u64);
        let call = if i % 2 == 0 {
            Call::RevealAndClaimMapping { proof, index, seed }
        } else {
            Call::RevealAndClaimBitmap { proof, index, seed }
        };
        chain.execute(*who, call).map_err(|e| anyhow!("nft claim {i}: {e}"))?;
    }

    let c = chain.contract();
    info!(
        minted = c.nft().total_supply(),
        block = chain.block_number(),
        mapping_cost = c.mapping_ledger().write_stats().cost(),
        bitmap_cost = c.bitmap_ledger().write_stats().cost(),
        "nft airdrop complete"
    );
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let opts = parse_args()?;

    let accounts: Vec<Address> =
        (0..opts.accounts as u64).map(|i| Address::from_low_u64(0x1000 + i)).collect();
    let leaves = accounts
        .iter()
        .enumerate()
        .map(|(i, a)| leaf_hash(a, U256::from(i as u64)))
        .collect();
    let layers = build_layers(leaves);
    let root = layers[layers.len() - 1][0];
    info!(accounts = opts.accounts, root = %digest_to_hex(&root), "allowlist built");

    let mut cfg = AirdropConfig::with_root(root);
    cfg.reward_amount = opts.reward;
    cfg.reserve = opts.reward * opts.accounts as u128;
    cfg.max_supply = opts.accounts as u64;

    run_fungible::<MappingLedger>("mapping", &cfg, &accounts, &layers)?;
    run_fungible::<BitmapLedger>("bitmap", &cfg, &accounts, &layers)?;
    run_nft(&cfg, &opts, &accounts, &layers)?;
    Ok(())
}

/// Initialize logging/tracing subscriber with a simple env filter.
fn init_tracing() {
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info,merkle_airdrop=warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
