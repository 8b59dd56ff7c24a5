//! Deployment parameters.
//!
//! Loaded from JSON (`AirdropConfig::from_json_str`) or, with the default
//! `env-config` feature, from `AIRDROP_*` environment variables:
//!
//! | variable                   | field              | default |
//! |----------------------------|--------------------|---------|
//! | `AIRDROP_ROOT`             | `root`             | required |
//! | `AIRDROP_MAX_SUPPLY`       | `max_supply`       | 10000 |
//! | `AIRDROP_MIN_REVEAL_DELAY` | `min_reveal_delay` | 10 |
//! | `AIRDROP_RECOMMIT_POLICY`  | `recommit_policy`  | `never` |
//! | `AIRDROP_REWARD_AMOUNT`    | `reward_amount`    | 0 |
//! | `AIRDROP_RESERVE`          | `reserve`          | 0 |
//!
//! The root is immutable once a contract is constructed from this config.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::hash::Digest32;
use crate::reveal::DEFAULT_MIN_REVEAL_DELAY;

pub const DEFAULT_MAX_SUPPLY: u64 = 10_000;

/// Whether a claimant may commit again after a successful reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommitPolicy {
    /// `Revealed` is terminal.
    #[default]
    Never,
    /// A new commitment may be recorded once the previous one was revealed.
    ///
    /// Needed when one claimant claims the same index on both ledgers
    /// (reveal for `revealAndClaimMapping`, commit again, reveal for
    /// `revealAndClaimBitmap`).
    AfterReveal,
}

impl core::str::FromStr for RecommitPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(RecommitPolicy::Never),
            "after_reveal" | "after-reveal" => Ok(RecommitPolicy::AfterReveal),
            other => anyhow::bail!("unknown recommit policy: {other}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirdropConfig {
    /// Allowlist Merkle root, `0x`-hex.
    #[serde(with = "hex_digest")]
    pub root: Digest32,
    /// NFT variant: mint cap.
    #[serde(default = "default_max_supply")]
    pub max_supply: u64,
    /// NFT variant: blocks between commit and reveal.
    #[serde(default = "default_min_reveal_delay")]
    pub min_reveal_delay: u64,
    #[serde(default)]
    pub recommit_policy: RecommitPolicy,
    /// Token variant: amount transferred per claim.
    #[serde(default)]
    pub reward_amount: u128,
    /// Token variant: balance held by the contract at deployment.
    #[serde(default)]
    pub reserve: u128,
}

fn default_max_supply() -> u64 {
    DEFAULT_MAX_SUPPLY
}

fn default_min_reveal_delay() -> u64 {
    DEFAULT_MIN_REVEAL_DELAY
}

impl AirdropConfig {
    /// Config with defaults for everything but the root.
    pub fn with_root(root: Digest32) -> Self {
        Self {
            root,
            max_supply: DEFAULT_MAX_SUPPLY,
            min_reveal_delay: DEFAULT_MIN_REVEAL_DELAY,
            recommit_policy: RecommitPolicy::Never,
            reward_amount: 0,
            reserve: 0,
        }
    }

    /// Parse from a JSON document and validate.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: AirdropConfig =
            serde_json::from_str(json).context("invalid airdrop config JSON")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from `AIRDROP_*` environment variables.
    #[cfg(feature = "env-config")]
    pub fn from_env() -> Result<Self> {
        fn getenv(key: &str) -> Option<String> {
            std::env::var(key).ok().filter(|v| !v.trim().is_empty())
        }

        let root_hex = getenv("AIRDROP_ROOT").context("missing AIRDROP_ROOT")?;
        let root = crate::hash::digest_from_hex(&root_hex)
            .with_context(|| format!("invalid AIRDROP_ROOT: {root_hex}"))?;
        let mut cfg = Self::with_root(root);

        if let Some(v) = getenv("AIRDROP_MAX_SUPPLY") {
            cfg.max_supply = v.parse().with_context(|| format!("invalid AIRDROP_MAX_SUPPLY: {v}"))?;
        }
        if let Some(v) = getenv("AIRDROP_MIN_REVEAL_DELAY") {
            cfg.min_reveal_delay = v
                .parse()
                .with_context(|| format!("invalid AIRDROP_MIN_REVEAL_DELAY: {v}"))?;
        }
        if let Some(v) = getenv("AIRDROP_RECOMMIT_POLICY") {
            cfg.recommit_policy = v.parse()?;
        }
        if let Some(v) = getenv("AIRDROP_REWARD_AMOUNT") {
            cfg.reward_amount =
                v.parse().with_context(|| format!("invalid AIRDROP_REWARD_AMOUNT: {v}"))?;
        }
        if let Some(v) = getenv("AIRDROP_RESERVE") {
            cfg.reserve = v.parse().with_context(|| format!("invalid AIRDROP_RESERVE: {v}"))?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.min_reveal_delay >= 1, "min_reveal_delay must be at least 1 block");
        Ok(())
    }
}

mod hex_digest {
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use crate::hash::{digest_from_hex, digest_to_hex, Digest32};

    pub fn serialize<S: Serializer>(d: &Digest32, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&digest_to_hex(d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Digest32, D::Error> {
        let s = String::deserialize(d)?;
        digest_from_hex(&s).map_err(D::Error::custom)
    }
}
