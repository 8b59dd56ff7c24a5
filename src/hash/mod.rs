//! Hash primitives.
//!
//! The ledger environment this engine mirrors hashes everything with
//! Keccak-256 (Ethereum padding, not NIST SHA3-256), so that is the only
//! algorithm here. Digests are fixed at 32 bytes across the crate.

pub mod keccak;

pub use keccak::{keccak256, keccak256_many, selector};

/// A 256-bit digest used across the codebase.
pub type Digest32 = [u8; 32];

/// Parse a `0x`-prefixed (or bare) 64-char hex string into a digest.
pub fn digest_from_hex(s: &str) -> Result<Digest32, hex::FromHexError> {
    let s = s.trim();
    let body = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    let mut out = [0u8; 32];
    hex::decode_to_slice(body, &mut out)?;
    Ok(out)
}

/// Lowercase `0x`-prefixed hex rendering of a digest.
pub fn digest_to_hex(d: &Digest32) -> String {
    format!("0x{}", hex::encode(d))
}
