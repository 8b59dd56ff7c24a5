//! Shared primitive types: [`Address`], [`U256`], [`Selector`].

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

pub use ruint::aliases::U256;

/// Width (in bytes) of an account address.
pub const ADDRESS_BYTES: usize = 20;

/// First four bytes of `keccak256(signature)`.
pub type Selector = [u8; 4];

/// 20-byte account address (EVM layout).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_BYTES]);

impl Address {
    pub const ZERO: Address = Address([0u8; ADDRESS_BYTES]);

    #[inline]
    pub const fn new(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    /// Deterministic address for fixtures: big-endian `n` in the low bytes.
    pub fn from_low_u64(n: u64) -> Self {
        let mut out = [0u8; ADDRESS_BYTES];
        out[ADDRESS_BYTES - 8..].copy_from_slice(&n.to_be_bytes());
        Self(out)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_BYTES]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// Errors from parsing a hex address.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddressParseError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("address must be {ADDRESS_BYTES} bytes, got {0}")]
    Length(usize),
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let body = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let raw = hex::decode(body)?;
        if raw.len() != ADDRESS_BYTES {
            return Err(AddressParseError::Length(raw.len()));
        }
        let mut out = [0u8; ADDRESS_BYTES];
        out.copy_from_slice(&raw);
        Ok(Self(out))
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_hex_roundtrip() {
        let a = Address::from_low_u64(0xdead_beef);
        let s = a.to_string();
        assert_eq!(s, "0x00000000000000000000000000000000deadbeef");
        assert_eq!(s.parse::<Address>().unwrap(), a);
    }

    #[test]
    fn address_rejects_bad_length() {
        assert_eq!(
            "0x1234".parse::<Address>().unwrap_err(),
            AddressParseError::Length(2)
        );
        assert!(matches!(
            "0xzz".parse::<Address>().unwrap_err(),
            AddressParseError::Hex(_)
        ));
    }

    #[test]
    fn hex_errors_compare_by_cause() {
        assert_eq!(
            "0xabc".parse::<Address>().unwrap_err(),
            AddressParseError::Hex(hex::FromHexError::OddLength)
        );
        assert_ne!(
            "0xzz".parse::<Address>().unwrap_err(),
            AddressParseError::Hex(hex::FromHexError::OddLength)
        );
    }
}
