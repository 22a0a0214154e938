//! Transaction hash representation.

use crate::InputError;
use alloy::primitives::B256;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a hex-encoded transaction hash including the `0x` prefix.
pub const TX_HASH_LEN: usize = 66;

/// A validated 32-byte transaction hash.
///
/// Parsing only accepts the canonical form: a `0x` prefix followed by
/// exactly 64 hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxHash(pub B256);

impl TxHash {
	pub fn as_b256(&self) -> B256 {
		self.0
	}

	/// Shortened form used in log lines.
	pub fn truncated(&self) -> String {
		let hash_str = hex::encode(self.0);
		format!("0x{}..", &hash_str[..8])
	}
}

impl FromStr for TxHash {
	type Err = InputError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let digits = s.strip_prefix("0x").ok_or(InputError::TxHashPrefix)?;
		if s.len() != TX_HASH_LEN {
			return Err(InputError::TxHashLength { actual: s.len() });
		}

		let bytes = hex::decode(digits).map_err(|_| InputError::TxHashNotHex(s.to_string()))?;
		Ok(Self(B256::from_slice(&bytes)))
	}
}

impl From<B256> for TxHash {
	fn from(hash: B256) -> Self {
		Self(hash)
	}
}

impl fmt::Display for TxHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(self.0))
	}
}

impl Serialize for TxHash {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}
