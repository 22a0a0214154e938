//! RPC endpoint validation.

use crate::InputError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An HTTP(S) JSON-RPC endpoint URL.
///
/// Only the scheme is checked here; full URL parsing happens when the
/// transport is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEndpoint(String);

impl RpcEndpoint {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for RpcEndpoint {
	type Err = InputError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let url = s.trim();
		if url.starts_with("http://") || url.starts_with("https://") {
			Ok(Self(url.to_string()))
		} else {
			Err(InputError::RpcUrl(s.to_string()))
		}
	}
}

impl fmt::Display for RpcEndpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Serialize for RpcEndpoint {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_accepts_http_and_https() {
		assert!("http://localhost:8545".parse::<RpcEndpoint>().is_ok());
		let endpoint: RpcEndpoint = " https://rpc.example.org ".parse().unwrap();
		assert_eq!(endpoint.as_str(), "https://rpc.example.org");
	}

	#[test]
	fn test_rejects_other_schemes() {
		for url in ["ws://localhost:8546", "localhost:8545", "", "ftp://rpc"] {
			assert_eq!(
				url.parse::<RpcEndpoint>(),
				Err(InputError::RpcUrl(url.to_string()))
			);
		}
	}
}
