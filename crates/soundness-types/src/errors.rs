//! Error types for malformed user input.

use thiserror::Error;

/// Errors raised while validating inputs, before any network call is made.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
	#[error("Invalid RPC URL format '{0}'. It must start with 'http' or 'https'.")]
	RpcUrl(String),

	#[error("Invalid transaction hash format. It should be a 0x-prefixed 66-character string.")]
	TxHashPrefix,

	#[error("Invalid transaction hash length {actual}. It should be a 0x-prefixed 66-character string.")]
	TxHashLength { actual: usize },

	#[error("Invalid transaction hash: '{0}' contains non-hexadecimal characters.")]
	TxHashNotHex(String),

	#[error("Retries must be at least 1, got {0}")]
	Retries(u32),

	#[error("Delay must be a finite, non-negative number of seconds, got {0}")]
	Delay(f64),
}
