//! Error types for a soundness check run.

use soundness_config::ConfigError;
use soundness_poller::{PollError, SourceError};
use soundness_types::InputError;
use thiserror::Error;

/// Process exit code for success.
pub const EXIT_OK: u8 = 0;
/// Process exit code for invalid input or a failed connectivity check.
pub const EXIT_INVALID: u8 = 1;
/// Process exit code when no receipt appeared within the retry budget.
pub const EXIT_NOT_FOUND: u8 = 2;

pub type Result<T> = std::result::Result<T, CheckError>;

#[derive(Error, Debug)]
pub enum CheckError {
	#[error(transparent)]
	InvalidInput(#[from] InputError),

	#[error("Invalid configuration: {0}")]
	Config(#[from] ConfigError),

	#[error("Invalid RPC URL: {0}")]
	InvalidEndpoint(SourceError),

	#[error("RPC connection failed. Check your RPC_URL or --rpc argument. ({0})")]
	Connectivity(SourceError),

	#[error(transparent)]
	ReceiptNotFound(#[from] PollError),

	#[error("Failed to render output: {0}")]
	Output(#[from] serde_json::Error),
}

impl CheckError {
	pub fn exit_code(&self) -> u8 {
		match self {
			CheckError::ReceiptNotFound(_) => EXIT_NOT_FOUND,
			CheckError::InvalidInput(_)
			| CheckError::Config(_)
			| CheckError::InvalidEndpoint(_)
			| CheckError::Connectivity(_)
			| CheckError::Output(_) => EXIT_INVALID,
		}
	}
}
