//! Receipt poll request parameters.

use crate::{InputError, TxHash};
use std::time::Duration;

/// Default number of receipt lookups.
pub const DEFAULT_RETRIES: u32 = 3;

/// Default pause between receipt lookups, in seconds.
pub const DEFAULT_DELAY_SECS: f64 = 1.5;

/// What to poll for and how patiently.
///
/// Constructed once per invocation and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PollRequest {
	tx_hash: TxHash,
	retries: u32,
	delay: Duration,
}

impl PollRequest {
	pub fn new(tx_hash: TxHash, retries: u32, delay: Duration) -> Result<Self, InputError> {
		if retries == 0 {
			return Err(InputError::Retries(retries));
		}

		Ok(Self {
			tx_hash,
			retries,
			delay,
		})
	}

	/// Builds a request from a delay expressed in fractional seconds.
	pub fn with_delay_secs(tx_hash: TxHash, retries: u32, delay_secs: f64) -> Result<Self, InputError> {
		let delay =
			Duration::try_from_secs_f64(delay_secs).map_err(|_| InputError::Delay(delay_secs))?;
		Self::new(tx_hash, retries, delay)
	}

	pub fn tx_hash(&self) -> &TxHash {
		&self.tx_hash
	}

	pub fn retries(&self) -> u32 {
		self.retries
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}
}
