//! Progress reporting for receipt polls.

use crate::SourceError;
use soundness_types::TxHash;
use std::time::Duration;
use tracing::{debug, info};

/// Why an attempt did not produce a receipt.
#[derive(Debug, Clone, Copy)]
pub enum MissCause<'a> {
	/// The endpoint answered but has no receipt yet.
	Pending,
	/// The request itself failed.
	Error(&'a SourceError),
}

/// Receives progress notifications from a [`crate::ReceiptPoller`].
///
/// Every method defaults to a no-op.
pub trait PollObserver: Send + Sync {
	/// Called before each receipt lookup.
	fn on_attempt(&self, _attempt: u32, _total: u32) {}

	/// Called when a lookup returned no receipt or failed.
	fn on_miss(&self, _attempt: u32, _total: u32, _cause: MissCause<'_>) {}

	/// Called right before sleeping between two attempts.
	fn on_wait(&self, _attempt: u32, _total: u32, _delay: Duration) {}

	/// Called once when the receipt is observed.
	fn on_found(&self, _attempt: u32, _latency: Duration) {}
}

/// Discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PollObserver for NoopObserver {}

/// Emits progress notices as `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingObserver {
	tx_hash: String,
}

impl TracingObserver {
	pub fn new(tx_hash: &TxHash) -> Self {
		Self {
			tx_hash: tx_hash.truncated(),
		}
	}
}

impl PollObserver for TracingObserver {
	fn on_attempt(&self, attempt: u32, total: u32) {
		debug!(tx_hash = %self.tx_hash, attempt, total, "Requesting transaction receipt");
	}

	fn on_miss(&self, attempt: u32, total: u32, cause: MissCause<'_>) {
		match cause {
			MissCause::Pending => {
				debug!(tx_hash = %self.tx_hash, attempt, total, "Receipt not available yet")
			}
			MissCause::Error(error) => {
				debug!(tx_hash = %self.tx_hash, attempt, total, %error, "Receipt lookup failed")
			}
		}
	}

	fn on_wait(&self, attempt: u32, total: u32, delay: Duration) {
		info!(
			?delay,
			"⏳ Waiting for transaction receipt... attempt {}/{}", attempt, total
		);
	}

	fn on_found(&self, attempt: u32, latency: Duration) {
		debug!(
			tx_hash = %self.tx_hash,
			attempt,
			?latency,
			"Transaction receipt found"
		);
	}
}
