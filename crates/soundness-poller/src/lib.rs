// soundness-poller/src/lib.rs

//! Receipt polling for submitted transactions.
//!
//! The [`ReceiptPoller`] asks a [`ReceiptSource`] for a transaction receipt a
//! bounded number of times, pausing a fixed delay between attempts, and
//! reports how long it took for the receipt to appear. Progress is reported
//! through a [`PollObserver`] rather than written to the console.

use async_trait::async_trait;
use soundness_types::{InclusionReceipt, PollRequest, TxHash};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

pub mod implementations;
pub mod observer;

pub use implementations::evm::alloy::AlloyReceiptSource;
pub use observer::{MissCause, NoopObserver, PollObserver, TracingObserver};

/// Errors raised by a single request against the RPC endpoint.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
	#[error("Invalid RPC endpoint: {0}")]
	Endpoint(String),

	#[error("Network error: {0}")]
	Network(String),

	#[error("RPC error: {0}")]
	Rpc(String),
}

/// Terminal failure of a poll.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PollError {
	#[error("Transaction receipt not found after {attempts} attempts.")]
	ReceiptNotFound { attempts: u32 },
}

/// Read access to transaction receipts on a chain.
#[async_trait]
pub trait ReceiptSource: Send + Sync {
	/// Chain id reported by the endpoint. Used as the connectivity probe.
	async fn chain_id(&self) -> Result<u64, SourceError>;

	/// Looks up the receipt for `hash`.
	///
	/// Returns `Ok(None)` while the transaction has not been included.
	async fn transaction_receipt(
		&self,
		hash: &TxHash,
	) -> Result<Option<InclusionReceipt>, SourceError>;
}

/// A receipt observed by the poller.
#[derive(Debug, Clone, PartialEq)]
pub struct PollOutcome {
	/// Time from the start of polling until the receipt was observed.
	pub latency: Duration,
	/// The 1-based attempt on which the receipt appeared.
	pub attempts: u32,
	pub receipt: InclusionReceipt,
}

impl PollOutcome {
	pub fn latency_secs(&self) -> f64 {
		self.latency.as_secs_f64()
	}
}

/// Polls a [`ReceiptSource`] until a receipt appears or the retry budget runs out.
///
/// The poller sleeps only between attempts: a poll that succeeds on attempt
/// `k` sleeps `k - 1` times, and an exhausted poll sleeps `retries - 1` times.
#[derive(Clone)]
pub struct ReceiptPoller {
	observer: Arc<dyn PollObserver>,
}

impl Default for ReceiptPoller {
	fn default() -> Self {
		Self::new()
	}
}

impl ReceiptPoller {
	pub fn new() -> Self {
		Self {
			observer: Arc::new(NoopObserver),
		}
	}

	pub fn with_observer(mut self, observer: Arc<dyn PollObserver>) -> Self {
		self.observer = observer;
		self
	}

	pub async fn poll(
		&self,
		source: &dyn ReceiptSource,
		request: &PollRequest,
	) -> Result<PollOutcome, PollError> {
		let start = Instant::now();
		let total = request.retries();

		for attempt in 1..=total {
			self.observer.on_attempt(attempt, total);

			match source.transaction_receipt(request.tx_hash()).await {
				Ok(Some(receipt)) => {
					let latency = start.elapsed();
					self.observer.on_found(attempt, latency);
					return Ok(PollOutcome {
						latency,
						attempts: attempt,
						receipt,
					});
				}
				Ok(None) => self.observer.on_miss(attempt, total, MissCause::Pending),
				Err(error) => self
					.observer
					.on_miss(attempt, total, MissCause::Error(&error)),
			}

			if attempt < total {
				self.observer.on_wait(attempt, total, request.delay());
				tokio::time::sleep(request.delay()).await;
			}
		}

		Err(PollError::ReceiptNotFound { attempts: total })
	}
}
