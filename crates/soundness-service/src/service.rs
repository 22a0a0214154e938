//! The inclusion check workflow.

use crate::error::{CheckError, Result};
use crate::report::InclusionReport;
use chrono::{SecondsFormat, Utc};
use soundness_config::CheckerConfig;
use soundness_poller::{
	AlloyReceiptSource, ReceiptPoller, ReceiptSource, SourceError, TracingObserver,
};
use soundness_types::{PollRequest, RpcEndpoint, TxHash};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

/// A validated inclusion check, ready to run against a receipt source.
pub struct CheckService {
	endpoint: RpcEndpoint,
	request: PollRequest,
	timeout: Duration,
	poller: ReceiptPoller,
	started: Instant,
}

impl CheckService {
	/// Validates the endpoint, hash, and poll parameters.
	///
	/// Nothing touches the network until [`CheckService::connect`].
	pub fn new(config: &CheckerConfig, tx: &str) -> Result<Self> {
		let endpoint = config.endpoint()?;
		let tx_hash: TxHash = tx.trim().parse()?;
		let request =
			PollRequest::with_delay_secs(tx_hash, config.polling.retries, config.polling.delay_secs)?;

		Ok(Self {
			endpoint,
			poller: ReceiptPoller::new().with_observer(Arc::new(TracingObserver::new(&tx_hash))),
			request,
			timeout: Duration::from_secs(config.rpc.timeout_secs),
			started: Instant::now(),
		})
	}

	/// Measures the reported completion time from `started` instead of construction.
	pub fn started_at(mut self, started: Instant) -> Self {
		self.started = started;
		self
	}

	pub fn with_poller(mut self, poller: ReceiptPoller) -> Self {
		self.poller = poller;
		self
	}

	/// Builds the HTTP receipt source for the configured endpoint.
	pub fn connect(&self) -> Result<AlloyReceiptSource> {
		AlloyReceiptSource::new(&self.endpoint, self.timeout).map_err(|e| match e {
			SourceError::Endpoint(_) => CheckError::InvalidEndpoint(e),
			other => CheckError::Connectivity(other),
		})
	}

	/// Probes the endpoint, polls for the receipt, and summarises the result.
	pub async fn run(&self, source: &dyn ReceiptSource) -> Result<InclusionReport> {
		let chain_id = source.chain_id().await.map_err(CheckError::Connectivity)?;

		info!(
			"🕒 Timestamp: {}",
			Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
		);
		info!("🔧 zk-tx-soundness");
		info!("🔗 RPC: {}", self.endpoint);
		info!("⛓️ Chain ID: {}", chain_id);
		info!("🔍 Transaction: {}", self.request.tx_hash());

		let outcome = self.poller.poll(source, &self.request).await?;

		Ok(InclusionReport::new(
			self.endpoint.clone(),
			&outcome,
			self.started.elapsed(),
			Utc::now(),
		))
	}
}
