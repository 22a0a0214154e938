//! Alloy-backed receipt source.
//!
//! Talks to an EVM JSON-RPC endpoint over HTTP with a per-request timeout and
//! translates Alloy receipts into [`InclusionReceipt`]s.

use crate::{ReceiptSource, SourceError};
use alloy::network::{Ethereum, ReceiptResponse};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::{reqwest, Http};
use alloy::transports::TransportError;
use async_trait::async_trait;
use soundness_types::{InclusionReceipt, RpcEndpoint, TxHash};
use std::time::Duration;

/// Receipt source backed by an Alloy HTTP provider.
pub struct AlloyReceiptSource {
	/// The Alloy provider for blockchain interaction.
	provider: RootProvider<Ethereum>,
	endpoint: RpcEndpoint,
}

impl AlloyReceiptSource {
	/// Creates a provider for `endpoint` whose requests give up after `timeout`.
	///
	/// No request is sent here; call [`ReceiptSource::chain_id`] to check
	/// that the endpoint is reachable.
	pub fn new(endpoint: &RpcEndpoint, timeout: Duration) -> Result<Self, SourceError> {
		let url: reqwest::Url = endpoint
			.as_str()
			.parse()
			.map_err(|e| SourceError::Endpoint(format!("{}: {}", endpoint, e)))?;

		let client = reqwest::Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| SourceError::Network(format!("Failed to build HTTP client: {}", e)))?;

		let rpc_client = RpcClient::new(Http::with_client(client, url), false);

		Ok(Self {
			provider: RootProvider::new(rpc_client),
			endpoint: endpoint.clone(),
		})
	}

	pub fn endpoint(&self) -> &RpcEndpoint {
		&self.endpoint
	}
}

fn map_rpc_error(error: TransportError) -> SourceError {
	match error {
		TransportError::ErrorResp(payload) => SourceError::Rpc(payload.to_string()),
		other => SourceError::Network(other.to_string()),
	}
}

#[async_trait]
impl ReceiptSource for AlloyReceiptSource {
	async fn chain_id(&self) -> Result<u64, SourceError> {
		self.provider.get_chain_id().await.map_err(map_rpc_error)
	}

	async fn transaction_receipt(
		&self,
		hash: &TxHash,
	) -> Result<Option<InclusionReceipt>, SourceError> {
		let receipt = self
			.provider
			.get_transaction_receipt(hash.as_b256())
			.await
			.map_err(map_rpc_error)?;

		Ok(receipt.map(|receipt| InclusionReceipt {
			transaction_hash: TxHash::from(ReceiptResponse::transaction_hash(&receipt)),
			block_number: ReceiptResponse::block_number(&receipt),
			success: ReceiptResponse::status(&receipt),
		}))
	}
}
