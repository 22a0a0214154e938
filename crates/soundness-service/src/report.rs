//! Result rendering for a completed check.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use soundness_poller::PollOutcome;
use soundness_types::{ReceiptStatus, RpcEndpoint, TxHash};
use std::time::Duration;

/// Summary of a successful inclusion check.
///
/// Latency and elapsed time are kept at full precision; they are rounded to
/// two decimals only when rendered.
#[derive(Debug, Clone, Serialize)]
pub struct InclusionReport {
	pub rpc: RpcEndpoint,
	pub transaction: TxHash,
	pub block_number: Option<u64>,
	pub status: ReceiptStatus,
	#[serde(serialize_with = "serialize_rounded")]
	pub latency_seconds: f64,
	#[serde(serialize_with = "serialize_timestamp")]
	pub timestamp_utc: DateTime<Utc>,
	#[serde(serialize_with = "serialize_rounded")]
	pub elapsed_seconds: f64,
	#[serde(skip)]
	pub attempts: u32,
}

impl InclusionReport {
	pub fn new(
		rpc: RpcEndpoint,
		outcome: &PollOutcome,
		elapsed: Duration,
		timestamp_utc: DateTime<Utc>,
	) -> Self {
		Self {
			rpc,
			transaction: outcome.receipt.transaction_hash,
			block_number: outcome.receipt.block_number,
			status: outcome.receipt.status(),
			latency_seconds: outcome.latency_secs(),
			timestamp_utc,
			elapsed_seconds: elapsed.as_secs_f64(),
			attempts: outcome.attempts,
		}
	}

	/// Human-readable report, one line per field.
	pub fn render_text(&self) -> String {
		let block_number = self
			.block_number
			.map(|n| n.to_string())
			.unwrap_or_else(|| "None".to_string());

		format!(
			"🧱 Block Number: {}\n📦 Transaction Status: {}\n⚡ Inclusion Latency: {:.2}s\n⏱️ Completed in {:.2}s\n",
			block_number,
			self.status.label(),
			self.latency_seconds,
			self.elapsed_seconds,
		)
	}

	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

fn round_two(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_f64(round_two(*value))
}

fn serialize_timestamp<S: Serializer>(
	value: &DateTime<Utc>,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use serde_json::Value;
	use soundness_types::InclusionReceipt;

	const HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";

	fn report(block_number: Option<u64>, success: bool) -> InclusionReport {
		let outcome = PollOutcome {
			latency: Duration::from_millis(3_456),
			attempts: 2,
			receipt: InclusionReceipt {
				transaction_hash: HASH.parse().unwrap(),
				block_number,
				success,
			},
		};
		let timestamp = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 5).unwrap();

		InclusionReport::new(
			"https://rpc.example.org".parse().unwrap(),
			&outcome,
			Duration::from_millis(4_004),
			timestamp,
		)
	}

	#[test]
	fn test_json_schema() {
		let json: Value = serde_json::from_str(&report(Some(21_000_123), true).to_json().unwrap()).unwrap();
		let object = json.as_object().unwrap();

		let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
		keys.sort_unstable();
		assert_eq!(
			keys,
			[
				"block_number",
				"elapsed_seconds",
				"latency_seconds",
				"rpc",
				"status",
				"timestamp_utc",
				"transaction"
			]
		);

		assert_eq!(json["rpc"], "https://rpc.example.org");
		assert_eq!(json["transaction"], HASH);
		assert_eq!(json["block_number"], 21_000_123);
		assert_eq!(json["status"], "success");
		assert_eq!(json["latency_seconds"], 3.46);
		assert_eq!(json["elapsed_seconds"], 4.0);
		assert_eq!(json["timestamp_utc"], "2025-03-01T12:30:05.000000Z");
	}

	#[test]
	fn test_json_failed_and_unknown_status() {
		let failed: Value = serde_json::from_str(&report(Some(1), false).to_json().unwrap()).unwrap();
		assert_eq!(failed["status"], "failed");

		let unknown: Value = serde_json::from_str(&report(None, true).to_json().unwrap()).unwrap();
		assert_eq!(unknown["status"], "unknown");
		assert!(unknown["block_number"].is_null());
	}

	#[test]
	fn test_raw_latency_is_not_rounded() {
		let report = report(Some(1), true);
		assert!((report.latency_seconds - 3.456).abs() < 1e-9);
		assert_eq!(report.attempts, 2);
	}

	#[test]
	fn test_render_text() {
		let text = report(Some(42), false).render_text();
		assert_eq!(
			text,
			"🧱 Block Number: 42\n\
			 📦 Transaction Status: ❌ Failed\n\
			 ⚡ Inclusion Latency: 3.46s\n\
			 ⏱️ Completed in 4.00s\n"
		);

		let text = report(None, true).render_text();
		assert!(text.starts_with("🧱 Block Number: None\n"));
		assert!(text.contains("⚠️ Unknown (receipt not available)"));
	}
}
