//! Transaction receipt types.

use crate::TxHash;
use serde::Serialize;
use std::fmt;

/// The part of a transaction receipt the checker cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionReceipt {
	/// The hash of the transaction.
	pub transaction_hash: TxHash,
	/// The block the transaction was included in, if the node reports one.
	pub block_number: Option<u64>,
	/// Whether the receipt status code is 1.
	pub success: bool,
}

impl InclusionReceipt {
	/// Execution status derived from the receipt.
	///
	/// A receipt that is not attached to a block has no final status.
	pub fn status(&self) -> ReceiptStatus {
		match (self.block_number, self.success) {
			(None, _) => ReceiptStatus::Unknown,
			(Some(_), true) => ReceiptStatus::Success,
			(Some(_), false) => ReceiptStatus::Failed,
		}
	}
}

/// Execution outcome of an included transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
	Success,
	Failed,
	Unknown,
}

impl ReceiptStatus {
	/// Human-readable label used by the text report.
	pub fn label(&self) -> &'static str {
		match self {
			ReceiptStatus::Success => "✅ Success",
			ReceiptStatus::Failed => "❌ Failed",
			ReceiptStatus::Unknown => "⚠️ Unknown (receipt not available)",
		}
	}
}

impl fmt::Display for ReceiptStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			ReceiptStatus::Success => "success",
			ReceiptStatus::Failed => "failed",
			ReceiptStatus::Unknown => "unknown",
		};
		f.write_str(s)
	}
}
