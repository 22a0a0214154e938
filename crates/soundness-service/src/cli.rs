//! Command-line interface definitions.

use clap::Parser;
use soundness_config::{CheckerConfig, ConfigError, ConfigLoader, ConfigOverrides};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zk-tx-soundness")]
#[command(
	about = "zk-tx-soundness: verify transaction inclusion latency and RPC reliability for Aztec/Zama and general Web3 testing.",
	long_about = None
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// EVM RPC URL (default from RPC_URL)
	#[arg(long, env = "RPC_URL")]
	pub rpc: Option<String>,

	/// Transaction hash to verify
	#[arg(long)]
	pub tx: String,

	/// Number of receipt check attempts [default: 3]
	#[arg(long)]
	pub retries: Option<u32>,

	/// Delay between attempts in seconds [default: 1.5]
	#[arg(long, allow_negative_numbers = true)]
	pub delay: Option<f64>,

	/// Output results as JSON on stdout instead of the text report
	#[arg(long)]
	pub json: bool,

	/// Per-request RPC timeout in seconds [default: 20]
	#[arg(long, value_name = "SECS")]
	pub timeout: Option<u64>,

	/// Optional TOML configuration file
	#[arg(short, long, value_name = "FILE", env = "ZK_TX_SOUNDNESS_CONFIG")]
	pub config: Option<PathBuf>,

	/// Log filter (trace, debug, info, warn, error). RUST_LOG takes precedence.
	#[arg(long, env = "ZK_TX_SOUNDNESS_LOG", default_value = "info")]
	pub log_level: String,
}

impl Args {
	pub fn overrides(&self) -> ConfigOverrides {
		ConfigOverrides {
			rpc_url: self.rpc.clone(),
			retries: self.retries,
			delay_secs: self.delay,
			timeout_secs: self.timeout,
		}
	}

	/// Resolves defaults, the optional file, and command-line overrides.
	pub fn load_config(&self) -> Result<CheckerConfig, ConfigError> {
		let mut loader = ConfigLoader::new().with_overrides(self.overrides());
		if let Some(path) = &self.config {
			loader = loader.with_file(path);
		}
		loader.load()
	}
}
