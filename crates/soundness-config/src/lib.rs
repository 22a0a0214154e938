// soundness-config/src/lib.rs

use regex::Regex;
use serde::Deserialize;
use soundness_types::{InputError, RpcEndpoint, DEFAULT_DELAY_SECS, DEFAULT_RETRIES};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// RPC endpoint used when neither `--rpc` nor `RPC_URL` is set.
pub const DEFAULT_RPC_URL: &str = "https://mainnet.infura.io/v3/YOUR_INFURA_KEY";

/// Per-request RPC timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("Environment variable not found: {0}")]
	EnvVarNotFound(String),

	#[error(transparent)]
	Input(#[from] InputError),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Resolved checker configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
	pub rpc: RpcConfig,
	pub polling: PollingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RpcConfig {
	pub url: String,
	pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PollingConfig {
	pub retries: u32,
	pub delay_secs: f64,
}

impl Default for RpcConfig {
	fn default() -> Self {
		Self {
			url: DEFAULT_RPC_URL.to_string(),
			timeout_secs: DEFAULT_TIMEOUT_SECS,
		}
	}
}

impl Default for PollingConfig {
	fn default() -> Self {
		Self {
			retries: DEFAULT_RETRIES,
			delay_secs: DEFAULT_DELAY_SECS,
		}
	}
}

impl CheckerConfig {
	pub fn endpoint(&self) -> Result<RpcEndpoint, InputError> {
		self.rpc.url.parse()
	}
}

/// Values supplied on the command line or through the environment.
///
/// Each `Some` replaces whatever the file or the defaults provided.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
	pub rpc_url: Option<String>,
	pub retries: Option<u32>,
	pub delay_secs: Option<f64>,
	pub timeout_secs: Option<u64>,
}

/// Configuration loader with environment variable substitution
#[derive(Debug, Default)]
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
	overrides: ConfigOverrides,
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self
	}

	pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
		self.overrides = overrides;
		self
	}

	pub fn load(&self) -> Result<CheckerConfig, ConfigError> {
		let mut config = match &self.file_path {
			Some(path) => self.load_from_file(path)?,
			None => CheckerConfig::default(),
		};

		self.apply_overrides(&mut config);
		validate_config(&config)?;

		Ok(config)
	}

	fn load_from_file(&self, path: &Path) -> Result<CheckerConfig, ConfigError> {
		debug!("Loading configuration from {:?}", path);
		if !path.exists() {
			return Err(ConfigError::FileNotFound(path.display().to_string()));
		}

		let content = std::fs::read_to_string(path)?;
		let substituted_content = substitute_env_vars(&content)?;

		toml::from_str(&substituted_content).map_err(|e| ConfigError::ParseError(e.to_string()))
	}

	fn apply_overrides(&self, config: &mut CheckerConfig) {
		let overrides = &self.overrides;

		if let Some(url) = &overrides.rpc_url {
			debug!("Overriding RPC URL");
			config.rpc.url = url.clone();
		}

		if let Some(retries) = overrides.retries {
			config.polling.retries = retries;
		}

		if let Some(delay_secs) = overrides.delay_secs {
			config.polling.delay_secs = delay_secs;
		}

		if let Some(timeout_secs) = overrides.timeout_secs {
			config.rpc.timeout_secs = timeout_secs;
		}
	}
}

/// Replaces `${VAR_NAME}` patterns with the value of the environment variable.
fn substitute_env_vars(content: &str) -> Result<String, ConfigError> {
	let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConfigError::ParseError(e.to_string()))?;
	let mut result = content.to_string();

	for cap in re.captures_iter(content) {
		let full_match = &cap[0];
		let var_name = &cap[1];

		let env_value =
			env::var(var_name).map_err(|_| ConfigError::EnvVarNotFound(var_name.to_string()))?;

		result = result.replace(full_match, &env_value);
	}

	Ok(result)
}

fn validate_config(config: &CheckerConfig) -> Result<(), ConfigError> {
	config.endpoint()?;

	if config.polling.retries == 0 {
		return Err(InputError::Retries(0).into());
	}

	let delay = config.polling.delay_secs;
	if !delay.is_finite() || delay < 0.0 {
		return Err(InputError::Delay(delay).into());
	}

	if config.rpc.timeout_secs == 0 {
		return Err(ConfigError::ValidationError(
			"RPC timeout must be at least 1 second".to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn write_config(contents: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(contents.as_bytes()).unwrap();
		file
	}

	#[test]
	fn test_default_config() {
		let config = ConfigLoader::new().load().unwrap();
		assert_eq!(config.rpc.url, DEFAULT_RPC_URL);
		assert_eq!(config.rpc.timeout_secs, 20);
		assert_eq!(config.polling.retries, 3);
		assert_eq!(config.polling.delay_secs, 1.5);
	}

	#[test]
	fn test_toml_parsing() {
		let file = write_config(
			r#"
[rpc]
url = "http://localhost:8545"
timeout_secs = 5

[polling]
retries = 10
"#,
		);

		let config = ConfigLoader::new().with_file(file.path()).load().unwrap();
		assert_eq!(config.rpc.url, "http://localhost:8545");
		assert_eq!(config.rpc.timeout_secs, 5);
		assert_eq!(config.polling.retries, 10);
		assert_eq!(config.polling.delay_secs, DEFAULT_DELAY_SECS);
	}

	#[test]
	fn test_env_substitution() {
		env::set_var("SOUNDNESS_TEST_RPC_HOST", "node.internal:8545");
		let file = write_config(
			r#"
[rpc]
url = "http://${SOUNDNESS_TEST_RPC_HOST}"
"#,
		);

		let config = ConfigLoader::new().with_file(file.path()).load().unwrap();
		assert_eq!(config.rpc.url, "http://node.internal:8545");
	}

	#[test]
	fn test_missing_env_var() {
		let file = write_config(
			r#"
[rpc]
url = "${SOUNDNESS_TEST_UNSET_VARIABLE}"
"#,
		);

		let err = ConfigLoader::new().with_file(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::EnvVarNotFound(name) if name == "SOUNDNESS_TEST_UNSET_VARIABLE"));
	}

	#[test]
	fn test_overrides_take_precedence() {
		let file = write_config(
			r#"
[rpc]
url = "http://localhost:8545"

[polling]
retries = 10
delay_secs = 4.0
"#,
		);

		let overrides = ConfigOverrides {
			rpc_url: Some("https://rpc.example.org".to_string()),
			retries: Some(2),
			delay_secs: None,
			timeout_secs: Some(3),
		};
		let config = ConfigLoader::new()
			.with_file(file.path())
			.with_overrides(overrides)
			.load()
			.unwrap();

		assert_eq!(config.rpc.url, "https://rpc.example.org");
		assert_eq!(config.rpc.timeout_secs, 3);
		assert_eq!(config.polling.retries, 2);
		assert_eq!(config.polling.delay_secs, 4.0);
	}

	#[test]
	fn test_example_config_accepts_rpc_override() {
		env::remove_var("RPC_URL");
		let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/example.toml");

		let overrides = ConfigOverrides {
			rpc_url: Some("http://localhost:8545".to_string()),
			..Default::default()
		};
		let config = ConfigLoader::new()
			.with_file(&path)
			.with_overrides(overrides)
			.load()
			.unwrap();

		assert_eq!(config.rpc.url, "http://localhost:8545");
		assert_eq!(config.rpc.timeout_secs, DEFAULT_TIMEOUT_SECS);
		assert_eq!(config.polling.retries, DEFAULT_RETRIES);
		assert_eq!(config.polling.delay_secs, DEFAULT_DELAY_SECS);
	}

	#[test]
	fn test_example_config_defaults() {
		let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/example.toml");

		let config = ConfigLoader::new().with_file(&path).load().unwrap();
		assert_eq!(config, CheckerConfig::default());
	}

	#[test]
	fn test_validation_errors() {
		let load = |overrides: ConfigOverrides| ConfigLoader::new().with_overrides(overrides).load();

		let err = load(ConfigOverrides {
			rpc_url: Some("ws://localhost:8546".to_string()),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(err, ConfigError::Input(InputError::RpcUrl(_))));

		let err = load(ConfigOverrides {
			retries: Some(0),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(err, ConfigError::Input(InputError::Retries(0))));

		let err = load(ConfigOverrides {
			delay_secs: Some(-1.0),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(err, ConfigError::Input(InputError::Delay(_))));

		let err = load(ConfigOverrides {
			timeout_secs: Some(0),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(err, ConfigError::ValidationError(_)));
	}

	#[test]
	fn test_missing_file() {
		let err = ConfigLoader::new()
			.with_file("/nonexistent/zk-tx-soundness.toml")
			.load()
			.unwrap_err();
		assert!(matches!(err, ConfigError::FileNotFound(_)));
	}

	#[test]
	fn test_unknown_keys_rejected() {
		let file = write_config(
			r#"
[polling]
retry = 4
"#,
		);

		let err = ConfigLoader::new().with_file(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::ParseError(_)));
	}
}
