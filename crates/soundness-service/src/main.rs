use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use soundness_service::cli::Args;
use soundness_service::{CheckError, CheckService, EXIT_INVALID, EXIT_OK};
use std::process::ExitCode;
use tokio::time::Instant;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	let started = Instant::now();

	// Argument errors exit with the invalid-input code rather than clap's default.
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(err) => {
			let _ = err.print();
			return match err.kind() {
				ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(EXIT_OK),
				_ => ExitCode::from(EXIT_INVALID),
			};
		}
	};

	if let Err(e) = setup_tracing(&args.log_level) {
		eprintln!("❌ Failed to initialise logging: {:#}", e);
		return ExitCode::from(EXIT_INVALID);
	}

	match run(args, started).await {
		Ok(()) => ExitCode::from(EXIT_OK),
		Err(e) => {
			eprintln!("❌ {}", e);
			ExitCode::from(e.exit_code())
		}
	}
}

async fn run(args: Args, started: Instant) -> Result<(), CheckError> {
	let config = args.load_config()?;
	debug!(polling = ?config.polling, timeout_secs = config.rpc.timeout_secs, "Configuration resolved");

	let service = CheckService::new(&config, &args.tx)?.started_at(started);
	let source = service.connect()?;
	let report = service.run(&source).await?;

	if args.json {
		println!("{}", report.to_json()?);
	} else {
		print!("{}", report.render_text());
	}

	Ok(())
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init()?;

	Ok(())
}
