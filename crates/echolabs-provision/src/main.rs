// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Echo Labs provisioning binary.
//!
//! On success, prints the new application token's id and secret value to
//! stdout (two lines, nothing else) and exits 0. All diagnostics go to
//! stderr; any failure exits non-zero.

use clap::Parser;
use echolabs_media_api::MediaClient;
use echolabs_provision::{ProvisionConfig, ProvisionError, ProvisionedToken, Provisioner};
use std::process::ExitCode;

/// Provision Echo Labs integration credentials against the media platform.
#[derive(Parser, Debug)]
#[command(name = "echolabs-provision", version)]
struct Args {
	/// Media platform base URL (overrides KALTURA_SERVICE_URL).
	#[arg(long)]
	service_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
	let args = Args::parse();

	// Load .env file if present
	dotenvy::dotenv().ok();

	// Diagnostics go to stderr; stdout is reserved for the provisioned token.
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	match run(args).await {
		Ok(provisioned) => {
			print_token(&provisioned);
			ExitCode::SUCCESS
		}
		// Operator-actionable precondition, reported without error framing.
		Err(err @ ProvisionError::CategoryMissing { .. }) => {
			eprintln!("{err}");
			ExitCode::FAILURE
		}
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}

async fn run(args: Args) -> Result<ProvisionedToken, ProvisionError> {
	let mut config = ProvisionConfig::from_env()?;
	if let Some(service_url) = args.service_url {
		config.service_url = service_url;
	}

	tracing::info!(
		service_url = %config.service_url,
		partner_id = %config.partner_id,
		"starting provisioning run"
	);

	let client = MediaClient::new(&config.service_url);
	Provisioner::new(client).run(&config).await
}

fn print_token(provisioned: &ProvisionedToken) {
	println!("Application Token ID: {}", provisioned.token_id);
	println!("Application Token: {}", provisioned.token_secret.expose());
}
