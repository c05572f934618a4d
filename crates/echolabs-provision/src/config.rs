// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment-driven configuration for the provisioning run.

use echolabs_common_secret::SecretString;
use std::env;

use crate::error::ConfigError;

/// Admin secret used to open the administrative session.
pub const ENV_ADMIN_SECRET: &str = "KALTURA_ADMIN_SECRET";
/// Partner (account) identifier on the media platform.
pub const ENV_PARTNER_ID: &str = "KALTURA_PARTNER_ID";
/// Optional override for the platform's base URL.
pub const ENV_SERVICE_URL: &str = "KALTURA_SERVICE_URL";

/// Base URL used when [`ENV_SERVICE_URL`] is not set.
pub const DEFAULT_SERVICE_URL: &str = "https://www.kaltura.com";

/// Configuration for one provisioning run, loaded once and read-only after.
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
	/// Admin secret (wrapped to prevent logging).
	pub admin_secret: SecretString,
	/// Partner identifier the session is opened against.
	pub partner_id: String,
	/// Base URL of the media platform.
	pub service_url: String,
}

impl ProvisionConfig {
	/// Load configuration from process environment variables.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::MissingEnvVars`] naming every absent required
	/// variable, not just the first, so the operator can fix them in one go.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Load configuration through an arbitrary lookup function.
	///
	/// Unset and empty values both count as missing. The lookup indirection
	/// keeps unit tests off process-global environment state.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

		let admin_secret = get(ENV_ADMIN_SECRET);
		let partner_id = get(ENV_PARTNER_ID);

		let missing: Vec<String> = [
			(ENV_ADMIN_SECRET, admin_secret.is_none()),
			(ENV_PARTNER_ID, partner_id.is_none()),
		]
		.iter()
		.filter(|(_, absent)| *absent)
		.map(|(name, _)| name.to_string())
		.collect();

		if !missing.is_empty() {
			return Err(ConfigError::MissingEnvVars(missing));
		}

		Ok(Self {
			// Both unwraps guarded by the missing check above.
			admin_secret: SecretString::new(admin_secret.unwrap()),
			partner_id: partner_id.unwrap(),
			service_url: get(ENV_SERVICE_URL).unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string()),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name| map.get(name).cloned()
	}

	#[test]
	fn both_missing_lists_both_names() {
		let err = ProvisionConfig::from_lookup(lookup_from(&[])).unwrap_err();

		let message = err.to_string();
		assert!(message.contains(ENV_ADMIN_SECRET));
		assert!(message.contains(ENV_PARTNER_ID));
	}

	#[test]
	fn one_missing_lists_exactly_that_name() {
		let err = ProvisionConfig::from_lookup(lookup_from(&[(ENV_ADMIN_SECRET, "s3cret")]))
			.unwrap_err();

		let message = err.to_string();
		assert!(!message.contains(ENV_ADMIN_SECRET));
		assert!(message.contains(ENV_PARTNER_ID));
	}

	#[test]
	fn empty_value_counts_as_missing() {
		let err = ProvisionConfig::from_lookup(lookup_from(&[
			(ENV_ADMIN_SECRET, ""),
			(ENV_PARTNER_ID, "12345"),
		]))
		.unwrap_err();

		assert!(err.to_string().contains(ENV_ADMIN_SECRET));
	}

	#[test]
	fn loads_with_default_service_url() {
		let config = ProvisionConfig::from_lookup(lookup_from(&[
			(ENV_ADMIN_SECRET, "s3cret"),
			(ENV_PARTNER_ID, "12345"),
		]))
		.unwrap();

		assert_eq!(config.admin_secret.expose(), "s3cret");
		assert_eq!(config.partner_id, "12345");
		assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
	}

	#[test]
	fn service_url_override_is_honored() {
		let config = ProvisionConfig::from_lookup(lookup_from(&[
			(ENV_ADMIN_SECRET, "s3cret"),
			(ENV_PARTNER_ID, "12345"),
			(ENV_SERVICE_URL, "https://vpc.example.com"),
		]))
		.unwrap();

		assert_eq!(config.service_url, "https://vpc.example.com");
	}

	#[test]
	fn admin_secret_debug_is_redacted() {
		let config = ProvisionConfig::from_lookup(lookup_from(&[
			(ENV_ADMIN_SECRET, "s3cret"),
			(ENV_PARTNER_ID, "12345"),
		]))
		.unwrap();

		let debug = format!("{config:?}");
		assert!(!debug.contains("s3cret"));
		assert!(debug.contains("[REDACTED]"));
	}
}
