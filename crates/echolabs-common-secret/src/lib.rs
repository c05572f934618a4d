// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret wrapper type that prevents accidental logging of sensitive values.
//!
//! The provisioning tool handles an admin secret, a session token, and the
//! minted application token value. All three are carried as [`SecretString`]
//! so that `Debug` and `Display` formatting can never leak them into logs or
//! error messages. The inner value is zeroized when dropped.

use std::fmt;
use zeroize::Zeroizing;

/// A string whose value is redacted in `Debug` and `Display` output.
///
/// Call [`SecretString::expose`] at the one place the raw value is actually
/// needed (signing a request, printing the provisioned token on success).
#[derive(Clone)]
pub struct SecretString(Zeroizing<String>);

impl SecretString {
	/// Wrap a sensitive string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(Zeroizing::new(value.into()))
	}

	/// Access the raw value.
	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[REDACTED]")
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[REDACTED]")
	}
}
