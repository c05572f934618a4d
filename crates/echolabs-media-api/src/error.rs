// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Media platform API error types.

use thiserror::Error;

/// Errors that can occur when calling the media platform.
///
/// [`ApiError::RoleNameConflict`] is the only condition callers recover from
/// in-process; it is decoded into its own variant at the response boundary so
/// that callers match on the variant instead of sniffing error-code strings.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The HTTP request failed (network error, timeout, TLS, etc.).
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	/// A role with the requested name already exists on the platform.
	#[error("role name already exists")]
	RoleNameConflict,

	/// The platform returned a service fault envelope.
	#[error("service error {code}: {message}")]
	Service { code: String, message: String },

	/// The response body could not be decoded as the expected type.
	#[error("unexpected response from {service}.{action}: {detail}")]
	UnexpectedResponse {
		service: &'static str,
		action: &'static str,
		detail: String,
	},
}

pub type Result<T> = std::result::Result<T, ApiError>;
