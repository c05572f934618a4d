// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Provisioning error taxonomy.
//!
//! Only [`ApiError::RoleNameConflict`] is recovered from in-process (by the
//! workflow's fallback role lookup); everything here is fatal and propagates
//! to the binary's single top-level handler.

use echolabs_media_api::ApiError;
use thiserror::Error;

/// Errors loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Required environment variables that are unset or empty, all reported
	/// in one message.
	#[error("missing environment variables: {}", .0.join(", "))]
	MissingEnvVars(Vec<String>),
}

/// Errors that can abort a provisioning run.
#[derive(Debug, Error)]
pub enum ProvisionError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The required category does not exist. Operator-actionable, not a
	/// crash: the message tells them what to create before re-running.
	#[error(
		"category with privacy context \"{privacy_context}\" not found; \
		 create one in the management console, then re-run provisioning"
	)]
	CategoryMissing { privacy_context: String },

	/// An existing role carries a different permission set than required.
	/// Both strings are surfaced verbatim; the role is never adopted or
	/// repaired.
	#[error("role \"{role_name}\" has invalid permissions. Required: \"{required}\", found: \"{found}\"")]
	RolePermissionMismatch {
		role_name: String,
		required: String,
		found: String,
	},

	/// Role creation reported a name conflict but the follow-up lookup found
	/// no role with that name.
	#[error("role \"{0}\" was reported as existing but could not be found by name")]
	RoleVanished(String),

	/// Any other remote-call failure; propagates unhandled.
	#[error(transparent)]
	Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
