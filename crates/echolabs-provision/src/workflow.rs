// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The provisioning workflow.
//!
//! Four ordered steps against the media platform, each depending on the
//! previous one: open an admin session, verify the Echo Labs category exists,
//! resolve or create the integration role, and mint the application token.
//! The only in-process recovery is the role lookup after a name conflict;
//! every other failure aborts the run. There are no retries and no rollback:
//! a role created here stays behind if token creation then fails, and
//! re-running after success mints a second, independent token.

use chrono::Utc;
use echolabs_common_secret::SecretString;
use echolabs_media_api::{
	ApiError, AppTokenHashType, AppTokenParams, CategoryFilter, FilterPager, MediaApi,
	SessionToken, SessionType, UserRoleFilter, UserRoleParams, UserRoleStatus,
};

use crate::config::ProvisionConfig;
use crate::error::{ProvisionError, Result};

/// Privacy context scoping the category, session, and token privileges.
pub const PRIVACY_CONTEXT: &str = "echolabs";
/// Name (and description) of the integration role.
pub const ROLE_NAME: &str = "Echo Labs Integration";
/// Permission set the role must carry, compared verbatim.
pub const ROLE_PERMISSIONS: &str = "CONTENT_MANAGE_BASE,CAPTION_MODIFY";
/// Description attached to the minted application token.
pub const APP_TOKEN_DESCRIPTION: &str = "Echo Labs App Token";

/// Admin session lifetime in seconds.
const SESSION_TTL_SECS: i64 = 86_400;
/// Application token lifetime: ten years in seconds.
const APP_TOKEN_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Outcome of a successful run. The caller decides how and where to print.
#[derive(Debug, Clone)]
pub struct ProvisionedToken {
	/// Identifier of the minted application token.
	pub token_id: String,
	/// The token's secret value (wrapped to prevent logging).
	pub token_secret: SecretString,
}

/// Session privileges granted to holders of the application token.
fn token_privileges(role_id: i64) -> String {
	format!("list:*,edit:*,setrole:{role_id},privacycontext:{PRIVACY_CONTEXT}")
}

/// Runs the provisioning sequence against an injected [`MediaApi`].
#[derive(Debug)]
pub struct Provisioner<A> {
	api: A,
}

impl<A: MediaApi> Provisioner<A> {
	pub fn new(api: A) -> Self {
		Self { api }
	}

	/// Execute the full sequence. Aborts on the first unrecoverable failure.
	pub async fn run(&self, config: &ProvisionConfig) -> Result<ProvisionedToken> {
		let ks = self.authenticate(config).await?;
		self.verify_category(&ks).await?;
		let role_id = self.resolve_role(&ks).await?;
		self.mint_token(&ks, role_id).await
	}

	/// Step 1: open the admin session the rest of the run is scoped to.
	async fn authenticate(&self, config: &ProvisionConfig) -> Result<SessionToken> {
		let ks = self
			.api
			.session_start(
				config.admin_secret.expose(),
				"",
				SessionType::Admin,
				&config.partner_id,
				SESSION_TTL_SECS,
				// The session itself is tagged so the category check below
				// can see privacy-context-scoped entries.
				&format!("privacycontext:{PRIVACY_CONTEXT}"),
			)
			.await?;
		tracing::info!(partner_id = %config.partner_id, "admin session opened");
		Ok(ks)
	}

	/// Step 2: the category must pre-exist; this workflow never creates it.
	async fn verify_category(&self, ks: &SessionToken) -> Result<()> {
		let categories = self
			.api
			.category_list(
				ks,
				&CategoryFilter::by_privacy_context(PRIVACY_CONTEXT),
				&FilterPager::default(),
			)
			.await?;

		match categories.objects.first() {
			Some(category) => {
				tracing::info!(category_id = category.id, "found integration category");
				Ok(())
			}
			None => Err(ProvisionError::CategoryMissing {
				privacy_context: PRIVACY_CONTEXT.to_string(),
			}),
		}
	}

	/// Step 3: create the integration role, falling back to a lookup when
	/// the name is already taken. An existing role is only adopted if its
	/// permission set matches the required one exactly.
	async fn resolve_role(&self, ks: &SessionToken) -> Result<i64> {
		let params = UserRoleParams::new(
			ROLE_NAME,
			ROLE_NAME,
			ROLE_PERMISSIONS,
			UserRoleStatus::Active,
		);

		match self.api.user_role_add(ks, &params).await {
			Ok(role) => {
				tracing::info!(role_id = role.id, "created integration role");
				Ok(role.id)
			}
			Err(ApiError::RoleNameConflict) => {
				tracing::debug!(role = ROLE_NAME, "role already exists, looking it up");
				let listed = self
					.api
					.user_role_list(
						ks,
						&UserRoleFilter::by_name(ROLE_NAME),
						&FilterPager::default(),
					)
					.await?;

				let existing = listed
					.objects
					.into_iter()
					.next()
					.ok_or_else(|| ProvisionError::RoleVanished(ROLE_NAME.to_string()))?;

				if existing.permission_names != ROLE_PERMISSIONS {
					return Err(ProvisionError::RolePermissionMismatch {
						role_name: ROLE_NAME.to_string(),
						required: ROLE_PERMISSIONS.to_string(),
						found: existing.permission_names,
					});
				}

				tracing::info!(role_id = existing.id, "reusing existing integration role");
				Ok(existing.id)
			}
			Err(other) => Err(other.into()),
		}
	}

	/// Step 4: mint the long-lived application token scoped to the role.
	async fn mint_token(&self, ks: &SessionToken, role_id: i64) -> Result<ProvisionedToken> {
		let params = AppTokenParams::new(
			APP_TOKEN_DESCRIPTION,
			Utc::now().timestamp() + APP_TOKEN_TTL_SECS,
			AppTokenHashType::Sha256,
			SessionType::User,
			token_privileges(role_id),
		);

		let token = self.api.app_token_add(ks, &params).await?;
		tracing::info!(token_id = %token.id, "application token created");

		Ok(ProvisionedToken {
			token_id: token.id,
			token_secret: token.token,
		})
	}
}
