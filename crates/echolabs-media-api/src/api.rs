// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The abstract contract the provisioning workflow consumes.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
	AppToken, AppTokenParams, CategoryFilter, CategoryListResponse, FilterPager, SessionToken,
	SessionType, UserRole, UserRoleFilter, UserRoleListResponse, UserRoleParams,
};

/// The subset of the media platform consumed by the provisioning workflow.
///
/// [`MediaClient`](crate::MediaClient) is the production implementation; tests
/// substitute fakes. The session token is an explicit argument on every
/// authenticated call rather than client state, so a fake needs no setup
/// choreography beyond returning one from [`session_start`].
///
/// [`session_start`]: MediaApi::session_start
#[async_trait]
pub trait MediaApi {
	/// Open a session. Returns the opaque session token required by all
	/// other calls.
	async fn session_start(
		&self,
		secret: &str,
		user_id: &str,
		session_type: SessionType,
		partner_id: &str,
		ttl_secs: i64,
		privileges: &str,
	) -> Result<SessionToken>;

	/// List categories matching `filter`.
	async fn category_list(
		&self,
		ks: &SessionToken,
		filter: &CategoryFilter,
		pager: &FilterPager,
	) -> Result<CategoryListResponse>;

	/// Create a user role. Fails with
	/// [`ApiError::RoleNameConflict`](crate::ApiError::RoleNameConflict) if a
	/// role with the same name already exists.
	async fn user_role_add(&self, ks: &SessionToken, role: &UserRoleParams) -> Result<UserRole>;

	/// List user roles matching `filter`.
	async fn user_role_list(
		&self,
		ks: &SessionToken,
		filter: &UserRoleFilter,
		pager: &FilterPager,
	) -> Result<UserRoleListResponse>;

	/// Mint an application token.
	async fn app_token_add(&self, ks: &SessionToken, token: &AppTokenParams) -> Result<AppToken>;
}
