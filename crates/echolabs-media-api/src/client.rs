// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Production `reqwest` implementation of [`MediaApi`].
//!
//! The platform exposes one JSON endpoint per service action at
//! `{service_url}/api_v3/service/{service}/action/{action}`. Requests carry
//! `format: 1` to select JSON responses and, for authenticated calls, the
//! session token as `ks`. Service faults are reported inside an HTTP 200 as a
//! `KalturaAPIException` envelope, so fault decoding happens on the body, not
//! the status line.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::api::MediaApi;
use crate::error::{ApiError, Result};
use crate::types::{
	AppToken, AppTokenParams, CategoryFilter, CategoryListResponse, FilterPager, SessionToken,
	SessionType, UserRole, UserRoleFilter, UserRoleListResponse, UserRoleParams,
};

/// Error code the platform reports when a role name is taken.
const ROLE_NAME_ALREADY_EXISTS: &str = "ROLE_NAME_ALREADY_EXISTS";

/// JSON response format selector.
const FORMAT_JSON: i32 = 1;

/// Service fault envelope returned with HTTP 200.
#[derive(Debug, serde::Deserialize)]
struct ApiExceptionEnvelope {
	#[serde(rename = "objectType")]
	object_type: String,
	#[serde(default)]
	code: String,
	#[serde(default)]
	message: String,
}

/// Client for the media platform's JSON API.
#[derive(Debug, Clone)]
pub struct MediaClient {
	service_url: String,
	http: reqwest::Client,
}

impl MediaClient {
	/// Create a client for the platform at `service_url`
	/// (e.g. `https://www.kaltura.com`).
	pub fn new(service_url: impl Into<String>) -> Self {
		Self {
			service_url: service_url.into().trim_end_matches('/').to_string(),
			http: echolabs_common_http::new_client(),
		}
	}

	/// Create a client with a caller-supplied `reqwest` client.
	pub fn with_http_client(service_url: impl Into<String>, http: reqwest::Client) -> Self {
		Self {
			service_url: service_url.into().trim_end_matches('/').to_string(),
			http,
		}
	}

	/// POST one service action and decode the response.
	///
	/// `body` must be a JSON object; `format` (and `ks` when given) are
	/// attached here so individual actions only supply their own parameters.
	async fn call<T: DeserializeOwned>(
		&self,
		service: &'static str,
		action: &'static str,
		ks: Option<&SessionToken>,
		mut body: Value,
	) -> Result<T> {
		let url = format!(
			"{}/api_v3/service/{}/action/{}",
			self.service_url, service, action
		);

		if let Some(params) = body.as_object_mut() {
			params.insert("format".to_string(), json!(FORMAT_JSON));
			if let Some(ks) = ks {
				params.insert("ks".to_string(), json!(ks.expose()));
			}
		}

		tracing::debug!(service, action, "calling media platform");

		let response = self.http.post(&url).json(&body).send().await?;
		let status = response.status();
		let text = response.text().await?;

		if !status.is_success() {
			return Err(ApiError::Service {
				code: status.as_str().to_string(),
				message: text,
			});
		}

		if let Ok(envelope) = serde_json::from_str::<ApiExceptionEnvelope>(&text) {
			if envelope.object_type == "KalturaAPIException" {
				tracing::debug!(service, action, code = %envelope.code, "service fault");
				if envelope.code == ROLE_NAME_ALREADY_EXISTS {
					return Err(ApiError::RoleNameConflict);
				}
				return Err(ApiError::Service {
					code: envelope.code,
					message: envelope.message,
				});
			}
		}

		serde_json::from_str(&text).map_err(|e| ApiError::UnexpectedResponse {
			service,
			action,
			detail: e.to_string(),
		})
	}
}

#[async_trait]
impl MediaApi for MediaClient {
	#[tracing::instrument(skip_all, fields(partner_id))]
	async fn session_start(
		&self,
		secret: &str,
		user_id: &str,
		session_type: SessionType,
		partner_id: &str,
		ttl_secs: i64,
		privileges: &str,
	) -> Result<SessionToken> {
		// session.start returns the bare KS as a JSON string.
		let ks: String = self
			.call(
				"session",
				"start",
				None,
				json!({
					"secret": secret,
					"userId": user_id,
					"type": session_type,
					"partnerId": partner_id,
					"expiry": ttl_secs,
					"privileges": privileges,
				}),
			)
			.await?;
		Ok(SessionToken::new(ks))
	}

	async fn category_list(
		&self,
		ks: &SessionToken,
		filter: &CategoryFilter,
		pager: &FilterPager,
	) -> Result<CategoryListResponse> {
		self.call(
			"category",
			"list",
			Some(ks),
			json!({ "filter": filter, "pager": pager }),
		)
		.await
	}

	async fn user_role_add(&self, ks: &SessionToken, role: &UserRoleParams) -> Result<UserRole> {
		self.call("userrole", "add", Some(ks), json!({ "userRole": role }))
			.await
	}

	async fn user_role_list(
		&self,
		ks: &SessionToken,
		filter: &UserRoleFilter,
		pager: &FilterPager,
	) -> Result<UserRoleListResponse> {
		self.call(
			"userrole",
			"list",
			Some(ks),
			json!({ "filter": filter, "pager": pager }),
		)
		.await
	}

	async fn app_token_add(&self, ks: &SessionToken, token: &AppTokenParams) -> Result<AppToken> {
		self.call("apptoken", "add", Some(ks), json!({ "appToken": token }))
			.await
	}
}
