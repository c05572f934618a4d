// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response objects for the media platform's JSON API.
//!
//! Field names follow the platform's camelCase wire format; polymorphic
//! request objects carry the `objectType` discriminator the platform expects.
//! Enum wire values are the platform's own (session types and role statuses
//! are integers, hash types are strings).

use echolabs_common_secret::SecretString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Session
// =============================================================================

/// Kind of session to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionType {
	/// Limited-privilege session for end users and app-token holders.
	User = 0,
	/// Full-privilege administrative session.
	Admin = 2,
}

impl Serialize for SessionType {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_i32(*self as i32)
	}
}

/// Opaque authenticated-session token ("KS") returned by `session.start`.
///
/// Required on every subsequent call; threaded through explicitly rather than
/// stored in the client so tests can substitute fake transports freely.
#[derive(Debug, Clone)]
pub struct SessionToken(SecretString);

impl SessionToken {
	pub fn new(value: impl Into<String>) -> Self {
		Self(SecretString::new(value))
	}

	/// Access the raw token for attaching to a request.
	pub fn expose(&self) -> &str {
		self.0.expose()
	}
}

// =============================================================================
// Pagination
// =============================================================================

/// Pager for list actions. The default pager requests the platform's default
/// page, which is all this workflow ever needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPager {
	#[serde(rename = "objectType")]
	object_type: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_size: Option<i32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_index: Option<i32>,
}

impl Default for FilterPager {
	fn default() -> Self {
		Self {
			object_type: "KalturaFilterPager",
			page_size: None,
			page_index: None,
		}
	}
}

// =============================================================================
// Categories
// =============================================================================

/// Filter for `category.list`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilter {
	#[serde(rename = "objectType")]
	object_type: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub privacy_context_equal: Option<String>,
}

impl CategoryFilter {
	pub fn by_privacy_context(privacy_context: impl Into<String>) -> Self {
		Self {
			object_type: "KalturaCategoryFilter",
			privacy_context_equal: Some(privacy_context.into()),
		}
	}
}

/// A single category entry from `category.list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
	pub id: i64,
	#[serde(default)]
	pub name: String,
}

/// Response envelope for `category.list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
	#[serde(default)]
	pub objects: Vec<Category>,
	#[serde(default)]
	pub total_count: i64,
}

// =============================================================================
// User roles
// =============================================================================

/// Lifecycle status of a user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRoleStatus {
	Active = 1,
	Blocked = 2,
	Deleted = 3,
}

impl Serialize for UserRoleStatus {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_i32(*self as i32)
	}
}

/// Parameters for `userRole.add`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleParams {
	#[serde(rename = "objectType")]
	object_type: &'static str,
	pub name: String,
	pub description: String,
	/// Comma-joined list of permission names granted by the role.
	pub permission_names: String,
	pub status: UserRoleStatus,
}

impl UserRoleParams {
	pub fn new(
		name: impl Into<String>,
		description: impl Into<String>,
		permission_names: impl Into<String>,
		status: UserRoleStatus,
	) -> Self {
		Self {
			object_type: "KalturaUserRole",
			name: name.into(),
			description: description.into(),
			permission_names: permission_names.into(),
			status,
		}
	}
}

/// Filter for `userRole.list`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleFilter {
	#[serde(rename = "objectType")]
	object_type: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name_equal: Option<String>,
}

impl UserRoleFilter {
	pub fn by_name(name: impl Into<String>) -> Self {
		Self {
			object_type: "KalturaUserRoleFilter",
			name_equal: Some(name.into()),
		}
	}
}

/// A user role as returned by the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
	pub id: i64,
	#[serde(default)]
	pub name: String,
	/// Comma-joined permission names, compared verbatim by callers.
	#[serde(default)]
	pub permission_names: String,
}

/// Response envelope for `userRole.list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleListResponse {
	#[serde(default)]
	pub objects: Vec<UserRole>,
	#[serde(default)]
	pub total_count: i64,
}

// =============================================================================
// App tokens
// =============================================================================

/// Hash algorithm the platform uses when a token holder computes the session
/// start hash. String-valued on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppTokenHashType {
	#[serde(rename = "SHA1")]
	Sha1,
	#[serde(rename = "SHA256")]
	Sha256,
	#[serde(rename = "SHA512")]
	Sha512,
}

/// Parameters for `appToken.add`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppTokenParams {
	#[serde(rename = "objectType")]
	object_type: &'static str,
	pub description: String,
	/// Absolute expiry as a Unix timestamp in seconds.
	pub expiry: i64,
	pub hash_type: AppTokenHashType,
	pub session_type: SessionType,
	/// Privilege string applied to sessions opened with this token.
	pub session_privileges: String,
}

impl AppTokenParams {
	pub fn new(
		description: impl Into<String>,
		expiry: i64,
		hash_type: AppTokenHashType,
		session_type: SessionType,
		session_privileges: impl Into<String>,
	) -> Self {
		Self {
			object_type: "KalturaAppToken",
			description: description.into(),
			expiry,
			hash_type,
			session_type,
			session_privileges: session_privileges.into(),
		}
	}
}

/// A provisioned application token as returned by `appToken.add`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppToken {
	pub id: String,
	/// The token's secret value (wrapped to prevent logging).
	#[serde(deserialize_with = "deserialize_secret_string")]
	pub token: SecretString,
}

fn deserialize_secret_string<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
	D: Deserializer<'de>,
{
	let s = String::deserialize(deserializer)?;
	Ok(SecretString::new(s))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn session_type_serializes_as_int() {
		assert_eq!(serde_json::to_string(&SessionType::User).unwrap(), "0");
		assert_eq!(serde_json::to_string(&SessionType::Admin).unwrap(), "2");
	}

	#[test]
	fn role_status_serializes_as_int() {
		assert_eq!(serde_json::to_string(&UserRoleStatus::Active).unwrap(), "1");
	}

	#[test]
	fn hash_type_serializes_as_string() {
		assert_eq!(
			serde_json::to_string(&AppTokenHashType::Sha256).unwrap(),
			"\"SHA256\""
		);
	}

	#[test]
	fn role_params_carry_object_type_and_camel_case_fields() {
		let params = UserRoleParams::new(
			"Echo Labs Integration",
			"Echo Labs Integration",
			"CONTENT_MANAGE_BASE,CAPTION_MODIFY",
			UserRoleStatus::Active,
		);
		let json = serde_json::to_value(&params).unwrap();
		assert_eq!(json["objectType"], "KalturaUserRole");
		assert_eq!(json["permissionNames"], "CONTENT_MANAGE_BASE,CAPTION_MODIFY");
		assert_eq!(json["status"], 1);
	}

	#[test]
	fn category_filter_serializes_privacy_context() {
		let filter = CategoryFilter::by_privacy_context("echolabs");
		let json = serde_json::to_value(&filter).unwrap();
		assert_eq!(json["objectType"], "KalturaCategoryFilter");
		assert_eq!(json["privacyContextEqual"], "echolabs");
	}

	#[test]
	fn role_list_response_deserializes() {
		let json = r#"{
			"objects": [
				{"id": 42, "name": "Echo Labs Integration", "permissionNames": "CONTENT_MANAGE_BASE,CAPTION_MODIFY", "status": 1}
			],
			"totalCount": 1,
			"objectType": "KalturaUserRoleListResponse"
		}"#;

		let response: UserRoleListResponse = serde_json::from_str(json).unwrap();
		assert_eq!(response.total_count, 1);
		assert_eq!(response.objects[0].id, 42);
		assert_eq!(
			response.objects[0].permission_names,
			"CONTENT_MANAGE_BASE,CAPTION_MODIFY"
		);
	}

	#[test]
	fn app_token_secret_is_not_logged() {
		let json = r#"{"id": "0_abc123", "token": "deadbeefcafe"}"#;
		let token: AppToken = serde_json::from_str(json).unwrap();

		let debug = format!("{token:?}");
		assert!(!debug.contains("deadbeefcafe"));
		assert!(debug.contains("[REDACTED]"));
		assert_eq!(token.token.expose(), "deadbeefcafe");
	}

	#[test]
	fn session_token_debug_is_redacted() {
		let ks = SessionToken::new("djJ8c2VjcmV0");
		assert!(!format!("{ks:?}").contains("djJ8c2VjcmV0"));
	}
}
