// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Typed client for the media platform's JSON API.
//!
//! This crate covers exactly the services the Echo Labs provisioning
//! workflow consumes: `session`, `category`, `userRole`, and `appToken`.
//! [`MediaApi`] is the contract the workflow is written against;
//! [`MediaClient`] is the production implementation over `reqwest`.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::MediaApi;
pub use client::MediaClient;
pub use error::{ApiError, Result};
pub use types::{
	AppToken, AppTokenHashType, AppTokenParams, Category, CategoryFilter, CategoryListResponse,
	FilterPager, SessionToken, SessionType, UserRole, UserRoleFilter, UserRoleListResponse,
	UserRoleParams, UserRoleStatus,
};
