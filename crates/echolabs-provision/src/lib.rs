// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Echo Labs integration provisioning.
//!
//! Authenticates as an administrator against the media platform, verifies
//! the Echo Labs category exists, ensures the integration role exists with
//! the required permission set, and mints a long-lived application token
//! scoped to that role.

pub mod config;
pub mod error;
pub mod workflow;

pub use config::{ProvisionConfig, DEFAULT_SERVICE_URL};
pub use error::{ConfigError, ProvisionError, Result};
pub use workflow::{Provisioner, ProvisionedToken};
