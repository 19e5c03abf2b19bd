// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP client for a remote policy decision point (PDP).
//!
//! The PDP speaks the Permit-style `/allowed` protocol: the subject, action
//! and resource attributes are posted as JSON and the reply carries a single
//! `allow` flag.

use std::time::Duration;

use quire_common_secret::SecretString;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument, trace};

use crate::abac::{Resource, Subject};
use crate::error::PolicyServiceError;
use crate::types::Action;

pub const DEFAULT_TENANT: &str = "default";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Client for the remote policy decision point.
#[derive(Debug, Clone)]
pub struct PdpClient {
	http_client: Client,
	base_url: String,
	token: Option<SecretString>,
	tenant: String,
	timeout: Duration,
}

#[derive(Debug, Serialize)]
struct AllowedRequest<'a> {
	user: PdpUser<'a>,
	action: &'a str,
	resource: PdpResource<'a>,
}

#[derive(Debug, Serialize)]
struct PdpUser<'a> {
	key: &'a str,
	attributes: PdpUserAttributes<'a>,
}

#[derive(Debug, Serialize)]
struct PdpUserAttributes<'a> {
	role: &'a str,
}

#[derive(Debug, Serialize)]
struct PdpResource<'a> {
	#[serde(rename = "type")]
	resource_type: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	key: Option<&'a str>,
	tenant: &'a str,
	attributes: PdpResourceAttributes<'a>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct PdpResourceAttributes<'a> {
	#[serde(skip_serializing_if = "Option::is_none")]
	owner_id: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	is_public: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct AllowedResponse {
	allow: bool,
}

impl PdpClient {
	/// Creates a client for the PDP at `base_url`.
	pub fn new(base_url: impl Into<String>) -> Result<Self, PolicyServiceError> {
		let http_client = quire_common_http::builder().build()?;

		Ok(Self {
			http_client,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			token: None,
			tenant: DEFAULT_TENANT.to_string(),
			timeout: DEFAULT_TIMEOUT,
		})
	}

	/// Sets the bearer token sent with every request.
	pub fn with_token(mut self, token: SecretString) -> Self {
		self.token = Some(token);
		self
	}

	pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
		self.tenant = tenant.into();
		self
	}

	/// Sets the per-check timeout. The whole exchange must finish within it.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// Asks the PDP whether `subject` may perform `action` on `resource`.
	#[instrument(
		skip(self, subject, resource),
		fields(user_id = %subject.user_id, action = %action, resource_type = %resource.resource_type())
	)]
	pub async fn check(
		&self,
		subject: &Subject,
		action: Action,
		resource: &Resource,
	) -> Result<bool, PolicyServiceError> {
		match tokio::time::timeout(self.timeout, self.check_inner(subject, action, resource)).await {
			Ok(result) => result,
			Err(_) => {
				error!(timeout_ms = self.timeout.as_millis() as u64, "PDP request timed out");
				Err(PolicyServiceError::Timeout)
			}
		}
	}

	async fn check_inner(
		&self,
		subject: &Subject,
		action: Action,
		resource: &Resource,
	) -> Result<bool, PolicyServiceError> {
		let (key, attributes) = match resource {
			Resource::Document(attrs) => (
				attrs.id.as_ref().map(|id| id.as_str()),
				PdpResourceAttributes {
					owner_id: attrs.owner_id.as_ref().map(|id| id.as_str()),
					is_public: attrs.is_specific().then_some(attrs.is_public),
				},
			),
			Resource::AdminPanel => (None, PdpResourceAttributes::default()),
		};

		let body = AllowedRequest {
			user: PdpUser {
				key: subject.user_id.as_str(),
				attributes: PdpUserAttributes {
					role: subject.role.as_str(),
				},
			},
			action: action.as_str(),
			resource: PdpResource {
				resource_type: resource.resource_type().as_str(),
				key,
				tenant: &self.tenant,
				attributes,
			},
		};

		let url = format!("{}/allowed", self.base_url);
		debug!(url = %url, "Sending authorization check to PDP");

		let mut request = self.http_client.post(&url).json(&body);
		if let Some(token) = &self.token {
			request = request.bearer_auth(token.expose());
		}

		let response = request.send().await.map_err(|e| {
			if e.is_timeout() {
				error!("PDP request timed out");
				return PolicyServiceError::Timeout;
			}
			error!(error = %e, "Network error during PDP request");
			PolicyServiceError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response from PDP");

		if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
			error!(status = status.as_u16(), "PDP rejected the access token");
			return Err(PolicyServiceError::Unauthorized);
		}

		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			error!(status = status.as_u16(), body = %message, "PDP error");
			return Err(PolicyServiceError::ApiError {
				status: status.as_u16(),
				message,
			});
		}

		let text = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read PDP response body");
			PolicyServiceError::Network(e)
		})?;
		trace!(body = %text, "PDP response body");

		let parsed: AllowedResponse = serde_json::from_str(&text).map_err(|e| {
			error!(error = %e, "Failed to parse PDP response");
			PolicyServiceError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		Ok(parsed.allow)
	}
}
