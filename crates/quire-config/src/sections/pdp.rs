// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote policy decision point configuration section.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use quire_common_secret::SecretString;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Outcome applied when the PDP cannot answer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PdpFailurePolicy {
	#[default]
	Closed,
	Open,
}

impl fmt::Display for PdpFailurePolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PdpFailurePolicy::Closed => write!(f, "closed"),
			PdpFailurePolicy::Open => write!(f, "open"),
		}
	}
}

impl FromStr for PdpFailurePolicy {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"closed" | "deny" => Ok(PdpFailurePolicy::Closed),
			"open" | "allow" => Ok(PdpFailurePolicy::Open),
			other => Err(format!("expected 'open' or 'closed', got '{other}'")),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PdpConfigLayer {
	pub enabled: Option<bool>,
	pub url: Option<String>,
	pub token: Option<SecretString>,
	pub timeout_ms: Option<u64>,
	pub failure_policy: Option<PdpFailurePolicy>,
	pub tenant: Option<String>,
}

impl PdpConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.token.is_some() {
			self.token = other.token;
		}
		if other.timeout_ms.is_some() {
			self.timeout_ms = other.timeout_ms;
		}
		if other.failure_policy.is_some() {
			self.failure_policy = other.failure_policy;
		}
		if other.tenant.is_some() {
			self.tenant = other.tenant;
		}
	}

	/// A URL alone turns the PDP on unless `enabled` says otherwise.
	pub fn finalize(self) -> PdpConfig {
		PdpConfig {
			enabled: self.enabled.unwrap_or(self.url.is_some()),
			url: self.url,
			token: self.token,
			timeout_ms: self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
			failure_policy: self.failure_policy.unwrap_or_default(),
			tenant: self.tenant,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PdpConfig {
	pub enabled: bool,
	pub url: Option<String>,
	pub token: Option<SecretString>,
	pub timeout_ms: u64,
	pub failure_policy: PdpFailurePolicy,
	/// Tenant sent with every check; the client default when unset.
	pub tenant: Option<String>,
}

impl PdpConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}

impl Default for PdpConfig {
	fn default() -> Self {
		PdpConfigLayer::default().finalize()
	}
}
