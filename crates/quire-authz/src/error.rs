// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for authorization.

use thiserror::Error;

/// A role, action or resource type string that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseError {
	pub kind: &'static str,
	pub value: String,
}

impl ParseError {
	pub(crate) fn new(kind: &'static str, value: &str) -> Self {
		Self {
			kind,
			value: value.to_string(),
		}
	}
}

/// Failures talking to the remote policy decision point.
///
/// These never reach callers of a decider: the
/// [`RemoteDecider`](crate::RemoteDecider) resolves them with its
/// configured failure policy and logs them.
#[derive(Debug, Error)]
pub enum PolicyServiceError {
	/// The PDP did not answer within the configured timeout.
	#[error("policy decision point timed out")]
	Timeout,

	/// Network-level error during HTTP communication.
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The PDP rejected our token.
	#[error("policy decision point rejected the access token")]
	Unauthorized,

	/// The PDP returned a non-success status.
	#[error("policy decision point error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// The PDP answered with a body we could not interpret.
	#[error("invalid response from policy decision point: {0}")]
	InvalidResponse(String),
}

impl PolicyServiceError {
	/// Returns true if retrying the same request later could succeed.
	pub fn is_transient(&self) -> bool {
		match self {
			PolicyServiceError::Timeout => true,
			PolicyServiceError::Network(_) => true,
			PolicyServiceError::Unauthorized => false,
			PolicyServiceError::ApiError { status, .. } => *status >= 500,
			PolicyServiceError::InvalidResponse(_) => false,
		}
	}
}
