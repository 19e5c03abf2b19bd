// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with a consistent User-Agent header.
//!
//! Outbound calls from Quire (today only the policy decision point) go
//! through clients built here so that the remote side can identify the
//! caller and its version.

use reqwest::{Client, ClientBuilder};

/// Creates a new HTTP client builder with the standard Quire User-Agent.
///
/// Use this when the caller needs to customize the client further.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard Quire User-Agent string: `quire/{version}`.
pub fn user_agent() -> String {
	format!("quire/{}", env!("CARGO_PKG_VERSION"))
}
