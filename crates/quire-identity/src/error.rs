// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Identity error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
	/// Unknown username or wrong password. The two are deliberately not
	/// distinguished.
	#[error("invalid username or password")]
	InvalidCredentials,

	#[error("user not found: {0}")]
	UserNotFound(String),

	#[error("username already taken: {0}")]
	DuplicateUsername(String),

	#[error("password hashing failed: {0}")]
	Hashing(String),
}

impl IdentityError {
	/// Returns true if the error was caused by the caller's input.
	pub fn is_client_error(&self) -> bool {
		!matches!(self, IdentityError::Hashing(_))
	}
}

pub type Result<T> = std::result::Result<T, IdentityError>;
