// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Document store error types.

use quire_authz::{Action, DocumentId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	/// The input was rejected before any authorization check.
	#[error("validation error: {0}")]
	Validation(String),

	/// The decider denied the action.
	#[error("not authorized to {0} this document")]
	PermissionDenied(Action),

	/// No document with this id, or one the subject may not see.
	#[error("document not found: {0}")]
	NotFound(DocumentId),
}

impl DocumentError {
	/// All store errors are caused by the caller; the store itself cannot fail.
	pub fn is_client_error(&self) -> bool {
		true
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, DocumentError::NotFound(_))
	}

	pub fn is_permission_denied(&self) -> bool {
		matches!(self, DocumentError::PermissionDenied(_))
	}
}

pub type Result<T> = std::result::Result<T, DocumentError>;
