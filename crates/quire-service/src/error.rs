// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Service error types.

use quire_authz::{PolicyServiceError, UserId};
use quire_config::ConfigError;
use quire_documents::DocumentError;
use quire_identity::IdentityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
	/// The acting subject id is not in the directory. Treated as an
	/// authentication failure.
	#[error("unknown subject: {0}")]
	UnknownSubject(UserId),

	#[error(transparent)]
	Document(#[from] DocumentError),

	#[error(transparent)]
	Identity(#[from] IdentityError),

	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),

	/// The PDP client could not be built.
	#[error("policy decision point setup failed: {0}")]
	PolicyService(#[from] PolicyServiceError),
}

impl ServiceError {
	/// Returns true if the caller can fix the error by changing the request.
	pub fn is_client_error(&self) -> bool {
		match self {
			ServiceError::UnknownSubject(_) => true,
			ServiceError::Document(e) => e.is_client_error(),
			ServiceError::Identity(e) => e.is_client_error(),
			ServiceError::Config(_) | ServiceError::PolicyService(_) => false,
		}
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, ServiceError::Document(e) if e.is_not_found())
	}

	pub fn is_permission_denied(&self) -> bool {
		matches!(self, ServiceError::Document(e) if e.is_permission_denied())
	}

	pub fn is_validation(&self) -> bool {
		matches!(self, ServiceError::Document(DocumentError::Validation(_)))
	}
}

pub type Result<T> = std::result::Result<T, ServiceError>;
