// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Password hashing and verification.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand::rngs::OsRng;

use crate::argon2_config::argon2_instance;
use crate::error::{IdentityError, Result};

/// Hashes a password into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
	let salt = SaltString::generate(&mut OsRng);

	argon2_instance()
		.hash_password(password.as_bytes(), &salt)
		.map(|hash| hash.to_string())
		.map_err(|e| IdentityError::Hashing(e.to_string()))
}

/// Verifies a password against a stored PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
	let parsed_hash =
		PasswordHash::new(hash).map_err(|e| IdentityError::Hashing(format!("invalid hash: {e}")))?;

	Ok(argon2_instance()
		.verify_password(password.as_bytes(), &parsed_hash)
		.is_ok())
}
