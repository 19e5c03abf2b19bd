// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory user directory.

use quire_authz::{Role, UserId};
use tracing::{debug, info, instrument, warn};

use crate::error::{IdentityError, Result};
use crate::password::{hash_password, verify_password};
use crate::user::User;

/// Password shared by the seeded demo accounts.
pub const DEMO_PASSWORD: &str = "2025DEVChallenge";

struct Account {
	user: User,
	password_hash: String,
}

/// Users and their password hashes. Immutable once built.
#[derive(Default)]
pub struct UserDirectory {
	accounts: Vec<Account>,
}

impl std::fmt::Debug for UserDirectory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("UserDirectory")
			.field("users", &self.accounts.iter().map(|a| &a.user.username).collect::<Vec<_>>())
			.finish()
	}
}

impl UserDirectory {
	pub fn new() -> Self {
		Self::default()
	}

	/// The three demo accounts: one admin, one editor, one viewer.
	pub fn seeded() -> Result<Self> {
		let mut directory = Self::new();
		directory.insert(User::new("admin-id", "admin", "Admin User", Role::Admin), DEMO_PASSWORD)?;
		directory.insert(User::new("user-id", "newuser", "Regular User", Role::Editor), DEMO_PASSWORD)?;
		directory.insert(User::new("viewer-id", "viewer", "Viewer User", Role::Viewer), DEMO_PASSWORD)?;
		info!(users = directory.len(), "seeded user directory");
		Ok(directory)
	}

	/// Adds a user, hashing `password`. Usernames and ids must be unique.
	pub fn insert(&mut self, user: User, password: &str) -> Result<()> {
		if self
			.accounts
			.iter()
			.any(|a| a.user.username == user.username || a.user.id == user.id)
		{
			return Err(IdentityError::DuplicateUsername(user.username));
		}

		let password_hash = hash_password(password)?;
		self.accounts.push(Account { user, password_hash });
		Ok(())
	}

	/// Checks a username/password pair.
	#[instrument(skip(self, password))]
	pub fn authenticate(&self, username: &str, password: &str) -> Result<User> {
		let Some(account) = self.accounts.iter().find(|a| a.user.username == username) else {
			warn!("login attempt for unknown username");
			return Err(IdentityError::InvalidCredentials);
		};

		if !verify_password(password, &account.password_hash)? {
			warn!(user_id = %account.user.id, "login attempt with wrong password");
			return Err(IdentityError::InvalidCredentials);
		}

		debug!(user_id = %account.user.id, role = %account.user.role, "user authenticated");
		Ok(account.user.clone())
	}

	pub fn get(&self, id: &UserId) -> Option<&User> {
		self.accounts.iter().map(|a| &a.user).find(|u| &u.id == id)
	}

	/// Like [`get`](Self::get) but an unknown id is an error.
	pub fn require(&self, id: &UserId) -> Result<&User> {
		self.get(id)
			.ok_or_else(|| IdentityError::UserNotFound(id.to_string()))
	}

	pub fn users(&self) -> impl Iterator<Item = &User> {
		self.accounts.iter().map(|a| &a.user)
	}

	pub fn len(&self) -> usize {
		self.accounts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.accounts.is_empty()
	}
}
