// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use quire_authz::{Role, Subject, UserId};
use serde::{Deserialize, Serialize};

/// A user as seen by the rest of the system. The password hash stays inside
/// the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub username: String,
	pub name: String,
	pub role: Role,
}

impl User {
	pub fn new(
		id: impl Into<UserId>,
		username: impl Into<String>,
		name: impl Into<String>,
		role: Role,
	) -> Self {
		Self {
			id: id.into(),
			username: username.into(),
			name: name.into(),
			role,
		}
	}

	/// The authorization subject for this user.
	pub fn subject(&self) -> Subject {
		Subject::new(self.id.clone(), self.role)
	}
}
