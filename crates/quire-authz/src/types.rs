// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core type definitions for authorization.
//!
//! - **ID newtypes**: [`UserId`] and [`DocumentId`] keep subject and resource
//!   identifiers from being mixed up
//! - **Roles**: the three demo roles ([`Role`])
//! - **Actions** and **resource types** as they appear in decisions and on the
//!   policy decision point wire format
//!
//! Every enum has a stable snake_case string form used by serde, `Display`
//! and `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ParseError;

// =============================================================================
// ID Newtypes
// =============================================================================

macro_rules! define_id_type {
	($name:ident, $doc:expr) => {
		#[doc = $doc]
		#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);

		impl $name {
			/// Create an ID from any string-like value.
			pub fn new(id: impl Into<String>) -> Self {
				Self(id.into())
			}

			/// Get the ID as a string slice.
			pub fn as_str(&self) -> &str {
				&self.0
			}

			/// Consume the ID and return the inner string.
			pub fn into_inner(self) -> String {
				self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(&self.0)
			}
		}

		impl From<&str> for $name {
			fn from(id: &str) -> Self {
				Self(id.to_string())
			}
		}

		impl From<String> for $name {
			fn from(id: String) -> Self {
				Self(id)
			}
		}
	};
}

define_id_type!(UserId, "Unique identifier for a user (the subject of a decision).");
define_id_type!(DocumentId, "Unique identifier for a document.");

impl DocumentId {
	/// Generate a fresh random document ID.
	///
	/// IDs are UUID v4 strings, so an ID freed by a delete is never handed
	/// out again.
	pub fn generate() -> Self {
		Self(Uuid::new_v4().to_string())
	}
}

// =============================================================================
// Roles
// =============================================================================

/// Role assigned to a user for the lifetime of their session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
	/// Full access to every resource.
	Admin,
	/// May create documents and read/update documents in general.
	Editor,
	/// Read-only.
	Viewer,
}

impl Role {
	pub fn all() -> &'static [Role] {
		&[Role::Admin, Role::Editor, Role::Viewer]
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Role::Admin => "admin",
			Role::Editor => "editor",
			Role::Viewer => "viewer",
		}
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"admin" => Ok(Role::Admin),
			"editor" => Ok(Role::Editor),
			"viewer" => Ok(Role::Viewer),
			_ => Err(ParseError::new("role", s)),
		}
	}
}

// =============================================================================
// Actions
// =============================================================================

/// Operations that can be requested on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
	Create,
	Read,
	Update,
	Delete,
	/// Entering a resource that has no CRUD surface, such as the admin panel.
	Access,
}

impl Action {
	pub fn all() -> &'static [Action] {
		&[
			Action::Create,
			Action::Read,
			Action::Update,
			Action::Delete,
			Action::Access,
		]
	}

	/// Returns true for actions that change state.
	pub fn is_mutation(&self) -> bool {
		matches!(self, Action::Create | Action::Update | Action::Delete)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Action::Create => "create",
			Action::Read => "read",
			Action::Update => "update",
			Action::Delete => "delete",
			Action::Access => "access",
		}
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Action {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"create" => Ok(Action::Create),
			"read" => Ok(Action::Read),
			"update" => Ok(Action::Update),
			"delete" => Ok(Action::Delete),
			"access" => Ok(Action::Access),
			_ => Err(ParseError::new("action", s)),
		}
	}
}

// =============================================================================
// Resource Types
// =============================================================================

/// Kinds of resources protected by the decider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
	Document,
	AdminPanel,
}

impl ResourceType {
	pub fn as_str(&self) -> &'static str {
		match self {
			ResourceType::Document => "document",
			ResourceType::AdminPanel => "admin_panel",
		}
	}
}

impl fmt::Display for ResourceType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ResourceType {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().replace('-', "_").as_str() {
			"document" => Ok(ResourceType::Document),
			"admin_panel" => Ok(ResourceType::AdminPanel),
			_ => Err(ParseError::new("resource type", s)),
		}
	}
}
