// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Type definitions for ABAC policy evaluation.
//!
//! - [`Subject`]: who is asking (user id and role)
//! - [`Resource`]: what is being accessed, as a tagged variant per resource type
//! - [`Decision`]: the outcome plus the rule that produced it
//! - [`PolicyOptions`]: the configurable points of the rule table
//!
//! Resource attributes are a typed variant rather than a free-form map so
//! that every input to a decision is checked at compile time.

use serde::{Deserialize, Serialize};

use crate::types::{DocumentId, ResourceType, Role, UserId};

/// The user requesting access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
	pub user_id: UserId,
	pub role: Role,
}

impl Subject {
	pub fn new(user_id: UserId, role: Role) -> Self {
		Self { user_id, role }
	}

	pub fn is_admin(&self) -> bool {
		self.role == Role::Admin
	}

	pub fn is_viewer(&self) -> bool {
		self.role == Role::Viewer
	}
}

/// Attributes of a document relevant to authorization.
///
/// `id` and `owner_id` are `None` when the check is about documents in
/// general (e.g. "may this subject create a document at all").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAttrs {
	pub id: Option<DocumentId>,
	pub owner_id: Option<UserId>,
	pub is_public: bool,
}

impl DocumentAttrs {
	/// Attributes for documents in general, with no particular owner.
	pub fn any() -> Self {
		Self {
			id: None,
			owner_id: None,
			is_public: false,
		}
	}

	/// Attributes of one specific document.
	pub fn specific(id: DocumentId, owner_id: UserId, is_public: bool) -> Self {
		Self {
			id: Some(id),
			owner_id: Some(owner_id),
			is_public,
		}
	}

	/// Returns true if these attributes describe one particular document.
	pub fn is_specific(&self) -> bool {
		self.id.is_some() || self.owner_id.is_some()
	}

	pub fn is_owned_by(&self, user_id: &UserId) -> bool {
		self.owner_id.as_ref() == Some(user_id)
	}
}

/// The resource being accessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Resource {
	Document(DocumentAttrs),
	/// The administration panel. Has no owner concept.
	AdminPanel,
}

impl Resource {
	/// Documents in general; used for create checks and UI affordances.
	pub fn any_document() -> Self {
		Resource::Document(DocumentAttrs::any())
	}

	/// One specific document.
	pub fn document(id: DocumentId, owner_id: UserId, is_public: bool) -> Self {
		Resource::Document(DocumentAttrs::specific(id, owner_id, is_public))
	}

	pub fn admin_panel() -> Self {
		Resource::AdminPanel
	}

	pub fn resource_type(&self) -> ResourceType {
		match self {
			Resource::Document(_) => ResourceType::Document,
			Resource::AdminPanel => ResourceType::AdminPanel,
		}
	}
}

/// Which rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
	/// Subject is an admin.
	Admin,
	/// Subject owns the document.
	Owner,
	/// Document is public and the action is a read.
	PublicRead,
	/// Subject's role grants the action.
	RoleGrant,
	/// Viewers may never mutate, even documents they own.
	ViewerReadOnly,
	/// Role would grant the action, but the specific document is neither
	/// owned by the subject nor public.
	NotOwner,
	/// Resource is restricted to admins.
	AdminOnly,
	/// Answered by the remote policy decision point.
	PolicyService,
	/// The remote policy decision point could not be reached; the
	/// configured failure policy decided.
	PolicyServiceUnavailable { fail_open: bool },
	/// Nothing in the rule table matched.
	NoMatchingRule,
}

/// Outcome of an authorization check. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
	pub allowed: bool,
	pub reason: DecisionReason,
}

impl Decision {
	pub fn allow(reason: DecisionReason) -> Self {
		Self {
			allowed: true,
			reason,
		}
	}

	pub fn deny(reason: DecisionReason) -> Self {
		Self {
			allowed: false,
			reason,
		}
	}
}

/// Whether an editor may delete a public document they do not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorDeletePolicy {
	#[default]
	Deny,
	Allow,
}

/// Configurable points of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyOptions {
	pub editor_delete: EditorDeletePolicy,
}

impl PolicyOptions {
	/// Builder: set the editor delete policy.
	pub fn with_editor_delete(mut self, policy: EditorDeletePolicy) -> Self {
		self.editor_delete = policy;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn any_document_is_not_specific() {
		let attrs = DocumentAttrs::any();
		assert!(!attrs.is_specific());
		assert!(!attrs.is_owned_by(&UserId::new("admin-id")));
	}

	#[test]
	fn specific_document_knows_its_owner() {
		let attrs = DocumentAttrs::specific(DocumentId::new("1"), UserId::new("admin-id"), true);
		assert!(attrs.is_specific());
		assert!(attrs.is_owned_by(&UserId::new("admin-id")));
		assert!(!attrs.is_owned_by(&UserId::new("user-id")));
	}

	#[test]
	fn resource_reports_its_type() {
		assert_eq!(Resource::any_document().resource_type(), ResourceType::Document);
		assert_eq!(Resource::admin_panel().resource_type(), ResourceType::AdminPanel);
	}

	#[test]
	fn resource_serializes_tagged() {
		let json = serde_json::to_value(Resource::document(
			DocumentId::new("3"),
			UserId::new("user-id"),
			true,
		))
		.unwrap();
		assert_eq!(json["type"], "document");
		assert_eq!(json["ownerId"], "user-id");
		assert_eq!(json["isPublic"], true);

		let json = serde_json::to_value(Resource::AdminPanel).unwrap();
		assert_eq!(json["type"], "admin_panel");
	}

	#[test]
	fn policy_options_default_denies_editor_delete() {
		let options = PolicyOptions::default();
		assert_eq!(options.editor_delete, EditorDeletePolicy::Deny);
		let options = options.with_editor_delete(EditorDeletePolicy::Allow);
		assert_eq!(options.editor_delete, EditorDeletePolicy::Allow);
	}
}
