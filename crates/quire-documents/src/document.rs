// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Document records and the inputs that create or replace them.

use chrono::{DateTime, Utc};
use quire_authz::{DocumentId, Resource, UserId};
use serde::{Deserialize, Serialize};

use crate::error::{DocumentError, Result};

/// A stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
	pub id: DocumentId,
	pub title: String,
	pub content: String,
	pub owner_id: UserId,
	pub is_public: bool,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl Document {
	/// The authorization resource describing this document.
	pub fn resource(&self) -> Resource {
		Resource::document(self.id.clone(), self.owner_id.clone(), self.is_public)
	}
}

/// Caller-supplied fields for create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
	pub title: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub is_public: bool,
}

impl DocumentInput {
	pub fn new(title: impl Into<String>, content: impl Into<String>, is_public: bool) -> Self {
		Self {
			title: title.into(),
			content: content.into(),
			is_public,
		}
	}

	/// Trims title and content; an empty title is rejected.
	pub(crate) fn normalized(&self) -> Result<(String, String)> {
		let title = self.title.trim();
		if title.is_empty() {
			return Err(DocumentError::Validation("title is required".to_string()));
		}
		Ok((title.to_string(), self.content.trim().to_string()))
	}
}

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
	pub success: bool,
	pub message: String,
}

impl DeleteOutcome {
	pub(crate) fn deleted() -> Self {
		Self {
			success: true,
			message: "Document deleted successfully".to_string(),
		}
	}
}

/// The documents every seeded store starts with.
pub fn seed_documents(now: DateTime<Utc>) -> Vec<Document> {
	let seed = |id: &str, title: &str, content: &str, owner: &str, is_public: bool| Document {
		id: DocumentId::new(id),
		title: title.to_string(),
		content: content.to_string(),
		owner_id: UserId::new(owner),
		is_public,
		created_at: now,
		updated_at: now,
	};

	vec![
		seed(
			"1",
			"Getting Started Guide",
			"This is a guide to help you get started with our document management system.",
			"admin-id",
			true,
		),
		seed(
			"2",
			"Security Policy",
			"This document outlines our security policies and procedures.",
			"admin-id",
			false,
		),
		seed(
			"3",
			"User Manual",
			"A comprehensive guide for users of our system.",
			"user-id",
			true,
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalized_trims_both_fields() {
		let input = DocumentInput::new("  Roadmap \n", "\tQ3 goals  ", false);
		let (title, content) = input.normalized().unwrap();
		assert_eq!(title, "Roadmap");
		assert_eq!(content, "Q3 goals");
	}

	#[test]
	fn whitespace_title_rejected() {
		let err = DocumentInput::new(" \t ", "body", true).normalized().unwrap_err();
		assert!(matches!(err, DocumentError::Validation(_)));
	}

	#[test]
	fn document_serializes_camel_case() {
		let doc = seed_documents(Utc::now()).remove(2);
		let json = serde_json::to_value(&doc).unwrap();
		assert_eq!(json["ownerId"], "user-id");
		assert_eq!(json["isPublic"], true);
		assert!(json.get("createdAt").is_some());
		assert!(json.get("updatedAt").is_some());
	}

	#[test]
	fn input_defaults_optional_fields() {
		let input: DocumentInput = serde_json::from_str(r#"{"title":"Notes"}"#).unwrap();
		assert_eq!(input, DocumentInput::new("Notes", "", false));
	}

	#[test]
	fn seeds_match_demo_data() {
		let docs = seed_documents(Utc::now());
		let summary: Vec<_> = docs
			.iter()
			.map(|d| (d.id.as_str(), d.owner_id.as_str(), d.is_public))
			.collect();
		assert_eq!(
			summary,
			vec![("1", "admin-id", true), ("2", "admin-id", false), ("3", "user-id", true)]
		);
	}
}
