// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Attribute-Based Access Control (ABAC) engine.
//!
//! Decisions combine the subject's role (the RBAC half) with attributes of
//! the resource such as its owner and public flag (the ABAC half).
//!
//! # Policy Evaluation Flow
//!
//! ```text
//! evaluate(subject, action, resource, options)
//!     │
//!     ├── Admin → always allowed
//!     │
//!     └── Route to resource-specific policy:
//!         ├── Document → document::evaluate()
//!         └── AdminPanel → admin_panel::evaluate()
//! ```
//!
//! # Example
//!
//! ```
//! use quire_authz::abac::{is_allowed, PolicyOptions, Resource, Subject};
//! use quire_authz::{Action, DocumentId, Role, UserId};
//!
//! let editor = Subject::new(UserId::new("user-id"), Role::Editor);
//! let options = PolicyOptions::default();
//!
//! // Editors may create documents.
//! assert!(is_allowed(&editor, Action::Create, &Resource::any_document(), &options));
//!
//! // But not read someone else's private document.
//! let private = Resource::document(DocumentId::new("2"), UserId::new("admin-id"), false);
//! assert!(!is_allowed(&editor, Action::Read, &private, &options));
//! ```

pub mod engine;
pub mod policies;
pub mod types;

pub use engine::*;
pub use types::*;
