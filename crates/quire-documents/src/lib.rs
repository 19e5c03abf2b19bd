// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! In-memory document store for Quire.
//!
//! Documents live only as long as the process. Every list, get, create,
//! update and delete is gated by a [`PermissionDecider`](quire_authz::PermissionDecider)
//! supplied at construction; the store never decides access itself.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use quire_authz::{LocalDecider, Role, Subject, UserId};
//! use quire_documents::{DocumentInput, DocumentStore};
//!
//! # tokio_test::block_on(async {
//! let store = DocumentStore::seeded(Arc::new(LocalDecider::default()));
//! let editor = Subject::new(UserId::new("user-id"), Role::Editor);
//!
//! let doc = store
//!     .create(&editor, DocumentInput::new("Notes", "", false))
//!     .await
//!     .unwrap();
//! assert_eq!(doc.owner_id, editor.user_id);
//! # });
//! ```

pub mod document;
pub mod error;
pub mod event;
pub mod store;

pub use document::{seed_documents, DeleteOutcome, Document, DocumentInput};
pub use error::{DocumentError, Result};
pub use event::DocumentsChanged;
pub use store::DocumentStore;
