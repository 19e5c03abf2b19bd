// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Boundary facade for Quire.
//!
//! [`DocumentService`] is what a presentation layer talks to. It resolves
//! subject ids through the [`UserDirectory`](quire_identity::UserDirectory),
//! routes document operations through the [`DocumentStore`](quire_documents::DocumentStore)
//! and answers permission questions with either the local rule table or the
//! remote policy decision point, depending on configuration.

pub mod error;
pub mod service;

pub use error::{Result, ServiceError};
pub use service::DocumentService;

pub use quire_authz::{Action, DocumentId, Resource, Role, UserId};
pub use quire_documents::{DeleteOutcome, Document, DocumentInput, DocumentsChanged};
pub use quire_identity::User;
