// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization decisions for Quire.
//!
//! This crate answers one question: may this subject perform this action on
//! this resource? It provides:
//!
//! - **Core types** ([`types`]): ID newtypes, [`Role`], [`Action`], [`ResourceType`]
//! - **ABAC engine** ([`abac`]): the fixed RBAC + ABAC rule table as pure functions
//! - **Deciders** ([`decider`]): one [`PermissionDecider`] trait with a local
//!   rule-table strategy and a remote strategy backed by a policy decision point
//! - **PDP client** ([`pdp`]): HTTP client for the remote policy decision point
//!
//! # Rule Table
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. Admins may do anything.
//! 2. Owners have full control of their documents (viewers stay read-only).
//! 3. Public documents are readable by everyone.
//! 4. Editors may create documents, and read/update documents in general;
//!    against a specific document the grant also needs the public flag.
//!    Deleting a document the editor does not own is denied by default.
//! 5. Viewers may only read.
//! 6. The admin panel is admin-only.
//! 7. Everything else is denied.
//!
//! Decisions are computed fresh on every call and are never cached.

pub mod abac;
pub mod decider;
pub mod error;
pub mod pdp;
pub mod types;

pub use abac::{
	evaluate, is_allowed, Decision, DecisionReason, DocumentAttrs, EditorDeletePolicy, PolicyOptions,
	Resource, Subject,
};
pub use decider::{FailurePolicy, LocalDecider, PermissionDecider, RemoteDecider};
pub use error::{ParseError, PolicyServiceError};
pub use pdp::PdpClient;
pub use types::{Action, DocumentId, ResourceType, Role, UserId};
