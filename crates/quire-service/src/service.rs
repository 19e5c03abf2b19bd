// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The boundary facade.
//!
//! Callers identify the acting subject by id only; the facade resolves the
//! role through the directory before anything reaches the store or the
//! decider.

use std::sync::Arc;

use quire_authz::{
	Action, DocumentId, EditorDeletePolicy, FailurePolicy, LocalDecider, PdpClient,
	PermissionDecider, PolicyOptions, RemoteDecider, Resource, Role, Subject, UserId,
};
use quire_config::{PdpConfig, PdpFailurePolicy, QuireConfig};
use quire_documents::{DeleteOutcome, Document, DocumentInput, DocumentStore, DocumentsChanged};
use quire_identity::{User, UserDirectory};
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, ServiceError};

/// Subject id used by [`DocumentService::has_permission`] when the caller has
/// no id. It owns nothing.
const ANONYMOUS: &str = "";

/// Identity, authorization and the document store wired together.
#[derive(Debug, Clone)]
pub struct DocumentService {
	directory: Arc<UserDirectory>,
	store: DocumentStore,
	local: LocalDecider,
}

impl DocumentService {
	/// Wires a service from parts. The store's decider is the authoritative
	/// one; `local` answers [`has_permission`](Self::has_permission).
	pub fn new(directory: Arc<UserDirectory>, store: DocumentStore, local: LocalDecider) -> Self {
		Self {
			directory,
			store,
			local,
		}
	}

	/// A seeded directory and store with the local decider.
	pub fn demo() -> Result<Self> {
		Self::from_config(&QuireConfig::default())
	}

	/// Builds the service described by `config` with the seeded directory.
	pub fn from_config(config: &QuireConfig) -> Result<Self> {
		let directory = Arc::new(UserDirectory::seeded()?);
		Self::from_config_with_directory(config, directory)
	}

	/// Builds the service described by `config` around an existing directory.
	pub fn from_config_with_directory(
		config: &QuireConfig,
		directory: Arc<UserDirectory>,
	) -> Result<Self> {
		let editor_delete = if config.policy.editor_can_delete_unowned {
			EditorDeletePolicy::Allow
		} else {
			EditorDeletePolicy::Deny
		};
		let local = LocalDecider::new(PolicyOptions::default().with_editor_delete(editor_delete));

		let decider: Arc<dyn PermissionDecider> = match remote_decider(&config.pdp)? {
			Some(remote) => Arc::new(remote),
			None => Arc::new(local),
		};

		let store = if config.store.seed {
			DocumentStore::seeded(decider)
		} else {
			DocumentStore::new(decider)
		};

		info!(
			decider = store.decider().name(),
			seeded = config.store.seed,
			"document service ready"
		);
		Ok(Self::new(directory, store, local))
	}

	pub fn directory(&self) -> &UserDirectory {
		&self.directory
	}

	pub fn store(&self) -> &DocumentStore {
		&self.store
	}

	/// Name of the decider answering authoritative checks.
	pub fn decider_name(&self) -> &'static str {
		self.store.decider().name()
	}

	pub fn subscribe(&self) -> broadcast::Receiver<DocumentsChanged> {
		self.store.subscribe()
	}

	/// Checks a username/password pair against the directory.
	pub fn authenticate(&self, username: &str, password: &str) -> Result<User> {
		Ok(self.directory.authenticate(username, password)?)
	}

	#[instrument(skip(self))]
	pub async fn list_documents(&self, subject_id: &UserId) -> Result<Vec<Document>> {
		let subject = self.subject(subject_id)?;
		Ok(self.store.list(&subject).await)
	}

	/// `None` when the document is absent or hidden from the subject.
	#[instrument(skip(self))]
	pub async fn get_document(
		&self,
		subject_id: &UserId,
		id: &DocumentId,
	) -> Result<Option<Document>> {
		let subject = self.subject(subject_id)?;
		match self.store.get(&subject, id).await {
			Ok(document) => Ok(Some(document)),
			Err(e) if e.is_not_found() => Ok(None),
			Err(e) => Err(e.into()),
		}
	}

	#[instrument(skip(self, input))]
	pub async fn create_document(
		&self,
		subject_id: &UserId,
		input: DocumentInput,
	) -> Result<Document> {
		let subject = self.subject(subject_id)?;
		Ok(self.store.create(&subject, input).await?)
	}

	#[instrument(skip(self, input))]
	pub async fn update_document(
		&self,
		subject_id: &UserId,
		id: &DocumentId,
		input: DocumentInput,
	) -> Result<Document> {
		let subject = self.subject(subject_id)?;
		Ok(self.store.update(&subject, id, input).await?)
	}

	#[instrument(skip(self))]
	pub async fn delete_document(
		&self,
		subject_id: &UserId,
		id: &DocumentId,
	) -> Result<DeleteOutcome> {
		let subject = self.subject(subject_id)?;
		Ok(self.store.delete(&subject, id).await?)
	}

	/// Authoritative check through the configured decider. Unknown subjects
	/// are denied.
	#[instrument(skip(self, resource), fields(resource_type = %resource.resource_type()))]
	pub async fn check_permission(
		&self,
		subject_id: &UserId,
		action: Action,
		resource: &Resource,
	) -> bool {
		let Ok(subject) = self.subject(subject_id) else {
			return false;
		};
		let decision = self.store.decider().decide(&subject, action, resource).await;
		debug!(allowed = decision.allowed, reason = ?decision.reason, "permission checked");
		decision.allowed
	}

	/// Local rule-table check, for UI affordances that cannot wait on the
	/// network. Without a subject id the caller owns nothing.
	pub fn has_permission(
		&self,
		role: Role,
		action: Action,
		resource: &Resource,
		subject_id: Option<&UserId>,
	) -> bool {
		let user_id = subject_id
			.cloned()
			.unwrap_or_else(|| UserId::new(ANONYMOUS));
		self.local
			.evaluate(&Subject::new(user_id, role), action, resource)
			.allowed
	}

	/// Gate for the administration panel.
	pub async fn can_access_admin_panel(&self, subject_id: &UserId) -> bool {
		self.check_permission(subject_id, Action::Access, &Resource::admin_panel())
			.await
	}

	fn subject(&self, subject_id: &UserId) -> Result<Subject> {
		match self.directory.require(subject_id) {
			Ok(user) => Ok(user.subject()),
			Err(e) => {
				warn!(error = %e, "request from unknown subject");
				Err(ServiceError::UnknownSubject(subject_id.clone()))
			}
		}
	}
}

fn remote_decider(config: &PdpConfig) -> Result<Option<RemoteDecider>> {
	if !config.enabled {
		return Ok(None);
	}

	let Some(url) = config.url.as_deref() else {
		return Ok(None);
	};

	let mut client = PdpClient::new(url)?.with_timeout(config.timeout());
	if let Some(token) = &config.token {
		client = client.with_token(token.clone());
	}
	if let Some(tenant) = &config.tenant {
		client = client.with_tenant(tenant.clone());
	}

	let failure_policy = match config.failure_policy {
		PdpFailurePolicy::Closed => FailurePolicy::Closed,
		PdpFailurePolicy::Open => FailurePolicy::Open,
	};
	if failure_policy == FailurePolicy::Open {
		warn!("policy decision point configured to fail open");
	}

	info!(url = %url, timeout_ms = config.timeout_ms, "using remote policy decision point");
	Ok(Some(RemoteDecider::new(client, failure_policy)))
}
