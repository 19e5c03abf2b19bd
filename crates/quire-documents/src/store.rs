// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The document store.
//!
//! Every operation asks the decider before touching a document. Mutations
//! hold the write lock from lookup through decision to change, so no other
//! operation observes or interleaves with a half-applied mutation. Reads
//! decide against a snapshot and release the lock first; they may see the
//! state from just before a concurrent mutation.

use std::sync::Arc;

use chrono::Utc;
use quire_authz::{Action, DocumentId, PermissionDecider, Resource, Subject};
use futures::future::join_all;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, instrument};

use crate::document::{seed_documents, DeleteOutcome, Document, DocumentInput};
use crate::error::{DocumentError, Result};
use crate::event::DocumentsChanged;

const EVENT_CAPACITY: usize = 256;

/// Handle to an in-memory document collection. Clones share the collection.
#[derive(Clone)]
pub struct DocumentStore {
	inner: Arc<DocumentStoreInner>,
}

struct DocumentStoreInner {
	/// Documents in insertion order.
	documents: RwLock<Vec<Document>>,
	decider: Arc<dyn PermissionDecider>,
	sender: broadcast::Sender<DocumentsChanged>,
}

impl std::fmt::Debug for DocumentStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DocumentStore")
			.field("decider", &self.inner.decider.name())
			.finish_non_exhaustive()
	}
}

impl DocumentStore {
	/// An empty store.
	pub fn new(decider: Arc<dyn PermissionDecider>) -> Self {
		Self::with_documents(decider, Vec::new())
	}

	/// A store holding the demo documents.
	pub fn seeded(decider: Arc<dyn PermissionDecider>) -> Self {
		Self::with_documents(decider, seed_documents(Utc::now()))
	}

	pub(crate) fn with_documents(decider: Arc<dyn PermissionDecider>, documents: Vec<Document>) -> Self {
		let (sender, _) = broadcast::channel(EVENT_CAPACITY);
		Self {
			inner: Arc::new(DocumentStoreInner {
				documents: RwLock::new(documents),
				decider,
				sender,
			}),
		}
	}

	/// Receives a [`DocumentsChanged`] for every successful mutation.
	pub fn subscribe(&self) -> broadcast::Receiver<DocumentsChanged> {
		self.inner.sender.subscribe()
	}

	/// All documents the subject may read, in insertion order.
	///
	/// Decisions are made against a snapshot taken under the read lock and
	/// run concurrently, so a slow decider neither stalls writers nor costs
	/// one round trip per document.
	#[instrument(skip(self, subject), fields(user_id = %subject.user_id))]
	pub async fn list(&self, subject: &Subject) -> Vec<Document> {
		let snapshot = self.inner.documents.read().await.clone();

		let decisions = join_all(snapshot.iter().map(|document| {
			let resource = document.resource();
			async move { self.allowed(subject, Action::Read, &resource).await }
		}))
		.await;

		let total = snapshot.len();
		let visible: Vec<Document> = snapshot
			.into_iter()
			.zip(decisions)
			.filter_map(|(document, allowed)| allowed.then_some(document))
			.collect();

		debug!(total, visible = visible.len(), "listed documents");
		visible
	}

	/// One document. A document the subject may not read is reported as
	/// not found.
	#[instrument(skip(self, subject), fields(user_id = %subject.user_id, document_id = %id))]
	pub async fn get(&self, subject: &Subject, id: &DocumentId) -> Result<Document> {
		let document = self
			.inner
			.documents
			.read()
			.await
			.iter()
			.find(|d| &d.id == id)
			.cloned()
			.ok_or_else(|| DocumentError::NotFound(id.clone()))?;

		if !self.allowed(subject, Action::Read, &document.resource()).await {
			debug!("read denied, reporting not found");
			return Err(DocumentError::NotFound(id.clone()));
		}

		Ok(document)
	}

	#[instrument(skip(self, subject, input), fields(user_id = %subject.user_id))]
	pub async fn create(&self, subject: &Subject, input: DocumentInput) -> Result<Document> {
		let (title, content) = input.normalized()?;

		let mut documents = self.inner.documents.write().await;

		if !self
			.allowed(subject, Action::Create, &Resource::any_document())
			.await
		{
			return Err(DocumentError::PermissionDenied(Action::Create));
		}

		let now = Utc::now();
		let document = Document {
			id: DocumentId::generate(),
			title,
			content,
			owner_id: subject.user_id.clone(),
			is_public: input.is_public,
			created_at: now,
			updated_at: now,
		};
		documents.push(document.clone());
		drop(documents);

		info!(document_id = %document.id, is_public = document.is_public, "document created");
		self.notify(DocumentsChanged::Created {
			id: document.id.clone(),
		});
		Ok(document)
	}

	#[instrument(skip(self, subject, input), fields(user_id = %subject.user_id, document_id = %id))]
	pub async fn update(
		&self,
		subject: &Subject,
		id: &DocumentId,
		input: DocumentInput,
	) -> Result<Document> {
		let mut documents = self.inner.documents.write().await;

		let index = documents
			.iter()
			.position(|d| &d.id == id)
			.ok_or_else(|| DocumentError::NotFound(id.clone()))?;

		if !self
			.allowed(subject, Action::Update, &documents[index].resource())
			.await
		{
			return Err(DocumentError::PermissionDenied(Action::Update));
		}

		let (title, content) = input.normalized()?;

		let document = &mut documents[index];
		document.title = title;
		document.content = content;
		document.is_public = input.is_public;
		document.updated_at = Utc::now();
		let updated = document.clone();
		drop(documents);

		info!(is_public = updated.is_public, "document updated");
		self.notify(DocumentsChanged::Updated { id: id.clone() });
		Ok(updated)
	}

	/// Removes a document permanently.
	#[instrument(skip(self, subject), fields(user_id = %subject.user_id, document_id = %id))]
	pub async fn delete(&self, subject: &Subject, id: &DocumentId) -> Result<DeleteOutcome> {
		let mut documents = self.inner.documents.write().await;

		let index = documents
			.iter()
			.position(|d| &d.id == id)
			.ok_or_else(|| DocumentError::NotFound(id.clone()))?;

		if !self
			.allowed(subject, Action::Delete, &documents[index].resource())
			.await
		{
			return Err(DocumentError::PermissionDenied(Action::Delete));
		}

		documents.remove(index);
		drop(documents);

		info!("document deleted");
		self.notify(DocumentsChanged::Deleted { id: id.clone() });
		Ok(DeleteOutcome::deleted())
	}

	/// Number of stored documents, ignoring permissions.
	pub async fn len(&self) -> usize {
		self.inner.documents.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.inner.documents.read().await.is_empty()
	}

	pub fn decider(&self) -> &Arc<dyn PermissionDecider> {
		&self.inner.decider
	}

	async fn allowed(&self, subject: &Subject, action: Action, resource: &Resource) -> bool {
		let decision = self.inner.decider.decide(subject, action, resource).await;
		if !decision.allowed {
			debug!(
				decider = self.inner.decider.name(),
				action = %action,
				reason = ?decision.reason,
				"permission denied"
			);
		}
		decision.allowed
	}

	fn notify(&self, event: DocumentsChanged) {
		// No receivers is fine.
		if let Err(broadcast::error::SendError(event)) = self.inner.sender.send(event) {
			debug!(document_id = %event.id(), "no change subscribers");
		}
	}
}
