// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::Arc;

use quire_config::QuireConfig;
use quire_identity::UserDirectory;
use quire_service::{
	DocumentId, DocumentInput, DocumentService, DocumentsChanged, Role, ServiceError, User, UserId,
};

use super::support::{admin, editor, service, viewer};

fn titles(docs: &[quire_service::Document]) -> Vec<&str> {
	docs.iter().map(|d| d.title.as_str()).collect()
}

#[tokio::test]
async fn seeded_lists_differ_by_role() {
	let service = service();

	let all = service.list_documents(&admin()).await.unwrap();
	assert_eq!(
		titles(&all),
		vec!["Getting Started Guide", "Security Policy", "User Manual"]
	);

	let visible = service.list_documents(&viewer()).await.unwrap();
	assert_eq!(titles(&visible), vec!["Getting Started Guide", "User Manual"]);
}

#[tokio::test]
async fn create_then_get_round_trips() {
	let service = service();
	let input = DocumentInput::new("Onboarding", "Day one checklist", true);

	let created = service.create_document(&editor(), input.clone()).await.unwrap();
	let fetched = service
		.get_document(&editor(), &created.id)
		.await
		.unwrap()
		.unwrap();

	assert_eq!(fetched.title, input.title);
	assert_eq!(fetched.content, input.content);
	assert_eq!(fetched.is_public, input.is_public);
	assert_eq!(fetched.owner_id, editor());
	assert_eq!(fetched, created);
}

#[tokio::test]
async fn admin_private_document_is_not_found_for_viewer() {
	let service = service();
	let created = service
		.create_document(&admin(), DocumentInput::new("A", "x", false))
		.await
		.unwrap();
	assert_eq!(created.owner_id, admin());

	let seen = service.get_document(&viewer(), &created.id).await.unwrap();
	assert!(seen.is_none());
}

#[tokio::test]
async fn editor_cannot_update_another_editors_private_document() {
	let mut directory = UserDirectory::seeded().unwrap();
	directory
		.insert(
			User::new("editor-2", "second", "Second Editor", Role::Editor),
			"correct horse",
		)
		.unwrap();
	let service =
		DocumentService::from_config_with_directory(&QuireConfig::default(), Arc::new(directory))
			.unwrap();
	let second = UserId::new("editor-2");

	let private = service
		.create_document(&second, DocumentInput::new("Draft", "wip", false))
		.await
		.unwrap();

	let err = service
		.update_document(&editor(), &private.id, DocumentInput::new("Hijacked", "", true))
		.await
		.unwrap_err();
	assert!(err.is_permission_denied());

	let unchanged = service.get_document(&second, &private.id).await.unwrap().unwrap();
	assert_eq!(unchanged.title, "Draft");
}

#[tokio::test]
async fn delete_twice_reports_not_found() {
	let service = service();
	let id = DocumentId::new("3");

	let outcome = service.delete_document(&editor(), &id).await.unwrap();
	assert!(outcome.success);

	let err = service.delete_document(&editor(), &id).await.unwrap_err();
	assert!(err.is_not_found());
}

#[tokio::test]
async fn whitespace_title_leaves_store_unchanged() {
	let service = service();
	let before = service.store().len().await;

	let err = service
		.create_document(&admin(), DocumentInput::new("  ", "body", false))
		.await
		.unwrap_err();
	assert!(err.is_validation());
	assert_eq!(service.store().len().await, before);
}

#[tokio::test]
async fn viewer_cannot_mutate_anything() {
	let service = service();

	let create = service
		.create_document(&viewer(), DocumentInput::new("Mine", "", true))
		.await
		.unwrap_err();
	let update = service
		.update_document(&viewer(), &DocumentId::new("1"), DocumentInput::new("X", "", true))
		.await
		.unwrap_err();
	let delete = service
		.delete_document(&viewer(), &DocumentId::new("1"))
		.await
		.unwrap_err();

	for err in [create, update, delete] {
		assert!(err.is_permission_denied(), "{err}");
	}
}

#[tokio::test]
async fn unknown_subject_is_an_authentication_failure() {
	let service = service();
	let err = service
		.create_document(&UserId::new("intruder"), DocumentInput::new("X", "", true))
		.await
		.unwrap_err();
	assert!(matches!(err, ServiceError::UnknownSubject(_)));
}

#[tokio::test]
async fn mutations_notify_subscribers() {
	let service = service();
	let mut changes = service.subscribe();

	let doc = service
		.create_document(&editor(), DocumentInput::new("Notes", "", false))
		.await
		.unwrap();
	service.delete_document(&editor(), &doc.id).await.unwrap();

	assert_eq!(
		changes.recv().await.unwrap(),
		DocumentsChanged::Created { id: doc.id.clone() }
	);
	assert_eq!(
		changes.recv().await.unwrap(),
		DocumentsChanged::Deleted { id: doc.id }
	);
}

#[tokio::test]
async fn stores_are_independent() {
	let first = service();
	let second = service();

	first
		.delete_document(&admin(), &DocumentId::new("1"))
		.await
		.unwrap();
	assert_eq!(first.store().len().await, 2);
	assert_eq!(second.store().len().await, 3);
}
