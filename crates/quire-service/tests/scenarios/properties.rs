// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Store-level checks of the decision rules, across every seeded user and
//! every document they could touch.

use quire_service::{Action, DocumentInput, Resource, Role, UserId};

use super::support::{admin, editor, service, viewer};

fn role_of(id: &UserId) -> Role {
	match id.as_str() {
		"admin-id" => Role::Admin,
		"user-id" => Role::Editor,
		_ => Role::Viewer,
	}
}

#[tokio::test]
async fn visible_iff_admin_owner_or_public() {
	let service = service();
	service
		.create_document(&editor(), DocumentInput::new("Editor private", "", false))
		.await
		.unwrap();
	service
		.create_document(&admin(), DocumentInput::new("Admin public", "", true))
		.await
		.unwrap();

	let all = service.list_documents(&admin()).await.unwrap();
	for subject in [admin(), editor(), viewer()] {
		let visible = service.list_documents(&subject).await.unwrap();
		for doc in &all {
			let expected = role_of(&subject) == Role::Admin || doc.owner_id == subject || doc.is_public;
			assert_eq!(
				visible.iter().any(|d| d.id == doc.id),
				expected,
				"{subject} / {}",
				doc.title
			);
			assert_eq!(
				service.get_document(&subject, &doc.id).await.unwrap().is_some(),
				expected
			);
		}
	}
}

#[tokio::test]
async fn owners_other_than_viewers_update_and_delete() {
	let service = service();
	for owner in [admin(), editor()] {
		let doc = service
			.create_document(&owner, DocumentInput::new("Mine", "", false))
			.await
			.unwrap();
		service
			.update_document(&owner, &doc.id, DocumentInput::new("Still mine", "", true))
			.await
			.unwrap();
		service.delete_document(&owner, &doc.id).await.unwrap();
	}
}

#[tokio::test]
async fn authoritative_and_local_checks_agree() {
	let service = service();
	let docs = service.list_documents(&admin()).await.unwrap();

	for subject in [admin(), editor(), viewer()] {
		for doc in &docs {
			let resource = Resource::document(doc.id.clone(), doc.owner_id.clone(), doc.is_public);
			for action in Action::all() {
				assert_eq!(
					service.check_permission(&subject, *action, &resource).await,
					service.has_permission(role_of(&subject), *action, &resource, Some(&subject)),
					"{subject} {action} {}",
					doc.id
				);
			}
		}
	}
}
