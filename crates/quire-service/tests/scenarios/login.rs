// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use quire_identity::DEMO_PASSWORD;
use quire_service::{Role, ServiceError};

use super::support::service;

#[test]
fn demo_accounts_log_in() {
	let service = service();

	let admin = service.authenticate("admin", DEMO_PASSWORD).unwrap();
	assert_eq!(admin.role, Role::Admin);
	assert_eq!(admin.name, "Admin User");

	let editor = service.authenticate("newuser", DEMO_PASSWORD).unwrap();
	assert_eq!(editor.role, Role::Editor);

	let viewer = service.authenticate("viewer", DEMO_PASSWORD).unwrap();
	assert_eq!(viewer.role, Role::Viewer);
}

#[test]
fn bad_password_is_a_client_error() {
	let err = service().authenticate("admin", "letmein").unwrap_err();
	assert!(matches!(err, ServiceError::Identity(_)));
	assert!(err.is_client_error());
}

#[tokio::test]
async fn logged_in_user_drives_the_store() {
	let service = service();
	let user = service.authenticate("newuser", DEMO_PASSWORD).unwrap();

	let docs = service.list_documents(&user.id).await.unwrap();
	assert!(docs.iter().any(|d| d.owner_id == user.id));
}
