// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use quire_service::{Action, Resource, Role};

use super::support::{admin, editor, service, viewer};

#[tokio::test]
async fn only_admin_enters_admin_panel() {
	let service = service();

	assert!(service.can_access_admin_panel(&admin()).await);
	assert!(!service.can_access_admin_panel(&editor()).await);
	assert!(!service.can_access_admin_panel(&viewer()).await);
}

#[test]
fn local_check_agrees_for_admin_panel() {
	let service = service();
	for role in [Role::Admin, Role::Editor, Role::Viewer] {
		assert_eq!(
			service.has_permission(role, Action::Access, &Resource::admin_panel(), None),
			role == Role::Admin
		);
	}
}
