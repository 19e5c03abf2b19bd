// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Document access policies.
//!
//! Admins never reach this module; the engine allows them up front.

use crate::abac::{Decision, DecisionReason, DocumentAttrs, EditorDeletePolicy, PolicyOptions, Subject};
use crate::{Action, Role};

/// Evaluates document access for a non-admin subject.
pub fn evaluate(
	subject: &Subject,
	action: Action,
	resource: &DocumentAttrs,
	options: &PolicyOptions,
) -> Decision {
	if resource.is_owned_by(&subject.user_id) {
		if subject.is_viewer() && action.is_mutation() {
			return Decision::deny(DecisionReason::ViewerReadOnly);
		}
		return Decision::allow(DecisionReason::Owner);
	}

	if resource.is_public && action == Action::Read {
		return Decision::allow(DecisionReason::PublicRead);
	}

	match subject.role {
		Role::Admin => Decision::allow(DecisionReason::Admin),
		Role::Editor => evaluate_editor(action, resource, options),
		Role::Viewer => evaluate_viewer(action, resource),
	}
}

fn evaluate_editor(action: Action, resource: &DocumentAttrs, options: &PolicyOptions) -> Decision {
	match action {
		Action::Create => Decision::allow(DecisionReason::RoleGrant),
		Action::Read | Action::Update => role_grant(resource),
		Action::Delete => match options.editor_delete {
			EditorDeletePolicy::Deny => Decision::deny(DecisionReason::NotOwner),
			EditorDeletePolicy::Allow => role_grant(resource),
		},
		Action::Access => Decision::deny(DecisionReason::NoMatchingRule),
	}
}

fn evaluate_viewer(action: Action, resource: &DocumentAttrs) -> Decision {
	match action {
		Action::Read => role_grant(resource),
		Action::Create | Action::Update | Action::Delete => {
			Decision::deny(DecisionReason::ViewerReadOnly)
		}
		Action::Access => Decision::deny(DecisionReason::NoMatchingRule),
	}
}

/// A role grant applies to documents in general; against one specific
/// document it also needs the public flag (ownership was checked earlier).
fn role_grant(resource: &DocumentAttrs) -> Decision {
	if !resource.is_specific() || resource.is_public {
		Decision::allow(DecisionReason::RoleGrant)
	} else {
		Decision::deny(DecisionReason::NotOwner)
	}
}
