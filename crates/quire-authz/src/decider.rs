// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Decision strategies.
//!
//! Callers hold an `Arc<dyn PermissionDecider>` and never care which strategy
//! answers. [`LocalDecider`] evaluates the rule table in-process;
//! [`RemoteDecider`] delegates to a policy decision point and resolves any
//! failure with its [`FailurePolicy`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::abac::{self, Decision, DecisionReason, PolicyOptions, Resource, Subject};
use crate::pdp::PdpClient;
use crate::types::Action;

/// Answers authorization questions.
#[async_trait]
pub trait PermissionDecider: Send + Sync {
	/// Short name used in logs.
	fn name(&self) -> &'static str;

	/// Decides whether `subject` may perform `action` on `resource`.
	///
	/// Never fails: any error inside the strategy is turned into a deny
	/// (or an allow, for a fail-open remote decider) and logged.
	async fn decide(&self, subject: &Subject, action: Action, resource: &Resource) -> Decision;
}

/// Evaluates the built-in rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDecider {
	options: PolicyOptions,
}

impl LocalDecider {
	pub fn new(options: PolicyOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &PolicyOptions {
		&self.options
	}

	/// Synchronous evaluation, for callers that cannot await.
	pub fn evaluate(&self, subject: &Subject, action: Action, resource: &Resource) -> Decision {
		abac::evaluate(subject, action, resource, &self.options)
	}
}

#[async_trait]
impl PermissionDecider for LocalDecider {
	fn name(&self) -> &'static str {
		"local"
	}

	async fn decide(&self, subject: &Subject, action: Action, resource: &Resource) -> Decision {
		self.evaluate(subject, action, resource)
	}
}

/// What a [`RemoteDecider`] answers when the PDP cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
	/// Deny on failure.
	#[default]
	Closed,
	/// Allow on failure. Only for deployments that prefer availability.
	Open,
}

/// Delegates decisions to a remote policy decision point.
#[derive(Debug, Clone)]
pub struct RemoteDecider {
	client: PdpClient,
	failure_policy: FailurePolicy,
}

impl RemoteDecider {
	pub fn new(client: PdpClient, failure_policy: FailurePolicy) -> Self {
		Self {
			client,
			failure_policy,
		}
	}

	pub fn failure_policy(&self) -> FailurePolicy {
		self.failure_policy
	}
}

#[async_trait]
impl PermissionDecider for RemoteDecider {
	fn name(&self) -> &'static str {
		"remote"
	}

	async fn decide(&self, subject: &Subject, action: Action, resource: &Resource) -> Decision {
		match self.client.check(subject, action, resource).await {
			Ok(allowed) => Decision {
				allowed,
				reason: DecisionReason::PolicyService,
			},
			Err(e) => {
				let fail_open = self.failure_policy == FailurePolicy::Open;
				if fail_open {
					warn!(
						error = %e,
						transient = e.is_transient(),
						user_id = %subject.user_id,
						action = %action,
						"Policy decision point unavailable, failing open"
					);
				} else {
					error!(
						error = %e,
						transient = e.is_transient(),
						user_id = %subject.user_id,
						action = %action,
						"Policy decision point unavailable, failing closed"
					);
				}
				Decision {
					allowed: fail_open,
					reason: DecisionReason::PolicyServiceUnavailable { fail_open },
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::abac::EditorDeletePolicy;
	use crate::types::{DocumentId, Role, UserId};
	use serde_json::json;
	use std::sync::Arc;
	use wiremock::matchers::{method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn viewer() -> Subject {
		Subject::new(UserId::new("viewer-id"), Role::Viewer)
	}

	fn guide() -> Resource {
		Resource::document(DocumentId::new("1"), UserId::new("admin-id"), true)
	}

	#[tokio::test]
	async fn local_decider_matches_engine() {
		let decider: Arc<dyn PermissionDecider> = Arc::new(LocalDecider::default());
		assert_eq!(decider.name(), "local");

		let decision = decider.decide(&viewer(), Action::Read, &guide()).await;
		assert_eq!(decision, Decision::allow(DecisionReason::PublicRead));

		let decision = decider.decide(&viewer(), Action::Delete, &guide()).await;
		assert_eq!(decision, Decision::deny(DecisionReason::ViewerReadOnly));
	}

	#[test]
	fn local_decider_honours_options() {
		let editor = Subject::new(UserId::new("user-id"), Role::Editor);
		let strict = LocalDecider::default();
		let lenient =
			LocalDecider::new(PolicyOptions::default().with_editor_delete(EditorDeletePolicy::Allow));

		assert!(!strict.evaluate(&editor, Action::Delete, &guide()).allowed);
		assert!(lenient.evaluate(&editor, Action::Delete, &guide()).allowed);
	}

	#[tokio::test]
	async fn remote_decider_relays_pdp_answer() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/allowed"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "allow": false })))
			.mount(&server)
			.await;

		let decider = RemoteDecider::new(PdpClient::new(server.uri()).unwrap(), FailurePolicy::Closed);
		let decision = decider.decide(&viewer(), Action::Read, &guide()).await;
		assert_eq!(decision, Decision::deny(DecisionReason::PolicyService));
	}

	#[tokio::test]
	async fn remote_decider_fails_closed_by_default() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(500))
			.mount(&server)
			.await;

		let decider = RemoteDecider::new(PdpClient::new(server.uri()).unwrap(), FailurePolicy::default());
		let decision = decider.decide(&viewer(), Action::Read, &guide()).await;
		assert_eq!(
			decision,
			Decision::deny(DecisionReason::PolicyServiceUnavailable { fail_open: false })
		);
	}

	#[tokio::test]
	async fn remote_decider_can_fail_open() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(200).set_body_string("not json"))
			.mount(&server)
			.await;

		let decider = RemoteDecider::new(PdpClient::new(server.uri()).unwrap(), FailurePolicy::Open);
		let decision = decider.decide(&viewer(), Action::Update, &guide()).await;
		assert_eq!(
			decision,
			Decision::allow(DecisionReason::PolicyServiceUnavailable { fail_open: true })
		);
	}

	#[tokio::test]
	async fn unreachable_pdp_is_a_failure() {
		// Port 9 (discard) is not expected to be listening.
		let client = PdpClient::new("http://127.0.0.1:9").unwrap();
		let decider = RemoteDecider::new(client, FailurePolicy::Closed);
		let decision = decider.decide(&viewer(), Action::Read, &guide()).await;
		assert!(!decision.allowed);
		assert!(matches!(
			decision.reason,
			DecisionReason::PolicyServiceUnavailable { fail_open: false }
		));
	}
}
