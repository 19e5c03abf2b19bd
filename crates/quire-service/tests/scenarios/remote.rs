// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The store driven by a remote policy decision point.

use std::time::{Duration, Instant};

use quire_common_secret::SecretString;
use quire_config::{PdpConfig, PdpFailurePolicy, QuireConfig};
use quire_service::{DocumentId, DocumentInput};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::{editor, service_with, viewer};

fn remote_config(server: &MockServer, failure_policy: PdpFailurePolicy) -> QuireConfig {
	QuireConfig {
		pdp: PdpConfig {
			enabled: true,
			url: Some(server.uri()),
			token: Some(SecretString::new("permit_key_test".to_string())),
			timeout_ms: 200,
			failure_policy,
			tenant: None,
		},
		..Default::default()
	}
}

#[tokio::test]
async fn pdp_answers_drive_the_store() {
	let server = MockServer::start().await;
	// Only document 3 is readable.
	Mock::given(method("POST"))
		.and(path("/allowed"))
		.and(header("authorization", "Bearer permit_key_test"))
		.and(body_partial_json(json!({ "resource": { "key": "3" } })))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "allow": true })))
		.with_priority(1)
		.mount(&server)
		.await;
	Mock::given(method("POST"))
		.and(path("/allowed"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "allow": false })))
		.with_priority(2)
		.mount(&server)
		.await;

	let service = service_with(&remote_config(&server, PdpFailurePolicy::Closed));
	assert_eq!(service.decider_name(), "remote");

	let docs = service.list_documents(&viewer()).await.unwrap();
	let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
	assert_eq!(ids, vec!["3"]);
}

#[tokio::test]
async fn timeout_fails_closed_by_default() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(
			ResponseTemplate::new(200)
				.set_body_json(json!({ "allow": true }))
				.set_delay(Duration::from_secs(2)),
		)
		.mount(&server)
		.await;

	let service = service_with(&remote_config(&server, PdpFailurePolicy::Closed));

	assert!(service.list_documents(&editor()).await.unwrap().is_empty());
	let err = service
		.create_document(&editor(), DocumentInput::new("Blocked", "", false))
		.await
		.unwrap_err();
	assert!(err.is_permission_denied());
}

#[tokio::test]
async fn server_error_fails_open_when_configured() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(502))
		.mount(&server)
		.await;

	let service = service_with(&remote_config(&server, PdpFailurePolicy::Open));

	// Fail-open lets even a viewer delete.
	let outcome = service
		.delete_document(&viewer(), &DocumentId::new("2"))
		.await
		.unwrap();
	assert!(outcome.success);
}

#[tokio::test]
async fn local_affordances_ignore_the_pdp() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "allow": true })))
		.mount(&server)
		.await;

	let service = service_with(&remote_config(&server, PdpFailurePolicy::Closed));
	let resource = quire_service::Resource::admin_panel();

	assert!(service.check_permission(&viewer(), quire_service::Action::Access, &resource).await);
	assert!(!service.has_permission(
		quire_service::Role::Viewer,
		quire_service::Action::Access,
		&resource,
		Some(&viewer())
	));
}

#[tokio::test]
async fn slow_pdp_costs_one_round_trip_per_list() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/allowed"))
		.respond_with(ResponseTemplate::new(503).set_delay(Duration::from_millis(250)))
		.mount(&server)
		.await;

	let mut config = remote_config(&server, PdpFailurePolicy::Closed);
	config.pdp.timeout_ms = 1000;
	let service = service_with(&config);

	let started = Instant::now();
	let docs = service.list_documents(&editor()).await.unwrap();
	let elapsed = started.elapsed();

	assert!(docs.is_empty());
	// Three sequential checks would take at least 750ms.
	assert!(elapsed < Duration::from_millis(600), "list took {elapsed:?}");
	assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn configured_tenant_is_sent() {
	let server = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/allowed"))
		.and(body_partial_json(json!({ "resource": { "tenant": "acme" } })))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "allow": true })))
		.mount(&server)
		.await;

	let mut config = remote_config(&server, PdpFailurePolicy::Closed);
	config.pdp.tenant = Some("acme".to_string());
	let service = service_with(&config);

	assert_eq!(service.list_documents(&viewer()).await.unwrap().len(), 3);
}
