// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! ABAC policy evaluation engine.
//!
//! This module contains the core [`evaluate`] function. It implements a
//! two-phase evaluation:
//!
//! 1. **Global role check**: Admin gets full access
//! 2. **Resource-specific policy**: Delegates to specialized policy modules
//!
//! Evaluation is a pure function of its inputs. Nothing is cached.

use tracing::{debug, instrument};

use super::policies::{admin_panel, document};
use super::types::{Decision, DecisionReason, PolicyOptions, Resource, Subject};
use crate::types::Action;

/// Evaluates whether a subject may perform an action on a resource, and
/// which rule decided it.
///
/// # Tracing
///
/// This function is instrumented with tracing. The decision and the relevant
/// attributes are logged at debug level for audit purposes.
#[instrument(
    level = "debug",
    skip(subject, resource, options),
    fields(
        user_id = %subject.user_id,
        role = %subject.role,
        action = %action,
        resource_type = %resource.resource_type(),
    )
)]
pub fn evaluate(
	subject: &Subject,
	action: Action,
	resource: &Resource,
	options: &PolicyOptions,
) -> Decision {
	let decision = if subject.is_admin() {
		Decision::allow(DecisionReason::Admin)
	} else {
		match resource {
			Resource::Document(attrs) => document::evaluate(subject, action, attrs, options),
			Resource::AdminPanel => admin_panel::evaluate(subject, action),
		}
	};

	debug!(allowed = decision.allowed, reason = ?decision.reason, "authorization decision");
	decision
}

/// Convenience wrapper around [`evaluate`] that drops the reason.
pub fn is_allowed(
	subject: &Subject,
	action: Action,
	resource: &Resource,
	options: &PolicyOptions,
) -> bool {
	evaluate(subject, action, resource, options).allowed
}
