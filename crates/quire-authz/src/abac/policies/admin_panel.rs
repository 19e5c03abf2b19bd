// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Admin panel access policy.

use crate::abac::{Decision, DecisionReason, Subject};
use crate::Action;

/// The admin panel has no owner, so only the role matters.
pub fn evaluate(subject: &Subject, _action: Action) -> Decision {
	if subject.is_admin() {
		Decision::allow(DecisionReason::Admin)
	} else {
		Decision::deny(DecisionReason::AdminOnly)
	}
}
