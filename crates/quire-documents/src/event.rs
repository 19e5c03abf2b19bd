// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use quire_authz::DocumentId;
use serde::{Deserialize, Serialize};

/// Broadcast after every successful mutation so views can refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentsChanged {
	Created { id: DocumentId },
	Updated { id: DocumentId },
	Deleted { id: DocumentId },
}

impl DocumentsChanged {
	pub fn id(&self) -> &DocumentId {
		match self {
			DocumentsChanged::Created { id }
			| DocumentsChanged::Updated { id }
			| DocumentsChanged::Deleted { id } => id,
		}
	}
}
