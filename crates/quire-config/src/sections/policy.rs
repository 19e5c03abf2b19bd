// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rule table options.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PolicyConfigLayer {
	pub editor_can_delete_unowned: Option<bool>,
}

impl PolicyConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.editor_can_delete_unowned.is_some() {
			self.editor_can_delete_unowned = other.editor_can_delete_unowned;
		}
	}

	pub fn finalize(self) -> PolicyConfig {
		PolicyConfig {
			editor_can_delete_unowned: self.editor_can_delete_unowned.unwrap_or(false),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PolicyConfig {
	/// Whether editors may delete public documents owned by someone else.
	pub editor_can_delete_unowned: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_deny() {
		assert!(!PolicyConfigLayer::default().finalize().editor_can_delete_unowned);
	}

	#[test]
	fn merge_keeps_base_when_unset() {
		let mut base = PolicyConfigLayer {
			editor_can_delete_unowned: Some(true),
		};
		base.merge(PolicyConfigLayer::default());
		assert!(base.finalize().editor_can_delete_unowned);
	}
}
