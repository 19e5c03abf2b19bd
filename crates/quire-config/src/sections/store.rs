// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Document store configuration section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreConfigLayer {
	pub seed: Option<bool>,
}

impl StoreConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.seed.is_some() {
			self.seed = other.seed;
		}
	}

	pub fn finalize(self) -> StoreConfig {
		StoreConfig {
			seed: self.seed.unwrap_or(true),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
	/// Start with the demo documents instead of an empty store.
	pub seed: bool,
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self { seed: true }
	}
}
