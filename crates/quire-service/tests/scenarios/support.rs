// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::{Arc, OnceLock};

use quire_config::QuireConfig;
use quire_identity::UserDirectory;
use quire_service::{DocumentService, UserId};

pub fn admin() -> UserId {
	UserId::new("admin-id")
}

pub fn editor() -> UserId {
	UserId::new("user-id")
}

pub fn viewer() -> UserId {
	UserId::new("viewer-id")
}

/// Hashing the demo passwords is the slow part; every test shares one
/// directory and gets its own store.
pub fn directory() -> Arc<UserDirectory> {
	static DIRECTORY: OnceLock<Arc<UserDirectory>> = OnceLock::new();
	DIRECTORY
		.get_or_init(|| Arc::new(UserDirectory::seeded().expect("seed directory")))
		.clone()
}

pub fn service_with(config: &QuireConfig) -> DocumentService {
	DocumentService::from_config_with_directory(config, directory()).expect("build service")
}

pub fn service() -> DocumentService {
	service_with(&QuireConfig::default())
}
