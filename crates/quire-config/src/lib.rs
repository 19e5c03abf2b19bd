// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for Quire.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`QUIRE_*`)
//!
//! # Usage
//!
//! ```ignore
//! use quire_config::load_config;
//!
//! let config = load_config()?;
//! println!("PDP enabled: {}", config.pdp.enabled);
//! ```

pub mod env;
pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use env::{load_secret_env, SecretEnvError};
pub use error::ConfigError;
pub use layer::QuireConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved Quire configuration.
#[derive(Debug, Clone, Default)]
pub struct QuireConfig {
	pub pdp: PdpConfig,
	pub policy: PolicyConfig,
	pub logging: LoggingConfig,
	pub store: StoreConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`QUIRE_*`)
/// 2. Config file (`/etc/quire/quire.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<QuireConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<QuireConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<QuireConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = QuireConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: QuireConfigLayer) -> Result<QuireConfig, ConfigError> {
	let pdp = layer.pdp.unwrap_or_default().finalize();
	let policy = layer.policy.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let store = layer.store.unwrap_or_default().finalize();

	validate_config(&pdp)?;

	info!(
		pdp_enabled = pdp.enabled,
		pdp_failure_policy = %pdp.failure_policy,
		editor_can_delete_unowned = policy.editor_can_delete_unowned,
		seed = store.seed,
		"Quire configuration loaded"
	);

	Ok(QuireConfig {
		pdp,
		policy,
		logging,
		store,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(pdp: &PdpConfig) -> Result<(), ConfigError> {
	if pdp.enabled && pdp.url.is_none() {
		return Err(ConfigError::Validation(
			"pdp.enabled is set but no pdp.url (QUIRE_PDP_URL) was given".to_string(),
		));
	}

	if pdp.enabled && pdp.timeout_ms == 0 {
		return Err(ConfigError::Validation(
			"pdp.timeout_ms must be greater than zero".to_string(),
		));
	}

	Ok(())
}
