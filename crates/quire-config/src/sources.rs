// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::env::{env_bool, env_u64, env_var, load_secret_env};
use crate::error::ConfigError;
use crate::layer::QuireConfigLayer;
use crate::sections::{
	LoggingConfigLayer, PdpConfigLayer, PdpFailurePolicy, PolicyConfigLayer, StoreConfigLayer,
};

pub const SYSTEM_CONFIG_PATH: &str = "/etc/quire/quire.toml";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<QuireConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<QuireConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(QuireConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is skipped.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new(SYSTEM_CONFIG_PATH)
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<QuireConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(QuireConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: QuireConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: QUIRE_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<QuireConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(QuireConfigLayer {
			pdp: Some(load_pdp_from_env()?),
			policy: Some(load_policy_from_env()),
			logging: Some(load_logging_from_env()),
			store: Some(load_store_from_env()),
		})
	}
}

fn load_pdp_from_env() -> Result<PdpConfigLayer, ConfigError> {
	let failure_policy = match env_var("QUIRE_PDP_FAILURE_POLICY") {
		Some(v) => Some(v.parse::<PdpFailurePolicy>().map_err(|message| {
			ConfigError::InvalidValue {
				key: "QUIRE_PDP_FAILURE_POLICY".to_string(),
				message,
			}
		})?),
		None => None,
	};

	Ok(PdpConfigLayer {
		enabled: env_bool("QUIRE_PDP_ENABLED"),
		url: env_var("QUIRE_PDP_URL"),
		token: load_secret_env("QUIRE_PDP_TOKEN").map_err(|e| ConfigError::Secret(e.to_string()))?,
		timeout_ms: env_u64("QUIRE_PDP_TIMEOUT_MS")?,
		failure_policy,
		tenant: env_var("QUIRE_PDP_TENANT"),
	})
}

fn load_policy_from_env() -> PolicyConfigLayer {
	PolicyConfigLayer {
		editor_can_delete_unowned: env_bool("QUIRE_POLICY_EDITOR_CAN_DELETE_UNOWNED"),
	}
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("QUIRE_LOG_LEVEL"),
		json: env_bool("QUIRE_LOG_JSON"),
	}
}

fn load_store_from_env() -> StoreConfigLayer {
	StoreConfigLayer {
		seed: env_bool("QUIRE_STORE_SEED"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn missing_toml_file_is_skipped() {
		let dir = tempfile::tempdir().unwrap();
		let source = TomlSource::new(dir.path().join("absent.toml"));
		let layer = source.load().unwrap();
		assert!(layer.pdp.is_none());
	}

	#[test]
	fn parses_toml_sections() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			r#"
[pdp]
url = "http://pdp.internal:7766"
failure_policy = "open"

[policy]
editor_can_delete_unowned = true

[store]
seed = false
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		let pdp = layer.pdp.unwrap();
		assert_eq!(pdp.url.as_deref(), Some("http://pdp.internal:7766"));
		assert_eq!(pdp.failure_policy, Some(PdpFailurePolicy::Open));
		assert_eq!(layer.policy.unwrap().editor_can_delete_unowned, Some(true));
		assert_eq!(layer.store.unwrap().seed, Some(false));
		assert!(layer.logging.is_none());
	}

	#[test]
	fn malformed_toml_reports_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "[pdp\nurl = ").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
		assert!(err.to_string().contains(&file.path().display().to_string()));
	}

	#[test]
	fn precedence_orders_sources() {
		assert!(Precedence::Defaults < Precedence::ConfigFile);
		assert!(Precedence::ConfigFile < Precedence::Environment);
		assert_eq!(TomlSource::system().path, PathBuf::from(SYSTEM_CONFIG_PATH));
	}
}
