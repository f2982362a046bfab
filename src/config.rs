//! Loading catalog configuration (recommender settings + optional course bank) from TOML.
//!
//! Expected schema:
//!
//! ```toml
//! [recommender]
//! default_limit = 8
//! preferred_languages = ["hi", "pa"]
//! include_builtin = true
//!
//! [[courses]]
//! id = "solar-basics"
//! title = "Solar Basics"
//! difficulty = "beginner"
//! dnaMatch = { learningStyle = ["visual"] }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::Course;
use crate::scoring::DEFAULT_LIMIT;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {path}: {source}")]
  Io { path: String, source: std::io::Error },
  #[error("failed to parse {path}: {source}")]
  Parse { path: String, source: toml::de::Error },
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct CatalogConfig {
  #[serde(default)]
  pub recommender: RecommenderSettings,
  #[serde(default)]
  pub courses: Vec<Course>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RecommenderSettings {
  #[serde(default = "default_limit")]
  pub default_limit: usize,
  /// Regional languages that earn the language bonus.
  #[serde(default = "default_languages")]
  pub preferred_languages: Vec<String>,
  /// Append the built-in courses after the configured ones.
  #[serde(default = "default_true")]
  pub include_builtin: bool,
}

fn default_limit() -> usize { DEFAULT_LIMIT }
fn default_true() -> bool { true }
fn default_languages() -> Vec<String> {
  ["hi", "pa", "bn", "ta", "te", "mr", "gu"].iter().map(|s| s.to_string()).collect()
}

impl Default for RecommenderSettings {
  fn default() -> Self {
    Self {
      default_limit: default_limit(),
      preferred_languages: default_languages(),
      include_builtin: true,
    }
  }
}

pub fn parse_catalog_config(raw: &str, path: &str) -> Result<CatalogConfig, ConfigError> {
  toml::from_str(raw).map_err(|source| ConfigError::Parse { path: path.to_string(), source })
}

pub fn load_catalog_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
  let display = path.display().to_string();
  let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: display.clone(), source })?;
  parse_catalog_config(&raw, &display)
}

/// Attempt to load `CatalogConfig` from CATALOG_CONFIG_PATH. On any IO/parsing error, returns None.
pub fn load_catalog_config_from_env() -> Option<CatalogConfig> {
  let path = std::env::var("CATALOG_CONFIG_PATH").ok()?;
  match load_catalog_config(Path::new(&path)) {
    Ok(cfg) => {
      info!(target: "dna_backend", %path, courses = cfg.courses.len(), "Loaded catalog config (TOML)");
      Some(cfg)
    }
    Err(e) => {
      error!(target: "dna_backend", %path, error = %e, "Failed to load catalog config; using defaults");
      None
    }
  }
}
