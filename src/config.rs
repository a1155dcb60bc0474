//! Export configuration.
//!
//! Loaded once at start-up from an optional TOML file, then overridden by
//! environment variables, and handed to the router as an explicit value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Config file looked up at the catalog root when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "eventcatalog.toml";

/// What to do when a resource's source file cannot be read.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReadErrorPolicy {
    /// Abort the export and report a server error.
    #[default]
    Fail,
    /// Log a warning and export the resource as an empty entry.
    Skip,
}

impl ReadErrorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fail" => Some(Self::Fail),
            "skip" => Some(Self::Skip),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LlmsTxtConfig {
    /// Serve `/docs/llm/llms-full.txt`.
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomDocsConfig {
    /// Append custom documentation pages after the built-in collections.
    #[serde(default)]
    pub enabled: bool,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LlmsConfig {
    #[serde(default)]
    pub llms_txt: LlmsTxtConfig,

    #[serde(default)]
    pub custom_docs: CustomDocsConfig,

    #[serde(default)]
    pub on_read_error: ReadErrorPolicy,
}

impl LlmsConfig {
    /// Config with the export switched on and everything else at its default.
    pub fn enabled() -> Self {
        Self {
            llms_txt: LlmsTxtConfig { enabled: true },
            ..Self::default()
        }
    }

    pub fn with_custom_docs(mut self, enabled: bool) -> Self {
        self.custom_docs.enabled = enabled;
        self
    }

    pub fn with_read_error_policy(mut self, policy: ReadErrorPolicy) -> Self {
        self.on_read_error = policy;
        self
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| CatalogError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Resolve the effective configuration for a catalog.
    ///
    /// An explicit path must exist. Without one, `eventcatalog.toml` at the
    /// catalog root is used if present. Environment overrides apply last.
    pub fn resolve(catalog_root: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = catalog_root.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(&default_path)?
                } else {
                    tracing::debug!(
                        "No {} in {}, using defaults",
                        DEFAULT_CONFIG_FILE,
                        catalog_root.display()
                    );
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override fields from environment variables.
    ///
    /// - `CATALOG_LLMS_TXT_ENABLED`: `true` / `false`
    /// - `CATALOG_CUSTOM_DOCS_ENABLED`: `true` / `false`
    /// - `CATALOG_ON_READ_ERROR`: `fail` / `skip`
    pub fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(enabled) = parse_bool_var(&var, "CATALOG_LLMS_TXT_ENABLED") {
            self.llms_txt.enabled = enabled;
        }
        if let Some(enabled) = parse_bool_var(&var, "CATALOG_CUSTOM_DOCS_ENABLED") {
            self.custom_docs.enabled = enabled;
        }
        if let Some(value) = var("CATALOG_ON_READ_ERROR") {
            match ReadErrorPolicy::from_str(value.trim()) {
                Some(policy) => self.on_read_error = policy,
                None => tracing::warn!("Ignoring invalid CATALOG_ON_READ_ERROR: {}", value),
            }
        }
    }
}

fn parse_bool_var(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    let value = var(key)?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => {
            tracing::warn!("Ignoring invalid {}: {}", key, value);
            None
        }
    }
}
