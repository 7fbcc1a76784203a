//! # Configuration
//!
//! Link constants and the template location shown alongside a diagnosis.
//! None of this affects evaluation.
//!
//! Resolution order, later wins:
//!
//! 1. Built-in defaults.
//! 2. Optional YAML file (`contact_link`, `manual_link`, `template_path`).
//! 3. Environment: `LGPD_CONTACT_LINK`, `LGPD_MANUAL_LINK`,
//!    `LGPD_TEMPLATE_PATH`. An empty `LGPD_MANUAL_LINK` disables the
//!    manual link.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LgpdError;
use crate::template::TEMPLATE_FILE_NAME;

pub const DEFAULT_CONTACT_LINK: &str = "https://wa.me/5521974072870";
pub const DEFAULT_MANUAL_LINK: &str = "https://example.com/manual-lgpd.pdf";

pub const ENV_CONTACT_LINK: &str = "LGPD_CONTACT_LINK";
pub const ENV_MANUAL_LINK: &str = "LGPD_MANUAL_LINK";
pub const ENV_TEMPLATE_PATH: &str = "LGPD_TEMPLATE_PATH";

/// Presentation settings shared by the CLI and the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriageConfig {
    /// Call-to-action link to the contact channel.
    pub contact_link: String,
    /// Optional link to the full manual.
    pub manual_link: Option<String>,
    /// Location of the register template offered for download.
    pub template_path: PathBuf,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            contact_link: DEFAULT_CONTACT_LINK.to_string(),
            manual_link: Some(DEFAULT_MANUAL_LINK.to_string()),
            template_path: PathBuf::from(TEMPLATE_FILE_NAME),
        }
    }
}

impl TriageConfig {
    /// Parse a YAML configuration document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LgpdError> {
        let mut config: Self =
            serde_yaml::from_str(yaml).map_err(|e| LgpdError::Config(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    /// Read a YAML configuration file.
    ///
    /// A relative `template_path` is resolved against the file's directory.
    pub fn from_yaml_file(path: &Path) -> Result<Self, LgpdError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&content)
            .map_err(|e| LgpdError::Config(format!("{}: {e}", path.display())))?;
        if config.template_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.template_path = dir.join(&config.template_path);
            }
        }
        Ok(config)
    }

    /// Load from an optional file, then apply process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, LgpdError> {
        let config = match path {
            Some(p) => Self::from_yaml_file(p)?,
            None => Self::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from an environment lookup.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(link) = lookup(ENV_CONTACT_LINK) {
            self.contact_link = link;
        }
        if let Some(link) = lookup(ENV_MANUAL_LINK) {
            self.manual_link = Some(link);
        }
        if let Some(path) = lookup(ENV_TEMPLATE_PATH) {
            self.template_path = PathBuf::from(path);
        }
        self.normalize();
        self
    }

    fn normalize(&mut self) {
        if self
            .manual_link
            .as_deref()
            .is_some_and(|l| l.trim().is_empty())
        {
            self.manual_link = None;
        }
    }
}
