//! Project configuration (hauktui.yml)
//!
//! Written once by `init` at the project root; `add`, `diff` and `update`
//! read it to locate the components directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration file name, at the project root
pub const CONFIG_FILE: &str = "hauktui.yml";

/// Default directory that receives component source files
pub const DEFAULT_COMPONENTS_DIR: &str = "src/components/ui";

const PROJECT_API_VERSION: &str = "hauktui.dev/v1";
const PROJECT_KIND: &str = "Project";

/// The project configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// API version (must be "hauktui.dev/v1")
    pub api_version: String,

    /// Kind (must be "Project")
    pub kind: String,

    /// Directory component files are copied into, relative to the project root
    pub components_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::with_components_dir(DEFAULT_COMPONENTS_DIR)
    }
}

impl ProjectConfig {
    pub fn with_components_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            api_version: PROJECT_API_VERSION.to_string(),
            kind: PROJECT_KIND.to_string(),
            components_dir: dir.into(),
        }
    }

    /// Path of the config file under a project root
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Whether a project has been initialized at this root
    pub fn is_initialized(root: &Path) -> bool {
        Self::config_path(root).exists()
    }

    /// Load and validate the configuration from a project root
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        let config: ProjectConfig = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a project root
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = Self::config_path(root);

        let content =
            serde_yaml_ng::to_string(self).context("Failed to serialize project config")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write project config: {}", path.display()))?;

        Ok(())
    }

    /// Absolute components directory for a given project root
    pub fn components_root(&self, root: &Path) -> PathBuf {
        root.join(&self.components_dir)
    }

    fn validate(&self) -> Result<()> {
        if self.api_version != PROJECT_API_VERSION {
            anyhow::bail!(
                "Unsupported apiVersion '{}' in {}. Expected '{}'",
                self.api_version,
                CONFIG_FILE,
                PROJECT_API_VERSION
            );
        }

        if self.kind != PROJECT_KIND {
            anyhow::bail!(
                "Invalid kind '{}' in {}. Expected '{}'",
                self.kind,
                CONFIG_FILE,
                PROJECT_KIND
            );
        }

        if self.components_dir.as_os_str().is_empty() {
            anyhow::bail!("componentsDir must not be empty in {CONFIG_FILE}");
        }

        Ok(())
    }
}
