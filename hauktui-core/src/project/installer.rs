//! Component installation into the target project
//!
//! Copies bundled template files into the configured components directory.
//! `install` backs the `add` command (skip-or-overwrite policy), `refresh`
//! backs `update` (always converge on the template).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::RegistryError;
use crate::registry::{template_source, ComponentMeta};

/// Per-file result of an `install` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// File did not exist and was written
    Written,
    /// File existed and was overwritten (`--force`)
    Overwritten,
    /// File existed and was left untouched
    Skipped,
}

/// Per-file result of a `refresh` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// File was missing and has been restored from the template
    Restored,
    /// File diverged from the template and was rewritten
    Refreshed,
    /// File already matches the template; not rewritten
    Current,
}

#[derive(Debug)]
pub struct InstalledFile {
    /// Path relative to the components directory
    pub relative: String,
    /// Absolute path that was (or would have been) written
    pub path: PathBuf,
    pub outcome: InstallOutcome,
}

#[derive(Debug)]
pub struct RefreshedFile {
    pub relative: String,
    pub path: PathBuf,
    pub outcome: RefreshOutcome,
}

/// Places component template files under a components directory
pub struct Installer {
    components_root: PathBuf,
}

impl Installer {
    pub fn new(components_root: PathBuf) -> Self {
        Self { components_root }
    }

    /// Copy every file of a component into the project.
    ///
    /// Existing files are skipped unless `force` is set; nothing is merged.
    pub fn install(&self, meta: &ComponentMeta, force: bool) -> Result<Vec<InstalledFile>> {
        let mut results = Vec::with_capacity(meta.files.len());

        for relative in &meta.files {
            let template = self.template_for(meta, relative)?;
            let path = self.file_path(relative);

            let outcome = if !path.exists() {
                self.write_file(&path, template)?;
                InstallOutcome::Written
            } else if force {
                self.write_file(&path, template)?;
                InstallOutcome::Overwritten
            } else {
                InstallOutcome::Skipped
            };

            tracing::debug!("install {}: {:?}", path.display(), outcome);
            results.push(InstalledFile {
                relative: relative.clone(),
                path,
                outcome,
            });
        }

        Ok(results)
    }

    /// Rewrite every file of a component from its template, restoring
    /// missing files. Files already matching the template are left alone.
    pub fn refresh(&self, meta: &ComponentMeta) -> Result<Vec<RefreshedFile>> {
        let mut results = Vec::with_capacity(meta.files.len());

        for relative in &meta.files {
            let template = self.template_for(meta, relative)?;
            let path = self.file_path(relative);

            let outcome = if !path.exists() {
                self.write_file(&path, template)?;
                RefreshOutcome::Restored
            } else {
                let installed = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;

                if installed == template {
                    RefreshOutcome::Current
                } else {
                    self.write_file(&path, template)?;
                    RefreshOutcome::Refreshed
                }
            };

            tracing::debug!("refresh {}: {:?}", path.display(), outcome);
            results.push(RefreshedFile {
                relative: relative.clone(),
                path,
                outcome,
            });
        }

        Ok(results)
    }

    /// A component counts as installed when at least one of its files exists
    pub fn is_installed(&self, meta: &ComponentMeta) -> bool {
        meta.files
            .iter()
            .any(|relative| self.file_path(relative).exists())
    }

    /// Absolute path for a template-relative file
    pub fn file_path(&self, relative: &str) -> PathBuf {
        self.components_root.join(relative)
    }

    fn template_for(&self, meta: &ComponentMeta, relative: &str) -> Result<&'static str> {
        template_source(&meta.name, relative).ok_or_else(|| {
            RegistryError::MissingTemplate {
                component: meta.name.clone(),
                file: relative.to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod installer_tests {
    use super::*;
    use crate::registry::bundled;
    use tempfile::TempDir;

    fn installer(temp_dir: &TempDir) -> Installer {
        Installer::new(temp_dir.path().join("ui"))
    }

    fn button() -> &'static ComponentMeta {
        bundled().get("button").unwrap()
    }

    fn select() -> &'static ComponentMeta {
        bundled().get("select").unwrap()
    }

    #[test]
    fn test_install_writes_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let installer = installer(&temp_dir);

        let files = installer.install(select(), false).unwrap();

        assert_eq!(files.len(), 2);
        for file in &files {
            assert_eq!(file.outcome, InstallOutcome::Written);
            assert!(file.path.exists());
        }
        assert!(installer.is_installed(select()));
    }

    #[test]
    fn test_install_skips_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let installer = installer(&temp_dir);

        installer.install(button(), false).unwrap();
        let path = installer.file_path("button.tsx");
        std::fs::write(&path, "local edits").unwrap();

        let files = installer.install(button(), false).unwrap();
        assert_eq!(files[0].outcome, InstallOutcome::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "local edits");
    }

    #[test]
    fn test_install_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let installer = installer(&temp_dir);

        installer.install(button(), false).unwrap();
        let path = installer.file_path("button.tsx");
        std::fs::write(&path, "local edits").unwrap();

        let files = installer.install(button(), true).unwrap();
        assert_eq!(files[0].outcome, InstallOutcome::Overwritten);
        assert!(std::fs::read_to_string(&path).unwrap().contains("ButtonProps"));
    }

    #[test]
    fn test_refresh_restores_and_converges() {
        let temp_dir = TempDir::new().unwrap();
        let installer = installer(&temp_dir);

        installer.install(select(), false).unwrap();

        // One file drifts, one is deleted
        std::fs::write(installer.file_path("select.tsx"), "drifted").unwrap();
        std::fs::remove_file(installer.file_path("select-option.tsx")).unwrap();

        let files = installer.refresh(select()).unwrap();
        let by_name: std::collections::HashMap<&str, RefreshOutcome> = files
            .iter()
            .map(|f| (f.relative.as_str(), f.outcome))
            .collect();

        assert_eq!(by_name["select.tsx"], RefreshOutcome::Refreshed);
        assert_eq!(by_name["select-option.tsx"], RefreshOutcome::Restored);

        // A second refresh finds everything current
        let files = installer.refresh(select()).unwrap();
        assert!(files.iter().all(|f| f.outcome == RefreshOutcome::Current));
    }

    #[test]
    fn test_is_installed_with_partial_files() {
        let temp_dir = TempDir::new().unwrap();
        let installer = installer(&temp_dir);

        assert!(!installer.is_installed(select()));

        installer.install(select(), false).unwrap();
        std::fs::remove_file(installer.file_path("select.tsx")).unwrap();

        // One remaining file is enough to count as installed
        assert!(installer.is_installed(select()));
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let installer = installer(&temp_dir);

        let meta = ComponentMeta {
            name: "button".to_string(),
            category: "form".to_string(),
            description: "test".to_string(),
            dependencies: vec![],
            files: vec!["not-bundled.tsx".to_string()],
        };

        let err = installer.install(&meta, false).unwrap_err();
        assert!(err.to_string().contains("not-bundled.tsx"));
    }
}
