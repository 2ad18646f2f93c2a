//! Drift detection between installed files and bundled templates

use std::path::Path;

use anyhow::{Context, Result};
use diffy::{create_patch, PatchFormatter};

use crate::error::RegistryError;
use crate::registry::{template_source, ComponentMeta};

/// Comparison result for one component file
#[derive(Debug)]
pub enum FileStatus {
    /// The file is not present in the project
    Missing,
    /// The installed copy matches the template byte for byte
    Unchanged,
    /// The installed copy diverged; `patch` is a unified diff from the
    /// template to the installed copy
    Modified { patch: String },
}

#[derive(Debug)]
pub struct FileDiff {
    /// Path relative to the components directory
    pub relative: String,
    pub status: FileStatus,
}

impl FileDiff {
    pub fn is_drift(&self) -> bool {
        !matches!(self.status, FileStatus::Unchanged)
    }
}

/// Compare every file of a component against its bundled template
pub fn diff_component(components_root: &Path, meta: &ComponentMeta) -> Result<Vec<FileDiff>> {
    let mut diffs = Vec::with_capacity(meta.files.len());

    for relative in &meta.files {
        let template = template_source(&meta.name, relative).ok_or_else(|| {
            anyhow::Error::from(RegistryError::MissingTemplate {
                component: meta.name.clone(),
                file: relative.clone(),
            })
        })?;

        let path = components_root.join(relative);

        let status = if !path.exists() {
            FileStatus::Missing
        } else {
            let installed = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            if installed == template {
                FileStatus::Unchanged
            } else {
                let patch = create_patch(template, &installed);
                let patch = PatchFormatter::new().fmt_patch(&patch).to_string();
                FileStatus::Modified { patch }
            }
        };

        diffs.push(FileDiff {
            relative: relative.clone(),
            status,
        });
    }

    Ok(diffs)
}
