//! Registry index parsing and queries
//!
//! The registry document lists every available component with its metadata.
//! Lookup by name, keyword search and category filtering all run against the
//! parsed index; order is the document order throughout.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// API version the registry document must declare
pub const REGISTRY_API_VERSION: &str = "hauktui.dev/v1";

/// Kind the registry document must declare
pub const REGISTRY_KIND: &str = "ComponentRegistry";

/// The registry document (registry.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryDocument {
    /// API version
    pub api_version: String,

    /// Kind (ComponentRegistry)
    pub kind: String,

    /// When the registry data was generated
    pub generated: String,

    /// All component entries, in registry order
    pub components: Vec<ComponentMeta>,
}

/// Metadata for a single component
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    /// Unique component name (the key used by every command)
    pub name: String,

    /// Grouping category shown by `list`
    pub category: String,

    /// One-paragraph description
    pub description: String,

    /// Framework packages the component source imports
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Template files, relative to the project components directory
    pub files: Vec<String>,
}

/// The in-memory component catalog. Built once, read-only thereafter.
#[derive(Debug)]
pub struct RegistryIndex {
    components: Vec<ComponentMeta>,
    by_name: HashMap<String, usize>,
}

impl RegistryIndex {
    /// Parse an index from a YAML registry document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let doc: RegistryDocument =
            serde_yaml_ng::from_str(content).context("Failed to parse component registry YAML")?;
        Ok(Self::from_document(doc)?)
    }

    /// Build an index from a parsed document, validating the envelope and
    /// the name-uniqueness invariant.
    pub fn from_document(doc: RegistryDocument) -> std::result::Result<Self, RegistryError> {
        if doc.api_version != REGISTRY_API_VERSION {
            return Err(RegistryError::InvalidRegistry(format!(
                "unsupported apiVersion '{}', expected '{}'",
                doc.api_version, REGISTRY_API_VERSION
            )));
        }

        if doc.kind != REGISTRY_KIND {
            return Err(RegistryError::InvalidRegistry(format!(
                "unexpected kind '{}', expected '{}'",
                doc.kind, REGISTRY_KIND
            )));
        }

        let mut by_name = HashMap::with_capacity(doc.components.len());
        for (position, component) in doc.components.iter().enumerate() {
            if by_name.insert(component.name.clone(), position).is_some() {
                return Err(RegistryError::DuplicateComponent(component.name.clone()));
            }
        }

        Ok(Self {
            components: doc.components,
            by_name,
        })
    }

    /// All components, registry order
    pub fn components(&self) -> &[ComponentMeta] {
        &self.components
    }

    /// Exact-name lookup
    pub fn get(&self, name: &str) -> Option<&ComponentMeta> {
        self.by_name.get(name).map(|&pos| &self.components[pos])
    }

    /// Exact-name lookup that surfaces the not-found case as an error
    pub fn require(&self, name: &str) -> std::result::Result<&ComponentMeta, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::ComponentNotFound(name.to_string()))
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// Returns matches in registry order; an empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&ComponentMeta> {
        let query = query.to_lowercase();

        self.components
            .iter()
            .filter(|meta| {
                meta.name.to_lowercase().contains(&query)
                    || meta.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// All components in a category, registry order
    pub fn by_category(&self, category: &str) -> Vec<&ComponentMeta> {
        self.components
            .iter()
            .filter(|meta| meta.category == category)
            .collect()
    }

    /// Number of components in the registry
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

/// Group components by category, preserving first-seen category order and
/// registry order within each group. Recomputed per listing; never sorted.
pub fn group_by_category<'a>(
    components: &[&'a ComponentMeta],
) -> Vec<(&'a str, Vec<&'a ComponentMeta>)> {
    let mut groups: Vec<(&'a str, Vec<&'a ComponentMeta>)> = Vec::new();

    for meta in components.iter().copied() {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == meta.category.as_str())
        {
            Some((_, members)) => members.push(meta),
            None => groups.push((meta.category.as_str(), vec![meta])),
        }
    }

    groups
}
