//! hauktui component registry
//!
//! The registry is the catalog of every terminal-UI component the CLI can
//! scaffold: metadata (name, category, description, dependencies, file list)
//! plus the template sources themselves.
//!
//! # Architecture
//!
//! ```text
//! fixtures/registry.yaml      ← Component metadata, registry order
//! fixtures/components/**      ← Template sources (opaque payload)
//!        │ include_str!
//!        ▼
//! RegistryIndex               ← Ordered, name-unique, read-only
//!        │
//!        ▼
//! list / view / add / diff / update
//! ```
//!
//! The index is rebuilt from the embedded data on first use and never
//! mutated; registry order is observable (listings group categories in
//! first-seen order), so it is kept as a vector rather than a map.

mod bundled;
mod format;
mod index;

pub use bundled::{bundled, load_bundled, template_source};
pub use format::{component_details, component_row, LIST_NAME_WIDTH};
pub use index::{
    group_by_category, ComponentMeta, RegistryDocument, RegistryIndex, REGISTRY_API_VERSION,
    REGISTRY_KIND,
};
