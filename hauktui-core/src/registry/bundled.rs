//! Bundled registry data
//!
//! The registry metadata and every component template ship inside the binary
//! via `include_str!`; nothing is fetched at runtime. Loading validates that
//! every file a component declares has a matching embedded template, so a
//! registry/fixture mismatch fails loudly instead of surfacing as a broken
//! `add` later.

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::error::RegistryError;

use super::RegistryIndex;

const REGISTRY_MANIFEST: &str = include_str!("../../fixtures/registry.yaml");

const BUTTON_SOURCE: &str = include_str!("../../fixtures/components/button/button.tsx");
const TEXT_INPUT_SOURCE: &str = include_str!("../../fixtures/components/text-input/text-input.tsx");
const SELECT_SOURCE: &str = include_str!("../../fixtures/components/select/select.tsx");
const SELECT_OPTION_SOURCE: &str =
    include_str!("../../fixtures/components/select/select-option.tsx");
const CHECKBOX_SOURCE: &str = include_str!("../../fixtures/components/checkbox/checkbox.tsx");
const FORM_SOURCE: &str = include_str!("../../fixtures/components/form/form.tsx");
const FORM_FIELD_SOURCE: &str = include_str!("../../fixtures/components/form/form-field.tsx");
const BADGE_SOURCE: &str = include_str!("../../fixtures/components/badge/badge.tsx");
const AVATAR_SOURCE: &str = include_str!("../../fixtures/components/avatar/avatar.tsx");
const SPINNER_SOURCE: &str = include_str!("../../fixtures/components/spinner/spinner.tsx");
const PROGRESS_BAR_SOURCE: &str =
    include_str!("../../fixtures/components/progress-bar/progress-bar.tsx");

static BUNDLED: Lazy<RegistryIndex> = Lazy::new(|| {
    load_bundled().expect("embedded registry data failed to load")
});

/// The bundled registry, rebuilt once per process from the embedded data
pub fn bundled() -> &'static RegistryIndex {
    &BUNDLED
}

/// Parse and validate the embedded registry document
pub fn load_bundled() -> Result<RegistryIndex> {
    let index = RegistryIndex::from_yaml(REGISTRY_MANIFEST)?;

    for component in index.components() {
        for file in &component.files {
            if template_source(&component.name, file).is_none() {
                return Err(RegistryError::MissingTemplate {
                    component: component.name.clone(),
                    file: file.clone(),
                }
                .into());
            }
        }
    }

    Ok(index)
}

/// The embedded template source for one file of one component
pub fn template_source(component: &str, file: &str) -> Option<&'static str> {
    match (component, file) {
        ("button", "button.tsx") => Some(BUTTON_SOURCE),
        ("text-input", "text-input.tsx") => Some(TEXT_INPUT_SOURCE),
        ("select", "select.tsx") => Some(SELECT_SOURCE),
        ("select", "select-option.tsx") => Some(SELECT_OPTION_SOURCE),
        ("checkbox", "checkbox.tsx") => Some(CHECKBOX_SOURCE),
        ("form", "form.tsx") => Some(FORM_SOURCE),
        ("form", "form-field.tsx") => Some(FORM_FIELD_SOURCE),
        ("badge", "badge.tsx") => Some(BADGE_SOURCE),
        ("avatar", "avatar.tsx") => Some(AVATAR_SOURCE),
        ("spinner", "spinner.tsx") => Some(SPINNER_SOURCE),
        ("progress-bar", "progress-bar.tsx") => Some(PROGRESS_BAR_SOURCE),
        _ => None,
    }
}
