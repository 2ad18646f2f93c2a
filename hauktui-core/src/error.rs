use thiserror::Error;

/// Errors raised by the registry and the project services built on it.
///
/// Only a missing exact-name lookup is an error; empty search results are
/// ordinary empty collections and never reach this type.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("component '{0}' not found in registry")]
    ComponentNotFound(String),

    #[error("duplicate component name '{0}' in registry data")]
    DuplicateComponent(String),

    #[error("component '{component}' lists file '{file}' but no bundled template exists for it")]
    MissingTemplate { component: String, file: String },

    #[error("invalid registry data: {0}")]
    InvalidRegistry(String),
}
