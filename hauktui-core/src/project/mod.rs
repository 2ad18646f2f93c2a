//! Target-project services
//!
//! Everything that touches the user's project tree lives here: the
//! `hauktui.yml` configuration written by `init`, the installer that places
//! template files for `add`/`update`, and the differ behind `diff`.
//!
//! There is deliberately no manifest of installed components. The project
//! state is the filesystem: a component is installed exactly when its files
//! are present under the configured components directory.

mod config;
mod diff;
mod installer;

pub use config::{ProjectConfig, CONFIG_FILE, DEFAULT_COMPONENTS_DIR};
pub use diff::{diff_component, FileDiff, FileStatus};
pub use installer::{InstallOutcome, InstalledFile, Installer, RefreshOutcome, RefreshedFile};
