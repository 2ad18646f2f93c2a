//! hauktui - component registry and scaffolding CLI for hauk terminal UIs
//!
//! Parses one subcommand per invocation, queries the bundled component
//! registry and reads/writes files in the user's project tree. All
//! user-facing output flows through the core reporter; diagnostics go to
//! stderr via tracing.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use hauktui_core::project::{
    diff_component, FileStatus, InstallOutcome, Installer, ProjectConfig, RefreshOutcome,
    CONFIG_FILE,
};
use hauktui_core::registry::{
    self, group_by_category, ComponentMeta, RegistryIndex, LIST_NAME_WIDTH,
};
use hauktui_core::Reporter;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "hauktui",
    about = "Component registry and scaffolding for hauk terminal UIs",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available components, grouped by category
    List {
        /// Filter by case-insensitive substring of name or description
        #[clap(short, long)]
        search: Option<String>,

        /// Filter by exact category
        #[clap(short, long)]
        category: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show full metadata for one component
    View {
        /// Component name
        component: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Copy component source files into the current project
    Add {
        /// Component names
        #[clap(required = true)]
        components: Vec<String>,

        /// Overwrite files that already exist
        #[clap(long)]
        force: bool,
    },

    /// Show differences between installed files and the registry templates
    Diff {
        /// Component name
        component: String,
    },

    /// Refresh installed component files from the registry templates
    Update {
        /// Component names (all installed components if omitted)
        components: Vec<String>,
    },

    /// Scaffold the project configuration
    Init {
        /// Directory that receives component source files
        #[clap(long)]
        dir: Option<PathBuf>,
    },
}

/// Initialize tracing from the --log-level flag. Logs go to stderr so they
/// never mix with command output on stdout.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let mut reporter = Reporter::color();
    let index = registry::bundled();
    tracing::debug!("registry loaded with {} components", index.component_count());

    match cli.command {
        Command::List {
            search,
            category,
            json,
        } => list_command(&mut reporter, index, search.as_deref(), category.as_deref(), json),
        Command::View { component, json } => view_command(&mut reporter, index, &component, json),
        Command::Add { components, force } => {
            add_command(&mut reporter, index, &components, force)
        }
        Command::Diff { component } => diff_command(&mut reporter, index, &component),
        Command::Update { components } => update_command(&mut reporter, index, &components),
        Command::Init { dir } => init_command(&mut reporter, dir),
    }
}

fn list_command<O: Write, E: Write>(
    reporter: &mut Reporter<O, E>,
    index: &RegistryIndex,
    search: Option<&str>,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    // Search narrows the full set first, then the category filter narrows
    // the matches further
    let mut results: Vec<&ComponentMeta> = match search {
        Some(query) => index.search(query),
        None => index.components().iter().collect(),
    };

    if let Some(category) = category {
        results.retain(|meta| meta.category == category);
    }

    if json {
        reporter.log(serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        reporter.warn("No components match the given filters.");
        return Ok(());
    }

    for (category, members) in group_by_category(&results) {
        reporter.log(category.to_uppercase());
        for meta in members {
            reporter.log(registry::component_row(meta, LIST_NAME_WIDTH));
        }
        reporter.log("");
    }

    reporter.info("Run 'hauktui view <component>' for details, 'hauktui add <component>' to install.");
    Ok(())
}

fn view_command<O: Write, E: Write>(
    reporter: &mut Reporter<O, E>,
    index: &RegistryIndex,
    name: &str,
    json: bool,
) -> Result<()> {
    let meta = match index.require(name) {
        Ok(meta) => meta,
        Err(err) => {
            reporter.error(err.to_string());
            reporter.warn("Run 'hauktui list' to see available components.");
            std::process::exit(1);
        }
    };

    if json {
        reporter.log(serde_json::to_string_pretty(meta)?);
    } else {
        reporter.log(registry::component_details(meta));
    }

    Ok(())
}

fn add_command<O: Write, E: Write>(
    reporter: &mut Reporter<O, E>,
    index: &RegistryIndex,
    names: &[String],
    force: bool,
) -> Result<()> {
    let root = std::env::current_dir().context("Failed to determine current directory")?;
    let config = require_project(reporter, &root);
    let selected = resolve_components(reporter, index, names);

    let installer = Installer::new(config.components_root(&root));

    for meta in selected {
        for file in installer.install(meta, force)? {
            let shown = display_path(&file.path, &root);
            match file.outcome {
                InstallOutcome::Written => reporter.success(format!("Added {shown}")),
                InstallOutcome::Overwritten => reporter.success(format!("Overwrote {shown}")),
                InstallOutcome::Skipped => reporter.warn(format!(
                    "Skipped {shown} (already exists, use --force to overwrite)"
                )),
            }
        }

        if !meta.dependencies.is_empty() {
            reporter.info(format!(
                "'{}' requires packages: {}",
                meta.name,
                meta.dependencies.join(", ")
            ));
        }
    }

    Ok(())
}

fn diff_command<O: Write, E: Write>(
    reporter: &mut Reporter<O, E>,
    index: &RegistryIndex,
    name: &str,
) -> Result<()> {
    let root = std::env::current_dir().context("Failed to determine current directory")?;
    let config = require_project(reporter, &root);

    let meta = match index.require(name) {
        Ok(meta) => meta,
        Err(err) => {
            reporter.error(err.to_string());
            reporter.warn("Run 'hauktui list' to see available components.");
            std::process::exit(1);
        }
    };

    let diffs = diff_component(&config.components_root(&root), meta)?;

    let mut modified = 0;
    let mut missing = 0;

    for entry in &diffs {
        match &entry.status {
            FileStatus::Missing => {
                missing += 1;
                reporter.warn(format!("{} is not installed", entry.relative));
            }
            FileStatus::Unchanged => {
                reporter.success(format!("{} unchanged", entry.relative));
            }
            FileStatus::Modified { patch } => {
                modified += 1;
                reporter.info(format!(
                    "{} differs from the registry template:",
                    entry.relative
                ));
                reporter.log(patch.trim_end());
            }
        }
    }

    if modified == 0 && missing == 0 {
        reporter.success(format!("'{}' matches the registry templates.", meta.name));
    } else {
        reporter.info(format!("{modified} file(s) modified, {missing} missing."));
    }

    Ok(())
}

fn update_command<O: Write, E: Write>(
    reporter: &mut Reporter<O, E>,
    index: &RegistryIndex,
    names: &[String],
) -> Result<()> {
    let root = std::env::current_dir().context("Failed to determine current directory")?;
    let config = require_project(reporter, &root);
    let installer = Installer::new(config.components_root(&root));

    let targets: Vec<&ComponentMeta> = if names.is_empty() {
        index
            .components()
            .iter()
            .filter(|meta| installer.is_installed(meta))
            .collect()
    } else {
        let mut targets = Vec::new();
        for meta in resolve_components(reporter, index, names) {
            if installer.is_installed(meta) {
                targets.push(meta);
            } else {
                reporter.warn(format!("'{}' is not installed, skipping", meta.name));
            }
        }
        targets
    };

    if targets.is_empty() {
        reporter.warn("No installed components to update.");
        return Ok(());
    }

    let mut refreshed = 0;

    for meta in &targets {
        for file in installer.refresh(meta)? {
            let shown = display_path(&file.path, &root);
            match file.outcome {
                RefreshOutcome::Restored => {
                    refreshed += 1;
                    reporter.success(format!("Restored {shown}"));
                }
                RefreshOutcome::Refreshed => {
                    refreshed += 1;
                    reporter.success(format!("Refreshed {shown}"));
                }
                RefreshOutcome::Current => reporter.log(format!("  {shown} up to date")),
            }
        }
    }

    reporter.info(format!(
        "Checked {} component(s), refreshed {} file(s).",
        targets.len(),
        refreshed
    ));

    Ok(())
}

fn init_command<O: Write, E: Write>(
    reporter: &mut Reporter<O, E>,
    dir: Option<PathBuf>,
) -> Result<()> {
    let root = std::env::current_dir().context("Failed to determine current directory")?;

    if ProjectConfig::is_initialized(&root) {
        reporter.log(format!(
            "Project already initialized ({CONFIG_FILE} exists)."
        ));
        return Ok(());
    }

    let config = match dir {
        Some(dir) => ProjectConfig::with_components_dir(dir),
        None => ProjectConfig::default(),
    };

    config.save(&root)?;

    let components_root = config.components_root(&root);
    std::fs::create_dir_all(&components_root).with_context(|| {
        format!(
            "Failed to create components directory: {}",
            components_root.display()
        )
    })?;

    reporter.success("Initialized hauktui project.");
    reporter.log(format!("  Configuration: {CONFIG_FILE}"));
    reporter.log(format!("  Components:    {}", config.components_dir.display()));
    reporter.log("");
    reporter.info("Run 'hauktui list' to browse available components.");

    Ok(())
}

/// Load the project config or exit with a hint to run `init`
fn require_project<O: Write, E: Write>(
    reporter: &mut Reporter<O, E>,
    root: &std::path::Path,
) -> ProjectConfig {
    if !ProjectConfig::is_initialized(root) {
        reporter.error(format!("No {CONFIG_FILE} found in the current directory."));
        reporter.warn("Run 'hauktui init' to set up the project first.");
        std::process::exit(1);
    }

    match ProjectConfig::load(root) {
        Ok(config) => config,
        Err(err) => {
            reporter.error(format!("{err:#}"));
            std::process::exit(1);
        }
    }
}

/// Resolve every requested name before anything is written; any unknown
/// name aborts the whole command
fn resolve_components<'a, O: Write, E: Write>(
    reporter: &mut Reporter<O, E>,
    index: &'a RegistryIndex,
    names: &[String],
) -> Vec<&'a ComponentMeta> {
    let mut selected = Vec::with_capacity(names.len());

    for name in names {
        match index.require(name) {
            Ok(meta) => selected.push(meta),
            Err(err) => {
                reporter.error(err.to_string());
                reporter.warn("Run 'hauktui list' to see available components.");
                std::process::exit(1);
            }
        }
    }

    selected
}

fn display_path(path: &std::path::Path, root: &std::path::Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
