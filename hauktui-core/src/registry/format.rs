//! Human-readable rendering of component metadata
//!
//! Pure string builders so output is directly assertable; color and stream
//! choice stay in the reporter.

use super::ComponentMeta;

/// Width of the name column in `list` rows
pub const LIST_NAME_WIDTH: usize = 16;

/// One `list` row: indented name padded to a fixed column, then the first
/// line of the description.
pub fn component_row(meta: &ComponentMeta, width: usize) -> String {
    format!("  {:<width$}  {}", meta.name, short_description(meta))
}

fn short_description(meta: &ComponentMeta) -> &str {
    meta.description
        .lines()
        .next()
        .unwrap_or(&meta.description)
        .trim()
}

/// The full metadata block printed by `view`
pub fn component_details(meta: &ComponentMeta) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Component: {}", meta.name));
    lines.push(format!("Category:  {}", meta.category));
    lines.push(String::new());

    lines.push("Description:".to_string());
    for line in meta.description.lines() {
        lines.push(format!("  {line}"));
    }
    lines.push(String::new());

    if !meta.dependencies.is_empty() {
        lines.push(format!("Dependencies: {}", meta.dependencies.join(", ")));
    }

    lines.push("Files:".to_string());
    for file in &meta.files {
        lines.push(format!("  {file}"));
    }
    lines.push(String::new());

    lines.push("Installation:".to_string());
    lines.push(format!("  hauktui add {}", meta.name));

    lines.join("\n")
}

#[cfg(test)]
mod format_tests {
    use super::*;

    fn sample_meta() -> ComponentMeta {
        ComponentMeta {
            name: "select".to_string(),
            category: "form".to_string(),
            description: "Single-choice select list.".to_string(),
            dependencies: vec!["hauk".to_string()],
            files: vec!["select.tsx".to_string(), "select-option.tsx".to_string()],
        }
    }

    #[test]
    fn test_row_pads_name_to_column() {
        let row = component_row(&sample_meta(), 16);

        assert!(row.starts_with("  select"));
        let description_column = row.find("Single-choice").unwrap();
        assert_eq!(description_column, 2 + 16 + 2);
    }

    #[test]
    fn test_row_uses_first_description_line_only() {
        let mut meta = sample_meta();
        meta.description = "First line.\nSecond line.".to_string();

        let row = component_row(&meta, 16);
        assert!(row.contains("First line."));
        assert!(!row.contains("Second line."));
    }

    #[test]
    fn test_details_cover_all_metadata() {
        let details = component_details(&sample_meta());

        assert!(details.contains("Component: select"));
        assert!(details.contains("Category:  form"));
        assert!(details.contains("Single-choice select list."));
        assert!(details.contains("Dependencies: hauk"));
        assert!(details.contains("  select.tsx"));
        assert!(details.contains("  select-option.tsx"));
        assert!(details.contains("hauktui add select"));
        assert!(!details.ends_with('\n'));
    }

    #[test]
    fn test_details_omit_empty_dependency_list() {
        let mut meta = sample_meta();
        meta.dependencies.clear();

        let details = component_details(&meta);
        assert!(!details.contains("Dependencies:"));
    }
}
