use std::path::{Component, Path, PathBuf};

use chrono::Local;

/// `"October 2026"`-style label for the current local month.
pub(crate) fn current_month_year() -> String {
    Local::now().format("%B %Y").to_string()
}

/// One `../` per directory the input sits below the site root.
pub(crate) fn path_prefix(input_path: &Path) -> String {
    let depth = input_path
        .parent()
        .map_or(0, |dir| {
            dir.components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count()
        });
    "../".repeat(depth)
}

pub(crate) fn default_output_path(input_path: &Path) -> PathBuf {
    input_path.with_extension("html")
}

/// Link with `/` separators; absolute paths keep their leading `/`.
pub(crate) fn href_of(path: &Path) -> String {
    let joined = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    if path.has_root() {
        format!("/{joined}")
    } else {
        joined
    }
}
