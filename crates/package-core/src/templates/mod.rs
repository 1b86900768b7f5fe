//! Template loading, rendering, and dependency copying
//!
//! This module provides:
//! - The template manifest (which files are rendered where, with which placeholders)
//! - Line-by-line placeholder rendering
//! - Best-effort copying of dependency artifacts
//! - App version checks

pub mod copier;
pub mod manifest;
pub mod render;
pub mod version;

pub use copier::{copy_dependencies, CopyReport};
pub use manifest::{Placeholder, TemplateEntry, TemplateManifest};
pub use render::{render_str, render_template, Substitutions};
pub use version::check_app_version;

use crate::{DEFAULT_TEMPLATE_SET, TEMPLATE_DIR_ENV};
use std::path::{Path, PathBuf};

/// Pick the template directory: explicit flag, then `ERP_TEMPLATE_DIR`, then
/// `templates/erp` beside the executable, then `templates/erp` in the current directory
pub fn resolve_template_dir(explicit: Option<PathBuf>) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_template_dir_from(explicit, std::env::var(TEMPLATE_DIR_ENV).ok(), exe_dir)
}

fn resolve_template_dir_from(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
    exe_dir: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return PathBuf::from(value);
    }

    let relative = Path::new("templates").join(DEFAULT_TEMPLATE_SET);
    exe_dir
        .map(|dir| dir.join(&relative))
        .filter(|candidate| candidate.is_dir())
        .unwrap_or(relative)
}
