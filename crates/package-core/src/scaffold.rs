//! End-to-end package generation

use crate::assets::write_html_documentation;
use crate::error::{Result, ScaffoldError};
use crate::layout::create_directory_structure;
use crate::package::PackageSpec;
use crate::templates::copier::{copy_dependencies, CopyReport};
use crate::templates::manifest::TemplateManifest;
use crate::templates::render::render_template;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Where to read templates from and where to write the app
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory the app root is created in
    pub output_dir: PathBuf,

    /// Directory holding the template files (and optional template.yaml)
    pub template_dir: PathBuf,
}

/// Result of copying the dependency artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyOutcome {
    Copied(CopyReport),
    /// Copy failed; the run continued without (all of) the artifacts
    NotCopied(String),
}

/// What a scaffolding run produced
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub app_root: PathBuf,
    pub dependencies: DependencyOutcome,
    pub rendered: Vec<PathBuf>,
    pub documentation: PathBuf,
}

/// Build the complete app package for `spec`
///
/// The template set is loaded before the previous output is deleted, so a bad
/// template directory leaves existing output alone. Dependency copy failures are
/// reported and skipped; every other failure aborts the run.
pub fn scaffold(spec: &PackageSpec, options: &ScaffoldOptions) -> Result<ScaffoldReport> {
    let manifest = TemplateManifest::load(&options.template_dir)?;

    println!(
        "{}",
        format!("Creating {} package...", spec.app_name())
            .cyan()
            .bold()
    );

    let app_root = options.output_dir.join(spec.app_name());
    if is_within(spec.dependency_source(), &app_root) {
        eprintln!(
            "{} dependency directory {} is inside {} and is removed before it can be copied",
            "Warning:".yellow(),
            spec.dependency_source().display(),
            app_root.display()
        );
    }

    let layout = create_directory_structure(&options.output_dir, spec.app_name())?;

    let bin_dir = layout.bin_dir();
    let dependencies = match copy_dependencies(spec.dependency_source(), &bin_dir) {
        Ok(report) => {
            println!(
                "  {} copied {} dependency file(s) to bin",
                "->".blue(),
                report.files.len()
            );
            DependencyOutcome::Copied(report)
        }
        Err(e) => {
            eprintln!("{} Directory not copied. Error: {}", "Warning:".yellow(), e);
            DependencyOutcome::NotCopied(e.to_string())
        }
    };

    layout.ensure_default_dir()?;

    let mut rendered = Vec::with_capacity(manifest.templates.len());
    for entry in &manifest.templates {
        let source = options.template_dir.join(&entry.source);
        let dest = layout.resolve(&entry.dest);

        if let Some(parent) = dest.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ScaffoldError::io("create", parent, e))?;
            }
        }

        println!("  {} creating {}", "->".blue(), entry.dest);
        render_template(&source, &dest, &spec.substitutions(&entry.placeholders))?;

        if dest.extension().is_some_and(|ext| ext == "sh") {
            mark_executable(&dest)?;
        }

        rendered.push(dest);
    }

    let documentation = write_html_documentation(&layout.static_dir(), spec.app_name())?;
    println!(
        "  {} creating appserver/static/{}.html",
        "->".blue(),
        spec.app_name()
    );

    Ok(ScaffoldReport {
        app_root: layout.root().to_path_buf(),
        dependencies,
        rendered,
        documentation,
    })
}

/// True if `path` exists and resolves to `root` or somewhere below it
fn is_within(path: &Path, root: &Path) -> bool {
    match (path.canonicalize(), root.canonicalize()) {
        (Ok(path), Ok(root)) => path.starts_with(root),
        _ => false,
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)
        .map_err(|e| ScaffoldError::io("read metadata of", path, e))?
        .permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(path, permissions)
        .map_err(|e| ScaffoldError::io("set permissions on", path, e))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
