//! App directory skeleton
//!
//! Every path is composed from the output root and the app name; nothing here
//! depends on the process working directory.

use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Skeleton directories, relative to the app root, in creation order
const SKELETON: &[(&str, &str)] = &[
    ("bin", "bin"),
    ("appserver", "appserver/static"),
    ("default", "default"),
    ("data", "default/data"),
    ("ui", "default/data/ui"),
    ("nav", "default/data/ui/nav"),
    ("views", "default/data/ui/views"),
];

/// Paths of one generated app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    root: PathBuf,
}

impl AppLayout {
    pub fn new(output_root: &Path, app_name: &str) -> Self {
        Self {
            root: output_root.join(app_name),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join("bin")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join("appserver").join("static")
    }

    pub fn default_dir(&self) -> PathBuf {
        self.root.join("default")
    }

    /// Resolve a `/`-separated path relative to the app root
    pub fn resolve(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// Abort if the default config directory did not get created
    pub fn ensure_default_dir(&self) -> Result<PathBuf> {
        let default_dir = self.default_dir();
        if default_dir.is_dir() {
            Ok(default_dir)
        } else {
            Err(ScaffoldError::Structure {
                name: "default",
                path: default_dir,
            })
        }
    }
}

/// Delete any previous output for the app and build a fresh skeleton
pub fn create_directory_structure(output_root: &Path, app_name: &str) -> Result<AppLayout> {
    let layout = AppLayout::new(output_root, app_name);
    let root = layout.root();

    if root.is_dir() {
        std::fs::remove_dir_all(root).map_err(|e| ScaffoldError::io("remove", root, e))?;
    } else if root.exists() {
        std::fs::remove_file(root).map_err(|e| ScaffoldError::io("remove", root, e))?;
    }

    std::fs::create_dir_all(root).map_err(|e| ScaffoldError::io("create", root, e))?;

    for (name, relative) in SKELETON {
        let dir = layout.resolve(relative);
        if !dir.exists() {
            println!("  {} creating {} folder", "->".blue(), name);
            std::fs::create_dir_all(&dir).map_err(|e| ScaffoldError::io("create", &dir, e))?;
        }
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_skeleton() {
        let dir = TempDir::new().unwrap();
        let layout = create_directory_structure(dir.path(), "my_app").unwrap();

        assert_eq!(layout.root(), dir.path().join("my_app"));
        for path in [
            layout.bin_dir(),
            layout.static_dir(),
            layout.default_dir(),
            layout.resolve("default/data/ui/nav"),
            layout.resolve("default/data/ui/views"),
        ] {
            assert!(path.is_dir(), "missing {}", path.display());
        }
        assert!(layout.ensure_default_dir().is_ok());
    }

    #[test]
    fn test_previous_output_is_removed() {
        let dir = TempDir::new().unwrap();
        let stale = dir.path().join("my_app/bin/old.jar");
        std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
        std::fs::write(&stale, b"old").unwrap();

        create_directory_structure(dir.path(), "my_app").unwrap();

        assert!(!stale.exists());
        assert!(dir.path().join("my_app/bin").is_dir());
    }

    #[test]
    fn test_file_in_place_of_root_is_replaced() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("my_app"), b"not a dir").unwrap();

        let layout = create_directory_structure(dir.path(), "my_app").unwrap();
        assert!(layout.root().is_dir());
    }

    #[test]
    fn test_sibling_directories_untouched() {
        let dir = TempDir::new().unwrap();
        let sibling = dir.path().join("other_app/keep.txt");
        std::fs::create_dir_all(sibling.parent().unwrap()).unwrap();
        std::fs::write(&sibling, b"keep").unwrap();

        create_directory_structure(dir.path(), "my_app").unwrap();
        assert!(sibling.exists());
    }

    #[test]
    fn test_missing_default_dir_is_structure_error() {
        let dir = TempDir::new().unwrap();
        let layout = AppLayout::new(dir.path(), "my_app");

        let err = layout.ensure_default_dir().unwrap_err();
        assert!(matches!(err, ScaffoldError::Structure { name: "default", .. }));
    }

    #[test]
    fn test_resolve_relative_path() {
        let layout = AppLayout::new(Path::new("/out"), "app");
        assert_eq!(
            layout.resolve("default/data/ui/nav/default.xml"),
            Path::new("/out/app/default/data/ui/nav/default.xml")
        );
    }
}
