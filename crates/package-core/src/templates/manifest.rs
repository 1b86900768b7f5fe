//! Template manifest types and parsing

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

/// File name of the optional manifest inside a template directory
pub const MANIFEST_FILE: &str = "template.yaml";

/// Named placeholder understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placeholder {
    AppName,
    FamilyName,
    ClassName,
    Version,
}

impl Placeholder {
    /// Token name without the leading `$`
    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::AppName => "app-name",
            Placeholder::FamilyName => "family-name",
            Placeholder::ClassName => "class-name",
            Placeholder::Version => "version",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name())
    }
}

/// One template file and where its rendered output goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Source path relative to the template directory
    pub source: String,

    /// Destination path relative to the app root
    pub dest: String,

    /// Placeholders substituted in this template, in application order
    #[serde(default)]
    pub placeholders: Vec<Placeholder>,
}

impl TemplateEntry {
    fn new(source: &str, dest: &str, placeholders: &[Placeholder]) -> Self {
        Self {
            source: source.to_string(),
            dest: dest.to_string(),
            placeholders: placeholders.to_vec(),
        }
    }
}

/// Ordered set of templates rendered into every package (templates/<set>/template.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    pub templates: Vec<TemplateEntry>,
}

impl Default for TemplateManifest {
    fn default() -> Self {
        use Placeholder::*;

        Self {
            templates: vec![
                TemplateEntry::new("erp_script.sh", "bin/erp_script.sh", &[AppName]),
                TemplateEntry::new("default.xml", "default/data/ui/nav/default.xml", &[]),
                TemplateEntry::new(
                    "Documentation.xml",
                    "default/data/ui/views/Documentation.xml",
                    &[AppName],
                ),
                TemplateEntry::new(
                    "indexes.conf",
                    "default/indexes.conf",
                    &[AppName, FamilyName, ClassName],
                ),
                TemplateEntry::new(
                    "app.conf",
                    "default/app.conf",
                    &[AppName, FamilyName, Version],
                ),
            ],
        }
    }
}

impl TemplateManifest {
    /// Load `template.yaml` from a template directory, falling back to the built-in set
    pub fn load(template_dir: &Path) -> Result<Self> {
        if !template_dir.is_dir() {
            return Err(ScaffoldError::Manifest {
                path: template_dir.to_path_buf(),
                message: "template directory not found".to_string(),
            });
        }

        let manifest_path = template_dir.join(MANIFEST_FILE);
        if !manifest_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&manifest_path)
            .map_err(|e| ScaffoldError::io("read", &manifest_path, e))?;
        let manifest: TemplateManifest =
            serde_yaml::from_str(&content).map_err(|e| ScaffoldError::Manifest {
                path: manifest_path.clone(),
                message: e.to_string(),
            })?;
        manifest.validate(&manifest_path)?;

        Ok(manifest)
    }

    /// Reject destinations that would land outside the app root
    fn validate(&self, manifest_path: &Path) -> Result<()> {
        for entry in &self.templates {
            let dest = Path::new(&entry.dest);
            let contained = !entry.dest.is_empty()
                && dest.components().all(|c| matches!(c, Component::Normal(_)));
            if !contained {
                return Err(ScaffoldError::Manifest {
                    path: manifest_path.to_path_buf(),
                    message: format!(
                        "destination '{}' must be a relative path inside the app",
                        entry.dest
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_placeholder_display() {
        assert_eq!(Placeholder::AppName.to_string(), "$app-name");
        assert_eq!(Placeholder::ClassName.to_string(), "$class-name");
    }

    #[test]
    fn test_default_manifest_covers_all_outputs() {
        let manifest = TemplateManifest::default();
        let dests: Vec<_> = manifest.templates.iter().map(|t| t.dest.as_str()).collect();
        assert_eq!(
            dests,
            vec![
                "bin/erp_script.sh",
                "default/data/ui/nav/default.xml",
                "default/data/ui/views/Documentation.xml",
                "default/indexes.conf",
                "default/app.conf",
            ]
        );
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let manifest = TemplateManifest::load(dir.path()).unwrap();
        assert_eq!(manifest, TemplateManifest::default());
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = TempDir::new().unwrap();
        let result = TemplateManifest::load(&dir.path().join("nope"));
        assert!(matches!(result, Err(ScaffoldError::Manifest { .. })));
    }

    #[test]
    fn test_load_yaml_manifest() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "templates:\n  - source: props.conf\n    dest: default/props.conf\n    placeholders: [app-name, version]\n  - source: README\n    dest: README\n",
        )
        .unwrap();

        let manifest = TemplateManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.templates.len(), 2);
        assert_eq!(
            manifest.templates[0].placeholders,
            vec![Placeholder::AppName, Placeholder::Version]
        );
        assert!(manifest.templates[1].placeholders.is_empty());
    }

    #[test]
    fn test_load_rejects_escaping_destination() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "templates:\n  - source: x\n    dest: ../outside\n",
        )
        .unwrap();

        let result = TemplateManifest::load(dir.path());
        assert!(matches!(result, Err(ScaffoldError::Manifest { .. })));
    }

    #[test]
    fn test_load_rejects_unknown_placeholder() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "templates:\n  - source: x\n    dest: x\n    placeholders: [author]\n",
        )
        .unwrap();

        assert!(TemplateManifest::load(dir.path()).is_err());
    }
}
