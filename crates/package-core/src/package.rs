//! Package parameters supplied on the command line
//!
//! A `PackageSpec` fully determines one scaffolding run. It is validated once at
//! construction so that nothing downstream has to re-check it before touching the
//! filesystem.

use crate::error::{Result, ScaffoldError};
use crate::templates::manifest::Placeholder;
use crate::templates::render::Substitutions;
use std::path::{Component, Path, PathBuf};

/// Parameters of the app package being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    app_name: String,
    family_name: String,
    class_name: String,
    version: String,
    dependency_source: PathBuf,
}

impl PackageSpec {
    /// Validate and build a package spec
    ///
    /// The app name becomes a directory that is deleted and recreated on every
    /// run, so it must be a single plain path segment.
    pub fn new(
        app_name: impl Into<String>,
        family_name: impl Into<String>,
        class_name: impl Into<String>,
        version: impl Into<String>,
        dependency_source: impl Into<PathBuf>,
    ) -> Result<Self> {
        let spec = Self {
            app_name: app_name.into(),
            family_name: family_name.into(),
            class_name: class_name.into(),
            version: version.into(),
            dependency_source: dependency_source.into(),
        };

        validate_app_name(&spec.app_name)?;
        for (label, value) in [
            ("family name", &spec.family_name),
            ("class name", &spec.class_name),
            ("version", &spec.version),
        ] {
            if value.trim().is_empty() {
                return Err(ScaffoldError::Usage(format!("{} must not be empty", label)));
            }
        }

        Ok(spec)
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Directory whose contents are copied into the app's bin folder
    pub fn dependency_source(&self) -> &Path {
        &self.dependency_source
    }

    /// Value substituted for a placeholder
    pub fn value_of(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::AppName => &self.app_name,
            Placeholder::FamilyName => &self.family_name,
            Placeholder::ClassName => &self.class_name,
            Placeholder::Version => &self.version,
        }
    }

    /// Build the ordered substitution list for the given placeholders
    pub fn substitutions(&self, placeholders: &[Placeholder]) -> Substitutions {
        placeholders
            .iter()
            .fold(Substitutions::new(), |subs, placeholder| {
                subs.with(placeholder.name(), self.value_of(*placeholder))
            })
    }
}

fn validate_app_name(app_name: &str) -> Result<()> {
    if app_name.trim().is_empty() {
        return Err(ScaffoldError::Usage("app name must not be empty".to_string()));
    }

    let mut components = Path::new(app_name).components();
    let single_segment = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_segment || app_name.contains(['/', '\\']) {
        return Err(ScaffoldError::Usage(format!(
            "app name '{}' must be a single directory name",
            app_name
        )));
    }

    Ok(())
}
