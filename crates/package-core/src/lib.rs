//! Package Core - Shared library for scaffolding Splunk ERP app packages
//!
//! This library builds the directory tree and configuration files of an app that
//! hosts an External Result Provider (ERP). It is used by the `create-package`
//! binary, but every step is exposed so other front ends can drive it.
//!
//! # Architecture
//!
//! - **Core Operations** - directory skeleton, dependency copying, template rendering,
//!   the static documentation page
//! - **Workflow Orchestration** - `scaffold` runs the steps in order for a `PackageSpec`
//! - **Advisory Checks** - app version and Java runtime detection
//!
//! # Example Usage
//!
//! ```ignore
//! use package_core::{scaffold, PackageSpec, ScaffoldOptions};
//!
//! let spec = PackageSpec::new("my_app", "hadoop", "com.example.Provider", "1.0.0", "jars")?;
//! let report = scaffold(&spec, &ScaffoldOptions {
//!     output_dir: ".".into(),
//!     template_dir: "templates/erp".into(),
//! })?;
//! ```

pub mod assets;
pub mod error;
pub mod layout;
pub mod package;
pub mod runtime;
pub mod scaffold;
pub mod templates;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use layout::{create_directory_structure, AppLayout};
pub use package::PackageSpec;
pub use runtime::{check_java, RuntimeInfo};
pub use scaffold::{scaffold, DependencyOutcome, ScaffoldOptions, ScaffoldReport};
pub use templates::{
    copy_dependencies, render_template, resolve_template_dir, CopyReport, Placeholder,
    Substitutions, TemplateManifest,
};

/// Environment variable that overrides the template directory
pub const TEMPLATE_DIR_ENV: &str = "ERP_TEMPLATE_DIR";

/// Name of the template set shipped with the tool
pub const DEFAULT_TEMPLATE_SET: &str = "erp";
