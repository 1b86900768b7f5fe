//! Error types for package scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Errors raised while building an app package
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Invalid command-line input, detected before any filesystem change
    #[error("invalid arguments: {0}")]
    Usage(String),

    /// An expected directory is missing after the skeleton was built
    #[error("unable to find {name} directory: {}", path.display())]
    Structure { name: &'static str, path: PathBuf },

    /// Copying the dependency artifacts into bin failed
    #[error("failed to copy {} to {}: {message}", from.display(), to.display())]
    CopyDependencies {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    /// Filesystem failure on a specific path
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template manifest could not be read or is invalid
    #[error("invalid template manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

impl ScaffoldError {
    /// Wrap an io error with the action and path it happened on
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_error_message() {
        let err = ScaffoldError::Structure {
            name: "default",
            path: PathBuf::from("my_app/default"),
        };
        assert_eq!(
            err.to_string(),
            "unable to find default directory: my_app/default"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ScaffoldError::io(
            "read template",
            "templates/app.conf",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let message = err.to_string();
        assert!(message.contains("read template"));
        assert!(message.contains("templates/app.conf"));
    }
}
