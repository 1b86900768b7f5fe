//! Static documentation page served from appserver/static

use crate::error::{Result, ScaffoldError};
use std::path::{Path, PathBuf};

/// HTML stub with the app name as title. The name is inserted as-is.
pub fn documentation_html(app_name: &str) -> String {
    format!(
        "<html>\n<head>\n<title>{}</title>\n</head>\n<body></body>\n</html>",
        app_name
    )
}

/// Write `<static_dir>/<app_name>.html` and return its path
pub fn write_html_documentation(static_dir: &Path, app_name: &str) -> Result<PathBuf> {
    let path = static_dir.join(format!("{}.html", app_name));
    std::fs::write(&path, documentation_html(app_name))
        .map_err(|e| ScaffoldError::io("write", &path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_stub() {
        let dir = TempDir::new().unwrap();
        let path = write_html_documentation(dir.path(), "Foo").unwrap();

        assert_eq!(path, dir.path().join("Foo.html"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "<html>\n<head>\n<title>Foo</title>\n</head>\n<body></body>\n</html>"
        );
    }

    #[test]
    fn test_app_name_not_escaped() {
        assert!(documentation_html("a<b>").contains("<title>a<b></title>"));
    }
}
