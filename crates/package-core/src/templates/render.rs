//! Placeholder substitution for template files
//!
//! Templates are plain text with `$token` placeholders. A token is the longest run
//! of `[A-Za-z0-9_-]` after a `$`; it is replaced only when the whole run names a
//! known substitution, so `$app-name` never matches inside `$app-name-extra`.
//! Unknown tokens such as `$SPLUNK_HOME` pass through unchanged, and substituted
//! values are never scanned again.

use crate::error::{Result, ScaffoldError};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Ordered list of (token, value) pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    pairs: Vec<(String, String)>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair; the token is given without its leading `$`
    pub fn with(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(token, value);
        self
    }

    pub fn push(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((token.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(t, v)| (t.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First value registered for a token
    fn lookup(&self, token: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v.as_str())
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Substitute every known token in a piece of text
pub fn render_str(text: &str, subs: &Substitutions) -> String {
    if subs.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);

        let after = &rest[pos + 1..];
        let token_len = after
            .find(|c: char| !is_token_char(c))
            .unwrap_or(after.len());
        let token = &after[..token_len];

        match subs.lookup(token) {
            Some(value) => out.push_str(value),
            None => {
                out.push('$');
                out.push_str(token);
            }
        }

        rest = &after[token_len..];
    }

    out.push_str(rest);
    out
}

/// Render a template file line by line into `dest`
///
/// Lines are written as they are rendered. A failure part way through leaves a
/// partial destination file behind.
pub fn render_template(source: &Path, dest: &Path, subs: &Substitutions) -> Result<()> {
    let input = File::open(source).map_err(|e| ScaffoldError::io("open template", source, e))?;
    let output = File::create(dest).map_err(|e| ScaffoldError::io("create", dest, e))?;

    let mut reader = BufReader::new(input);
    let mut writer = BufWriter::new(output);
    let mut line = String::new();

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| ScaffoldError::io("read template", source, e))?;
        if read == 0 {
            break;
        }

        writer
            .write_all(render_str(&line, subs).as_bytes())
            .map_err(|e| ScaffoldError::io("write", dest, e))?;
    }

    writer
        .flush()
        .map_err(|e| ScaffoldError::io("write", dest, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn subs() -> Substitutions {
        Substitutions::new()
            .with("app-name", "Foo")
            .with("family-name", "hadoop")
            .with("version", "1.2.3")
    }

    #[test]
    fn test_replaces_known_token() {
        assert_eq!(render_str("label = $app-name", &subs()), "label = Foo");
    }

    #[test]
    fn test_exact_token_only() {
        assert_eq!(
            render_str("$app-name-extra $app-name_x $app-name.", &subs()),
            "$app-name-extra $app-name_x Foo."
        );
    }

    #[test]
    fn test_unknown_tokens_kept() {
        assert_eq!(
            render_str("vix.command = $SPLUNK_HOME/etc/apps/$app-name/bin", &subs()),
            "vix.command = $SPLUNK_HOME/etc/apps/Foo/bin"
        );
        assert_eq!(render_str("cost: 5$ and $", &subs()), "cost: 5$ and $");
    }

    #[test]
    fn test_multiple_tokens_on_one_line() {
        assert_eq!(
            render_str("[provider-family:$family-name] $version/$app-name", &subs()),
            "[provider-family:hadoop] 1.2.3/Foo"
        );
    }

    #[test]
    fn test_order_independent_and_not_rescanned() {
        let forward = Substitutions::new()
            .with("app-name", "$version")
            .with("version", "9");
        let reverse = Substitutions::new()
            .with("version", "9")
            .with("app-name", "$version");

        let text = "$app-name $version";
        assert_eq!(render_str(text, &forward), "$version 9");
        assert_eq!(render_str(text, &forward), render_str(text, &reverse));
    }

    #[test]
    fn test_only_requested_placeholders_apply() {
        let only_app = Substitutions::new().with("app-name", "Foo");
        assert_eq!(
            render_str("$app-name $version", &only_app),
            "Foo $version"
        );
    }

    #[test]
    fn test_render_template_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("app.conf");
        let dest = dir.path().join("out.conf");
        std::fs::write(
            &source,
            "# header\r\n[ui]\nlabel = $app-name\nversion = $version\nno newline",
        )
        .unwrap();

        render_template(&source, &dest, &subs()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&dest).unwrap(),
            "# header\r\n[ui]\nlabel = Foo\nversion = 1.2.3\nno newline"
        );
    }

    #[test]
    fn test_render_template_missing_source() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out");
        let result = render_template(&dir.path().join("missing"), &dest, &subs());

        assert!(matches!(result, Err(ScaffoldError::Io { .. })));
        assert!(!dest.exists());
    }
}
