//! Version string checks for the generated app.conf

use semver::Version;

/// Parse version string, accepting an optional leading 'v'
pub fn parse_version(version_str: &str) -> Option<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).ok()
}

/// Returns a warning message if the app version is not a semantic version
///
/// Splunk accepts free-form versions, so this never blocks scaffolding.
pub fn check_app_version(version_str: &str) -> Option<String> {
    match parse_version(version_str) {
        Some(_) => None,
        None => Some(format!(
            "Version '{}' is not a semantic version (expected MAJOR.MINOR.PATCH).\n\
             It will be written to app.conf as given.",
            version_str
        )),
    }
}
