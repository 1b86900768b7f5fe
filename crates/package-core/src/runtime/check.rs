//! Java runtime detection for the generated launcher script

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if a Java runtime is available
///
/// `java -version` writes to stderr on most JDKs, so both streams are inspected.
pub fn check_java() -> RuntimeInfo {
    check_java_with("java")
}

fn check_java_with(program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("-version").output();

    match output {
        Ok(out) if out.status.success() => {
            let text = if out.stderr.is_empty() {
                String::from_utf8_lossy(&out.stdout).to_string()
            } else {
                String::from_utf8_lossy(&out.stderr).to_string()
            };
            RuntimeInfo {
                name: "Java",
                version: text.lines().next().map(|l| l.trim().to_string()),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "Java",
            version: None,
            available: false,
        },
    }
}
