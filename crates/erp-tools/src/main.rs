//! ERP CLI - Scaffolding for Splunk External Result Provider apps

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use package_core::templates::check_app_version;
use package_core::{check_java, resolve_template_dir, scaffold, DependencyOutcome};
use package_core::{PackageSpec, ScaffoldOptions, ScaffoldReport};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "create-package")]
#[command(about = "Create the directory structure and config files of a Splunk ERP app")]
#[command(version)]
pub struct Args {
    /// App name (also the name of the generated directory)
    pub app_name: String,

    /// Provider family name written to indexes.conf
    pub family_name: String,

    /// Fully qualified provider implementation class
    pub class_name: String,

    /// App version written to app.conf
    #[arg(value_name = "VERSION")]
    pub app_version: String,

    /// Directory of prebuilt dependencies (jars) copied into bin
    pub dependency_dir: PathBuf,

    /// Directory the app is created in
    #[arg(short, long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Local directory to read templates from (overrides ERP_TEMPLATE_DIR)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Skip the Java runtime check
    #[arg(long = "skip-java-check")]
    pub skip_java_check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let spec = match PackageSpec::new(
        &args.app_name,
        &args.family_name,
        &args.class_name,
        &args.app_version,
        &args.dependency_dir,
    ) {
        Ok(spec) => spec,
        Err(e) => Args::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    if let Some(warning) = check_app_version(spec.version()) {
        eprintln!("{} {}", "Warning:".yellow(), warning);
    }

    let options = ScaffoldOptions {
        output_dir: args.output_dir,
        template_dir: resolve_template_dir(args.template_dir),
    };

    let report = scaffold(&spec, &options)
        .with_context(|| format!("Failed to create package '{}'", spec.app_name()))?;

    if !args.skip_java_check {
        let java = check_java();
        if let Some(version) = java.version.as_deref().filter(|_| java.available) {
            println!("{} {} ({})", "Found".green(), java.name, version);
        } else {
            eprintln!(
                "{} {} not found on PATH; bin/erp_script.sh needs it to start the provider",
                "Warning:".yellow(),
                java.name
            );
        }
    }

    print_summary(&report);

    Ok(())
}

fn print_summary(report: &ScaffoldReport) {
    println!();
    match &report.dependencies {
        DependencyOutcome::Copied(copied) => println!(
            "{} {} with {} dependency file(s)",
            "Created".green().bold(),
            report.app_root.display(),
            copied.files.len()
        ),
        DependencyOutcome::NotCopied(_) => println!(
            "{} {} {}",
            "Created".green().bold(),
            report.app_root.display(),
            "(dependencies not copied)".yellow()
        ),
    }

    println!();
    println!("{}", "Next steps:".cyan().bold());
    for (i, step) in next_steps(&report.app_root).iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}

fn next_steps(app_root: &Path) -> Vec<String> {
    vec![
        format!("Copy {} into $SPLUNK_HOME/etc/apps/", app_root.display()),
        "Restart Splunk to load the provider family".to_string(),
    ]
}
