//! Runtime detection
//!
//! The generated `bin/erp_script.sh` launches the provider class with `java`.

pub mod check;

pub use check::{check_java, RuntimeInfo};
