//! tfm-values - Supported target framework values from project evaluation
//!
//! Reads evaluation snapshots from disk and prints the values a project's
//! `TargetFramework` property may take, in display order.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

/// Main entry point for the tfm-values CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
