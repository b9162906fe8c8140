//! Per-unit file header rendering.

use chrono::{DateTime, Utc};

/// Renders the attribution header and `part of` directive for one unit.
#[must_use]
pub fn unit_header(package: &str, generated_at: DateTime<Utc>) -> String {
    format!(
        "// GENERATED CODE - do not edit by hand.\n// Generated by fhirgen on {}.\n\npart of {};\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        package
    )
}
