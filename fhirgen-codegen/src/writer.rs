//! Output-unit writer.
//!
//! Puts rendered units on disk: schema units directly under the output
//! directory, manual units under a fixed subdirectory.

use crate::config::GeneratorConfig;
use crate::dart::{render_unit, unit_header};
use crate::decl::GeneratedUnit;
use crate::error::CodegenError;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Subdirectory receiving manual-class units.
pub const MANUAL_SUBDIR: &str = "base";

/// Writer for generated units.
pub struct UnitWriter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> UnitWriter<'a> {
    /// Creates a writer for the configured output directory.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Writes all units, creating directories as needed.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` on any file-system failure.
    pub fn write_all(&self, units: &[GeneratedUnit]) -> Result<(), CodegenError> {
        let generated_at = self.config.generated_at.unwrap_or_else(Utc::now);
        let header = unit_header(&self.config.package, generated_at);

        for unit in units {
            let path = self.unit_path(unit);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut contents = header.clone();
            contents.push_str(&render_unit(unit));
            fs::write(&path, contents)?;
            info!(unit = %unit.name, path = %path.display(), "wrote unit");
        }

        Ok(())
    }

    /// Returns the destination path for a unit.
    #[must_use]
    pub fn unit_path(&self, unit: &GeneratedUnit) -> PathBuf {
        let file = format!("{}.dart", to_snake_case(&unit.name));
        if unit.manual {
            self.config.out_dir.join(MANUAL_SUBDIR).join(file)
        } else {
            self.config.out_dir.join(file)
        }
    }
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}
