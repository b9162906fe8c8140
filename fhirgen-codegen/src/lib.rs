//! # fhirgen Codegen
//!
//! Dart data-model class generation from FHIR schemas.
//!
//! This crate provides:
//! - The declaration emitter and its property-mapping policy
//! - Typed declaration objects consumed by the Dart renderer
//! - Output-unit assembly and file writing
//!
//! The schema arrives fully constructed from `fhirgen-schema`; the policy
//! tables arrive as a read-only [`GeneratorConfig`].

pub mod config;
pub mod dart;
pub mod decl;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod writer;

pub use config::{GeneratorConfig, ManualClassDef, ManualFieldDef};
pub use decl::{Declaration, FieldDecl, GeneratedUnit};
pub use emitter::Emitter;
pub use error::CodegenError;
pub use generator::Generator;
pub use writer::UnitWriter;

use fhirgen_schema::Schema;

/// Generates all output units for a schema.
///
/// # Arguments
/// * `schema` - Fully constructed schema model
/// * `config` - Policy tables and output scalars
///
/// # Returns
/// The generated units, schema units first in unit-name order.
///
/// # Errors
/// Returns `CodegenError` if any class fails to emit.
pub fn generate(
    schema: &Schema,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedUnit>, CodegenError> {
    Generator::new(schema, config).generate()
}

/// Generates all output units and writes them to the configured directory.
///
/// # Errors
/// Returns `CodegenError` if emission or writing fails.
pub fn generate_to_dir(schema: &Schema, config: &GeneratorConfig) -> Result<(), CodegenError> {
    let units = generate(schema, config)?;
    UnitWriter::new(config).write_all(&units)
}
