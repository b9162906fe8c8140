//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```
//! use fhirgen::prelude::*;
//! ```

// Schema types
pub use fhirgen_schema::{MaxOccurs, Schema, SchemaClass, SchemaProperty};

// Codegen types
pub use fhirgen_codegen::{
    CodegenError, Declaration, Emitter, FieldDecl, GeneratedUnit, Generator, GeneratorConfig,
    ManualClassDef, ManualFieldDef, UnitWriter,
};
