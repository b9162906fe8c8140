//! # fhirgen
//!
//! FHIR data-model code generator for Dart.
//!
//! fhirgen turns one revision of the FHIR class schema into Dart class
//! declarations, keeping hundreds of generated data-model types mechanically
//! consistent with the specification.
//!
//! ## Quick Start
//!
//! ```
//! use fhirgen::prelude::*;
//!
//! let mut schema = Schema::new("4.0.1");
//! let mut patient = SchemaClass::new("Patient");
//! patient.add_property("id", SchemaProperty::new("id", "string", 1, MaxOccurs::One));
//! schema.add_class(patient);
//!
//! let mut config = GeneratorConfig::new("fhir_dart", "out");
//! config.type_remap.insert("string".into(), "FhirString".into());
//!
//! let units = fhirgen::codegen::generate(&schema, &config).unwrap();
//! assert_eq!(units[0].declarations[0].name, "Patient");
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - In-memory schema model
//! - [`codegen`] - Declaration emitter, Dart rendering, unit writer

pub mod prelude;

/// In-memory schema model.
pub mod schema {
    pub use fhirgen_schema::*;
}

/// Declaration emission and Dart rendering.
pub mod codegen {
    pub use fhirgen_codegen::*;
}
