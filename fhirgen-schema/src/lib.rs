//! # fhirgen Schema
//!
//! In-memory FHIR data-model schema for code generation.
//!
//! This crate provides:
//! - Type definitions for schema classes and properties
//! - Cardinality (min/max occurrence) modeling
//! - Superclass and output-selection lookups
//!
//! The schema is produced by an external specification parser and consumed
//! read-only by `fhirgen-codegen`.

pub mod types;

pub use types::{MaxOccurs, Schema, SchemaClass, SchemaProperty, flatten_name};
