//! Generator configuration: policy tables and output scalars.
//!
//! All tables are built by the process configuration layer and injected
//! read-only into the emitter. Nothing in this crate mutates them after
//! construction.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Read-only configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Emitted package identifier (target of the `part of` directive).
    pub package: String,
    /// Output directory for generated units.
    pub out_dir: PathBuf,
    /// Designated root resource name; extends `base_class` when it has no
    /// superclass of its own.
    pub root_class: String,
    /// Abstract base type the root resource extends.
    pub base_class: String,
    /// Type remap: lower-cased declared type name to emitted Dart type.
    pub type_remap: HashMap<String, String>,
    /// Reserved-word remap: original property name to safe emitted name.
    pub reserved_words: HashMap<String, String>,
    /// Default-value expressions keyed by emitted type name.
    pub default_values: HashMap<String, String>,
    /// Profiles with hand-written equivalents, skipped entirely.
    pub native_types: HashSet<String>,
    /// Hand-specified classes emitted outside the schema path.
    pub manual_classes: Vec<ManualClassDef>,
    /// Timestamp stamped into unit headers; `None` means generation time.
    pub generated_at: Option<DateTime<Utc>>,
}

impl GeneratorConfig {
    /// Creates a configuration with empty policy tables and the standard
    /// root/base pair.
    #[must_use]
    pub fn new(package: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            out_dir: out_dir.into(),
            root_class: "Resource".to_string(),
            base_class: "FhirResource".to_string(),
            type_remap: HashMap::new(),
            reserved_words: HashMap::new(),
            default_values: HashMap::new(),
            native_types: HashSet::new(),
            manual_classes: Vec::new(),
            generated_at: None,
        }
    }

    /// Looks up the emitted type for a declared type name.
    ///
    /// The lookup key is the lower-cased declared name.
    #[must_use]
    pub fn remap_type(&self, declared_type: &str) -> Option<&str> {
        self.type_remap
            .get(&declared_type.to_lowercase())
            .map(String::as_str)
    }

    /// Returns the emitted name for a property, applying the reserved-word
    /// remap when one exists.
    #[must_use]
    pub fn emitted_name<'a>(&'a self, original_name: &'a str) -> &'a str {
        self.reserved_words
            .get(original_name)
            .map_or(original_name, String::as_str)
    }

    /// Looks up the configured default-value expression for an emitted type.
    #[must_use]
    pub fn default_value(&self, emitted_type: &str) -> Option<&str> {
        self.default_values.get(emitted_type).map(String::as_str)
    }

    /// Returns true if the named profile has a hand-written equivalent and
    /// must not be emitted.
    #[must_use]
    pub fn is_native(&self, name: &str) -> bool {
        self.native_types.contains(name)
    }
}

/// Hand-specified class definition.
#[derive(Debug, Clone)]
pub struct ManualClassDef {
    /// Emitted class name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<ManualFieldDef>,
}

impl ManualClassDef {
    /// Creates a manual class with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field; an empty initializer means no initializer is emitted.
    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
        initializer: impl Into<String>,
    ) {
        self.fields.push(ManualFieldDef {
            name: name.into(),
            ty: ty.into(),
            initializer: initializer.into(),
        });
    }
}

/// One field of a manual class.
#[derive(Debug, Clone)]
pub struct ManualFieldDef {
    /// Emitted field name.
    pub name: String,
    /// Emitted type, used verbatim.
    pub ty: String,
    /// Initializer expression; empty text means none.
    pub initializer: String,
}
