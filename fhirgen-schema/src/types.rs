//! Schema type definitions.
//!
//! This module contains the data structures representing one revision of the
//! FHIR data model: classes, their properties, and the single-inheritance
//! links between them. The model is built once by an external parser and is
//! read-only during generation.

use std::collections::{BTreeMap, HashMap};

/// Complete schema for one specification revision.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Specification revision this schema was built from (e.g. "4.0.1").
    pub version: String,
    /// Class definitions, in insertion order.
    pub classes: Vec<SchemaClass>,
    /// Class lookup map (maintained by `add_class`).
    class_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema for the given revision.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            classes: Vec::new(),
            class_map: HashMap::new(),
        }
    }

    /// Adds a class definition to the schema.
    pub fn add_class(&mut self, class: SchemaClass) {
        let name = class.name.clone();
        let index = self.classes.len();
        self.classes.push(class);
        self.class_map.insert(name, index);
    }

    /// Looks up a class by name.
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&SchemaClass> {
        self.class_map.get(name).map(|&idx| &self.classes[idx])
    }

    /// Returns true if a class with the given name exists.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.class_map.contains_key(name)
    }

    /// Returns true if the named class is selected for output.
    ///
    /// Unknown names are not selected.
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.get_class(name).is_some_and(|c| c.selected)
    }

    /// Resolves the superclass of a class.
    ///
    /// A superclass name that matches no class in the schema resolves to
    /// `None`, the same as no superclass at all.
    #[must_use]
    pub fn superclass_of(&self, class: &SchemaClass) -> Option<&SchemaClass> {
        class
            .superclass
            .as_deref()
            .and_then(|name| self.get_class(name))
    }
}

/// One class definition within the schema.
#[derive(Debug, Clone)]
pub struct SchemaClass {
    /// Class name, unique within a revision. Component classes carry dotted
    /// names ("Patient.Contact"); the segment before the first dot is the
    /// output-unit key.
    pub name: String,
    /// One-line summary documentation.
    pub short_doc: Option<String>,
    /// Full definition text.
    pub long_doc: Option<String>,
    /// Superclass reference by name, if any.
    pub superclass: Option<String>,
    /// Properties keyed by property name; iteration follows key sort order.
    pub properties: BTreeMap<String, SchemaProperty>,
    /// Whether this class is selected for output.
    pub selected: bool,
}

impl SchemaClass {
    /// Creates a new class with no properties, selected for output.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_doc: None,
            long_doc: None,
            superclass: None,
            properties: BTreeMap::new(),
            selected: true,
        }
    }

    /// Adds a property under the given key.
    pub fn add_property(&mut self, key: impl Into<String>, property: SchemaProperty) {
        self.properties.insert(key.into(), property);
    }

    /// Returns the output-unit (profile) key: the segment of the class name
    /// before the first dot.
    #[must_use]
    pub fn unit_name(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }

    /// Returns the emitted declaration name: the class name with dots
    /// removed and each following letter upper-cased ("Patient.contact"
    /// becomes "PatientContact"). Names without dots emit unchanged.
    #[must_use]
    pub fn flat_name(&self) -> String {
        flatten_name(&self.name)
    }
}

/// One property definition within a class.
#[derive(Debug, Clone)]
pub struct SchemaProperty {
    /// Name as written in the source specification. Default emitted name
    /// and wire name for serialization aliases.
    pub original_name: String,
    /// Declared type name: a scalar schema type or another class.
    pub declared_type: String,
    /// Minimum occurrences; 0 (optional) or 1 (required).
    pub min_occurs: u32,
    /// Maximum occurrences.
    pub max_occurs: MaxOccurs,
    /// One-line summary documentation.
    pub short_doc: Option<String>,
}

impl SchemaProperty {
    /// Creates a new property definition.
    #[must_use]
    pub fn new(
        original_name: impl Into<String>,
        declared_type: impl Into<String>,
        min_occurs: u32,
        max_occurs: MaxOccurs,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            declared_type: declared_type.into(),
            min_occurs,
            max_occurs,
            short_doc: None,
        }
    }

    /// Returns true if the property is a repeating collection.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.max_occurs, MaxOccurs::Unbounded)
    }

    /// Returns true if the property may be absent.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }
}

/// Upper cardinality bound of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaxOccurs {
    /// At most one occurrence.
    #[default]
    One,
    /// Unbounded repetition ("*" in the specification).
    Unbounded,
}

impl MaxOccurs {
    /// Parses a cardinality upper bound from its specification spelling.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::One),
            "*" => Some(Self::Unbounded),
            _ => None,
        }
    }
}

/// Flattens a dotted class name into a single identifier, upper-casing the
/// letter after each dot.
#[must_use]
pub fn flatten_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for c in name.chars() {
        if c == '.' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_name() {
        assert_eq!(flatten_name("Patient"), "Patient");
        assert_eq!(flatten_name("Patient.Contact"), "PatientContact");
        assert_eq!(flatten_name("Patient.contact"), "PatientContact");
        assert_eq!(flatten_name("Bundle.entry.search"), "BundleEntrySearch");
    }

    #[test]
    fn test_unit_name() {
        assert_eq!(SchemaClass::new("Patient").unit_name(), "Patient");
        assert_eq!(SchemaClass::new("Patient.Contact").unit_name(), "Patient");
        assert_eq!(
            SchemaClass::new("Bundle.entry.search").unit_name(),
            "Bundle"
        );
    }

    #[test]
    fn test_max_occurs_parse() {
        assert_eq!(MaxOccurs::parse("1"), Some(MaxOccurs::One));
        assert_eq!(MaxOccurs::parse("*"), Some(MaxOccurs::Unbounded));
        assert_eq!(MaxOccurs::parse("2"), None);
    }

    #[test]
    fn test_property_cardinality() {
        let required = SchemaProperty::new("id", "string", 1, MaxOccurs::One);
        assert!(!required.is_list());
        assert!(!required.is_optional());

        let repeated = SchemaProperty::new("name", "HumanName", 0, MaxOccurs::Unbounded);
        assert!(repeated.is_list());
        assert!(repeated.is_optional());
    }

    #[test]
    fn test_schema_lookup() {
        let mut schema = Schema::new("4.0.1");
        schema.add_class(SchemaClass::new("Patient"));

        assert!(schema.has_class("Patient"));
        assert!(!schema.has_class("Observation"));
        assert!(schema.get_class("Patient").is_some());
    }

    #[test]
    fn test_missing_superclass_resolves_to_none() {
        let mut schema = Schema::new("4.0.1");
        let mut patient = SchemaClass::new("Patient");
        patient.superclass = Some("DomainResource".to_string());
        schema.add_class(patient);

        let patient = schema.get_class("Patient").unwrap();
        assert!(schema.superclass_of(patient).is_none());

        schema.add_class(SchemaClass::new("DomainResource"));
        let patient = schema.get_class("Patient").unwrap();
        assert_eq!(
            schema.superclass_of(patient).map(|c| c.name.as_str()),
            Some("DomainResource")
        );
    }

    #[test]
    fn test_selection_predicate() {
        let mut schema = Schema::new("4.0.1");
        let mut scaffold = SchemaClass::new("Element");
        scaffold.selected = false;
        schema.add_class(scaffold);
        schema.add_class(SchemaClass::new("Patient"));

        assert!(schema.is_selected("Patient"));
        assert!(!schema.is_selected("Element"));
        assert!(!schema.is_selected("Observation"));
    }

    #[test]
    fn test_property_iteration_is_sorted() {
        let mut class = SchemaClass::new("Patient");
        class.add_property("name", SchemaProperty::new("name", "HumanName", 0, MaxOccurs::Unbounded));
        class.add_property("active", SchemaProperty::new("active", "boolean", 0, MaxOccurs::One));
        class.add_property("id", SchemaProperty::new("id", "string", 1, MaxOccurs::One));

        let keys: Vec<&str> = class.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["active", "id", "name"]);
    }
}
