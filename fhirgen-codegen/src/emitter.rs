//! Declaration emission: the schema-to-declaration mapping policy.
//!
//! One `Declaration` per class, one `FieldDecl` per property. Emission is a
//! pure transformation; the writer performs all IO.

use crate::config::{GeneratorConfig, ManualClassDef};
use crate::decl::{Declaration, FieldDecl};
use crate::error::CodegenError;
use fhirgen_schema::{Schema, SchemaClass, SchemaProperty, flatten_name};
use tracing::warn;

/// Emitter for class declarations.
pub struct Emitter<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
}

impl<'a> Emitter<'a> {
    /// Creates a new emitter over a schema and its policy tables.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Emits the declaration for one schema class.
    ///
    /// Properties are emitted in the sort order of their keys, so repeated
    /// runs over the same schema produce identical declarations.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a property's declared type is
    /// neither in the type-remap table nor a class of the schema.
    pub fn emit_class(&self, class: &SchemaClass) -> Result<Declaration, CodegenError> {
        let mut decl = Declaration::new(class.flat_name());
        decl.short_doc = class.short_doc.clone();
        decl.long_doc = class.long_doc.clone();

        for prop in class.properties.values() {
            decl.fields.push(self.emit_property(class, prop)?);
        }

        decl.superclass = match &class.superclass {
            Some(name) => {
                if !self.schema.has_class(name) {
                    warn!(class = %class.name, superclass = %name, "superclass not in schema");
                }
                Some(flatten_name(name))
            }
            None if class.name == self.config.root_class => {
                Some(self.config.base_class.clone())
            }
            None => None,
        };

        Ok(decl)
    }

    /// Emits the field for one property.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` for a declared type with no remap
    /// entry and no matching schema class.
    pub fn emit_property(
        &self,
        class: &SchemaClass,
        prop: &SchemaProperty,
    ) -> Result<FieldDecl, CodegenError> {
        let declared = prop.declared_type.as_str();
        let ty = match self.config.remap_type(declared) {
            Some(remapped) => remapped.to_string(),
            None if self.schema.has_class(declared) => flatten_name(declared),
            None => {
                return Err(CodegenError::unknown_type(
                    declared,
                    &class.name,
                    &prop.original_name,
                ));
            }
        };

        let name = self.config.emitted_name(&prop.original_name).to_string();
        let alias = (name != prop.original_name).then(|| prop.original_name.clone());

        let mut field = FieldDecl::new(name, ty);
        field.alias = alias;

        if prop.is_list() {
            // Lists initialize empty and are exempt from the nullability and
            // default-value rules. No doc on list fields.
            field.collection = true;
            field.initializer = Some("[]".to_string());
        } else if prop.is_optional() {
            field.nullable = true;
            field.doc = prop.short_doc.clone();
        } else {
            field.initializer = Some(
                self.config
                    .default_value(&field.ty)
                    .map_or_else(|| format!("{}()", field.ty), str::to_string),
            );
            field.doc = prop.short_doc.clone();
        }

        Ok(field)
    }

    /// Emits the declaration for one manual class.
    ///
    /// Manual classes never consult the schema and carry no cardinality
    /// logic; their types and initializers are used verbatim.
    #[must_use]
    pub fn emit_manual_class(&self, def: &ManualClassDef) -> Declaration {
        let mut decl = Declaration::new(def.name.clone());

        for field_def in &def.fields {
            let mut field = FieldDecl::new(field_def.name.clone(), field_def.ty.clone());
            if !field_def.initializer.is_empty() {
                field.initializer = Some(field_def.initializer.clone());
            }
            decl.fields.push(field);
        }

        decl
    }
}
