//! Generation driver: walks the schema and assembles output units.

use crate::config::GeneratorConfig;
use crate::decl::{Declaration, GeneratedUnit};
use crate::emitter::Emitter;
use crate::error::CodegenError;
use fhirgen_schema::Schema;
use std::collections::BTreeMap;
use tracing::debug;

/// Driver producing one output unit per selected profile, plus one unit per
/// manual-class entry.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
    emitter: Emitter<'a>,
}

impl<'a> Generator<'a> {
    /// Creates a generator over a schema and its configuration.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig) -> Self {
        Self {
            schema,
            config,
            emitter: Emitter::new(schema, config),
        }
    }

    /// Generates all output units.
    ///
    /// Schema units come first, ordered by unit name; manual units follow in
    /// table order.
    ///
    /// # Errors
    /// Returns `CodegenError` if any class fails to emit.
    pub fn generate(&self) -> Result<Vec<GeneratedUnit>, CodegenError> {
        let mut by_unit: BTreeMap<String, Vec<Declaration>> = BTreeMap::new();

        for class in &self.schema.classes {
            if !class.selected {
                debug!(class = %class.name, "skipping unselected class");
                continue;
            }
            // Profile-level skip: a native unit keeps all its classes out.
            if self.config.is_native(class.unit_name()) {
                debug!(class = %class.name, "skipping native profile");
                continue;
            }

            debug!(class = %class.name, "emitting class");
            by_unit
                .entry(class.unit_name().to_string())
                .or_default()
                .push(self.emitter.emit_class(class)?);
        }

        let mut units: Vec<GeneratedUnit> = by_unit
            .into_iter()
            .map(|(name, declarations)| GeneratedUnit {
                name,
                declarations,
                manual: false,
            })
            .collect();

        for def in &self.config.manual_classes {
            debug!(class = %def.name, "emitting manual class");
            units.push(GeneratedUnit {
                name: def.name.clone(),
                declarations: vec![self.emitter.emit_manual_class(def)],
                manual: true,
            });
        }

        Ok(units)
    }
}
