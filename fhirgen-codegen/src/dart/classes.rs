//! Class declaration rendering.

use crate::dart::fields::render_field;
use crate::decl::{Declaration, GeneratedUnit};

/// Renders one class declaration to Dart source text.
#[must_use]
pub fn render_declaration(decl: &Declaration) -> String {
    let mut output = String::new();

    if let Some(short_doc) = &decl.short_doc {
        for line in short_doc.lines() {
            output.push_str(&format!("/// {}\n", line));
        }
    }
    if let Some(long_doc) = &decl.long_doc {
        if decl.short_doc.is_some() {
            output.push_str("///\n");
        }
        for line in long_doc.lines() {
            output.push_str(&format!("/// {}\n", line));
        }
    }

    match &decl.superclass {
        Some(superclass) => {
            output.push_str(&format!("class {} extends {} {{\n", decl.name, superclass));
        }
        None => output.push_str(&format!("class {} {{\n", decl.name)),
    }

    for (i, field) in decl.fields.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&render_field(field));
    }

    output.push_str("}\n");
    output
}

/// Renders all declarations of a unit, separated by blank lines.
#[must_use]
pub fn render_unit(unit: &GeneratedUnit) -> String {
    let mut output = String::new();

    for (i, decl) in unit.declarations.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&render_declaration(decl));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::FieldDecl;

    #[test]
    fn test_render_class_with_superclass() {
        let mut decl = Declaration::new("Patient");
        decl.superclass = Some("DomainResource".to_string());
        let mut id = FieldDecl::new("id", "FhirString");
        id.initializer = Some("FhirString()".to_string());
        decl.fields.push(id);

        assert_eq!(
            render_declaration(&decl),
            "class Patient extends DomainResource {\n  FhirString id = FhirString();\n}\n"
        );
    }

    #[test]
    fn test_render_class_without_superclass() {
        let decl = Declaration::new("Element");
        assert_eq!(render_declaration(&decl), "class Element {\n}\n");
    }

    #[test]
    fn test_render_class_docs() {
        let mut decl = Declaration::new("Patient");
        decl.short_doc = Some("Information about a person receiving care".to_string());
        decl.long_doc = Some("Demographics and other administrative information.".to_string());

        let rendered = render_declaration(&decl);
        assert!(rendered.starts_with(
            "/// Information about a person receiving care\n///\n/// Demographics"
        ));
    }

    #[test]
    fn test_render_unit_separates_declarations() {
        let unit = GeneratedUnit {
            name: "Patient".to_string(),
            declarations: vec![Declaration::new("Patient"), Declaration::new("PatientContact")],
            manual: false,
        };

        let rendered = render_unit(&unit);
        assert_eq!(
            rendered,
            "class Patient {\n}\n\nclass PatientContact {\n}\n"
        );
    }
}
