//! Field rendering.

use crate::decl::FieldDecl;

/// Renders one field declaration, indented for a class body.
#[must_use]
pub fn render_field(field: &FieldDecl) -> String {
    let mut output = String::new();

    if let Some(doc) = &field.doc {
        for line in doc.lines() {
            output.push_str(&format!("  /// {}\n", line));
        }
    }

    if let Some(alias) = &field.alias {
        output.push_str(&format!("  @JsonKey(name: '{}')\n", alias));
    }

    let ty = dart_type(field);
    match &field.initializer {
        Some(init) => output.push_str(&format!("  {} {} = {};\n", ty, field.name, init)),
        None => output.push_str(&format!("  {} {};\n", ty, field.name)),
    }

    output
}

/// Returns the full Dart type spelling for a field.
#[must_use]
pub fn dart_type(field: &FieldDecl) -> String {
    if field.collection {
        format!("List<{}>", field.ty)
    } else if field.nullable {
        format!("{}?", field.ty)
    } else {
        field.ty.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_required_scalar() {
        let mut field = FieldDecl::new("id", "FhirString");
        field.initializer = Some("FhirString()".to_string());

        assert_eq!(render_field(&field), "  FhirString id = FhirString();\n");
    }

    #[test]
    fn test_render_nullable_scalar() {
        let mut field = FieldDecl::new("active", "FhirBool");
        field.nullable = true;

        assert_eq!(render_field(&field), "  FhirBool? active;\n");
    }

    #[test]
    fn test_render_list() {
        let mut field = FieldDecl::new("name", "HumanName");
        field.collection = true;
        field.initializer = Some("[]".to_string());

        assert_eq!(render_field(&field), "  List<HumanName> name = [];\n");
    }

    #[test]
    fn test_render_alias_annotation() {
        let mut field = FieldDecl::new("class_", "Coding");
        field.nullable = true;
        field.alias = Some("class".to_string());

        assert_eq!(
            render_field(&field),
            "  @JsonKey(name: 'class')\n  Coding? class_;\n"
        );
    }

    #[test]
    fn test_render_doc_lines() {
        let mut field = FieldDecl::new("gender", "FhirCode");
        field.nullable = true;
        field.doc = Some("male | female | other | unknown".to_string());

        assert_eq!(
            render_field(&field),
            "  /// male | female | other | unknown\n  FhirCode? gender;\n"
        );
    }
}
