//! End-to-end generation tests.

use chrono::TimeZone;
use fhirgen::prelude::*;

fn demo_schema() -> Schema {
    let mut schema = Schema::new("4.0.1");

    schema.add_class(SchemaClass::new("DomainResource"));
    schema.add_class(SchemaClass::new("HumanName"));

    let mut patient = SchemaClass::new("Patient");
    patient.superclass = Some("DomainResource".to_string());
    patient.short_doc = Some("Information about a person receiving care".to_string());
    patient.add_property("id", SchemaProperty::new("id", "string", 1, MaxOccurs::One));
    patient.add_property(
        "name",
        SchemaProperty::new("name", "HumanName", 0, MaxOccurs::Unbounded),
    );
    schema.add_class(patient);

    schema
}

fn demo_config(out_dir: &std::path::Path) -> GeneratorConfig {
    let mut config = GeneratorConfig::new("fhir_dart", out_dir);
    config
        .type_remap
        .insert("string".to_string(), "FhirString".to_string());
    config.generated_at = Some(chrono::Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap());
    config
}

#[test]
fn patient_unit_renders_expected_dart() {
    let schema = demo_schema();
    let config = demo_config(std::path::Path::new("unused"));

    let units = fhirgen::codegen::generate(&schema, &config).unwrap();
    let patient = units.iter().find(|u| u.name == "Patient").unwrap();
    let rendered = fhirgen::codegen::dart::render_unit(patient);

    assert!(rendered.contains("class Patient extends DomainResource {"));
    assert!(rendered.contains("  FhirString id = FhirString();"));
    assert!(rendered.contains("  List<HumanName> name = [];"));
}

#[test]
fn generate_to_dir_writes_one_file_per_unit() {
    let dir = tempfile::tempdir().unwrap();
    let schema = demo_schema();
    let config = demo_config(dir.path());

    fhirgen::codegen::generate_to_dir(&schema, &config).unwrap();

    for file in ["domain_resource.dart", "human_name.dart", "patient.dart"] {
        assert!(dir.path().join(file).exists(), "missing {file}");
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let schema = demo_schema();
    let config = demo_config(dir.path());

    fhirgen::codegen::generate_to_dir(&schema, &config).unwrap();
    let first = std::fs::read_to_string(dir.path().join("patient.dart")).unwrap();
    fhirgen::codegen::generate_to_dir(&schema, &config).unwrap();
    let second = std::fs::read_to_string(dir.path().join("patient.dart")).unwrap();

    assert_eq!(first, second);
}
