//! Validates render option fixtures against the frozen JSON schema.

use jsonschema::JSONSchema;
use ndview_app::RenderOptions;
use serde_json::{Value, json};

const SCHEMA_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../contracts/render-options.schema.json"
);
const FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../contracts/fixtures/render-options.valid.json"
);

fn load_json(path: &str) -> Value {
    let raw = std::fs::read_to_string(path).expect("json file should be readable");
    serde_json::from_str(&raw).expect("json file should be valid")
}

fn compile_validator() -> JSONSchema {
    let schema = load_json(SCHEMA_PATH);
    JSONSchema::compile(&schema).expect("schema should compile")
}

#[test]
fn render_options_fixture_matches_schema() {
    let validator = compile_validator();
    let fixture = load_json(FIXTURE_PATH);
    assert!(
        validator.is_valid(&fixture),
        "render options fixture should validate against schema"
    );
}

#[test]
fn render_options_fixture_deserializes() {
    let raw = std::fs::read_to_string(FIXTURE_PATH).expect("fixture should be readable");
    let options = RenderOptions::from_json_str(&raw).expect("fixture should be accepted");
    assert_eq!(options.title.as_deref(), Some("Nuclei, plane 2"));
}

#[test]
fn serialized_defaults_match_schema() {
    let validator = compile_validator();
    let defaults = serde_json::to_value(RenderOptions::default()).expect("defaults serialize");
    assert!(validator.is_valid(&defaults), "serialized defaults should validate");
}

#[test]
fn schema_rejects_invalid_options() {
    let validator = compile_validator();
    for invalid in [
        json!({ "grid_layout": [0] }),
        json!({ "scaling": "auto" }),
        json!({ "c_axis": -2 }),
        json!({ "uniform_min": 1.0 }),
        json!({ "per_channel_min": [0.0], "per_channel_max": [1.0], "uniform_min": 0.0, "uniform_max": 1.0 }),
        json!({ "grid": [2] }),
    ] {
        assert!(!validator.is_valid(&invalid), "{invalid} should be rejected");
        assert!(
            RenderOptions::from_json_str(&invalid.to_string()).is_err(),
            "{invalid} should be rejected by the loader too"
        );
    }
}
