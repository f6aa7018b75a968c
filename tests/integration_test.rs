//! Integration tests for the full configure -> define -> build path

use indexmap::IndexMap;
use preen::{
    configure, load_model, transform, AttributeDef, ColumnType, FieldValue, ModelAttributes,
    Record, Schema, Transform,
};
use std::io::Write;
use std::sync::Arc;

const TEST_STRING: &str = "  Test String  ";

/// Attribute map covering every combination the assignment path supports.
fn model_attributes() -> ModelAttributes {
    let mut attributes: ModelAttributes = IndexMap::new();
    attributes.insert(
        "no_transformations".to_string(),
        AttributeDef::new(ColumnType::Text),
    );
    attributes.insert(
        "trim".to_string(),
        AttributeDef::new(ColumnType::Text).with_flag("trim"),
    );
    attributes.insert(
        "lowercase".to_string(),
        AttributeDef::new(ColumnType::Text).with_flag("lowercase"),
    );
    attributes.insert(
        "uppercase".to_string(),
        AttributeDef::new(ColumnType::Text).with_flag("uppercase"),
    );
    attributes.insert(
        "combined".to_string(),
        AttributeDef::new(ColumnType::Text)
            .with_flag("trim")
            .with_flag("lowercase"),
    );
    attributes.insert(
        "custom_setter".to_string(),
        AttributeDef::new(ColumnType::Text)
            .with_flag("trim")
            .with_flag("lowercase")
            .with_setter(|value: FieldValue, record: &mut Record| {
                let suffixed = match value {
                    FieldValue::String(s) => FieldValue::String(format!("{}##", s)),
                    other => other,
                };
                record.set_field("custom_setter", suffixed);
            }),
    );
    attributes.insert(
        "custom_transformation".to_string(),
        AttributeDef::new(ColumnType::Text).with_option("append", "(postfix)"),
    );
    attributes
}

fn instance_values() -> IndexMap<String, FieldValue> {
    model_attributes()
        .keys()
        .map(|name| (name.clone(), FieldValue::from(TEST_STRING)))
        .collect()
}

fn append_transform() -> Arc<dyn Transform> {
    transform(|value: FieldValue, attribute: &AttributeDef| {
        match (value, attribute.option("append")) {
            (FieldValue::String(s), Some(FieldValue::String(suffix))) => {
                FieldValue::String(format!("{}{}", s, suffix))
            }
            (value, _) => value,
        }
    })
}

#[test]
fn test_default_transformations_pass_null_through() {
    let mut schema = Schema::new();
    configure(&mut schema, Vec::new());
    let model = schema.define("Model", model_attributes());

    let mut values = IndexMap::new();
    values.insert("trim".to_string(), FieldValue::Null);
    values.insert("lowercase".to_string(), FieldValue::Null);
    values.insert("uppercase".to_string(), FieldValue::Null);
    let record = model.build(values);

    assert_eq!(record.get("trim"), Some(&FieldValue::Null));
    assert_eq!(record.get("lowercase"), Some(&FieldValue::Null));
    assert_eq!(record.get("uppercase"), Some(&FieldValue::Null));
}

#[test]
fn test_default_transformations_on_configured_attributes() {
    let mut schema = Schema::new();
    configure(&mut schema, Vec::new());
    let model = schema.define("Model", model_attributes());

    let record = model.build(instance_values());

    assert_eq!(
        record.get("no_transformations"),
        Some(&FieldValue::from("  Test String  "))
    );
    assert_eq!(record.get("trim"), Some(&FieldValue::from("Test String")));
    assert_eq!(
        record.get("lowercase"),
        Some(&FieldValue::from("  test string  "))
    );
    assert_eq!(
        record.get("uppercase"),
        Some(&FieldValue::from("  TEST STRING  "))
    );
    assert_eq!(record.get("combined"), Some(&FieldValue::from("test string")));
    assert_eq!(
        record.get("custom_setter"),
        Some(&FieldValue::from("test string##"))
    );
    // no `append` transform registered, so the option is inert
    assert_eq!(
        record.get("custom_transformation"),
        Some(&FieldValue::from("  Test String  "))
    );
}

#[test]
fn test_custom_transformations() {
    let mut schema = Schema::new();
    configure(
        &mut schema,
        vec![
            (
                "trim".to_string(),
                transform(|value: FieldValue, _: &AttributeDef| match value {
                    FieldValue::String(s) => FieldValue::String(s.replace(' ', "*")),
                    other => other,
                }),
            ),
            ("append".to_string(), append_transform()),
        ],
    );
    let model = schema.define("Model", model_attributes());

    let record = model.build(instance_values());

    assert_eq!(
        record.get("no_transformations"),
        Some(&FieldValue::from("  Test String  "))
    );
    // custom trim replaced the built-in, in place
    assert_eq!(record.get("trim"), Some(&FieldValue::from("**Test*String**")));
    // unrelated built-ins are unaffected by the override
    assert_eq!(
        record.get("lowercase"),
        Some(&FieldValue::from("  test string  "))
    );
    assert_eq!(
        record.get("uppercase"),
        Some(&FieldValue::from("  TEST STRING  "))
    );
    assert_eq!(
        record.get("combined"),
        Some(&FieldValue::from("**test*string**"))
    );
    assert_eq!(
        record.get("custom_setter"),
        Some(&FieldValue::from("**test*string**##"))
    );
    assert_eq!(
        record.get("custom_transformation"),
        Some(&FieldValue::from("  Test String  (postfix)"))
    );
}

#[test]
fn test_rewrite_only_touches_assignment_functions() {
    let mut schema = Schema::new();
    configure(&mut schema, Vec::new());

    let attributes = model_attributes();
    let options_before: Vec<_> = attributes
        .iter()
        .map(|(name, attribute)| (name.clone(), attribute.options.clone()))
        .collect();

    let model = schema.define("Model", attributes);

    for (name, options) in options_before {
        assert_eq!(model.attributes[&name].options, options);
        assert_eq!(model.attributes[&name].column_type, ColumnType::Text);
    }
    assert!(model.attributes["no_transformations"].set.is_none());
    assert!(model.attributes["trim"].set.is_some());
}

#[test]
fn test_yaml_declared_model_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("user.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        br#"
model:
  name: User
  attributes:
    email:
      type: text
      trim: true
      lowercase: true
    note:
      type: text
      append: "(postfix)"
"#,
    )
    .unwrap();

    let definition = load_model(&path).unwrap();

    let mut schema = Schema::new();
    configure(&mut schema, vec![("append".to_string(), append_transform())]);
    let model = schema.define(definition.name, definition.attributes);

    let mut values = IndexMap::new();
    values.insert(
        "email".to_string(),
        FieldValue::from("  Alice@Example.COM  "),
    );
    values.insert("note".to_string(), FieldValue::from(TEST_STRING));
    let record = model.build(values);

    assert_eq!(
        record.get("email"),
        Some(&FieldValue::from("alice@example.com"))
    );
    assert_eq!(
        record.get("note"),
        Some(&FieldValue::from("  Test String  (postfix)"))
    );
}
