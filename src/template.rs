//! Template placeholder substitution
//!
//! A template is a partially filled JSON Schema document. Its `$id` and
//! `title` carry a placeholder token that is replaced with the event name,
//! and inferred properties are merged under its `properties` key.
//! Every function here returns a new value and leaves its input untouched.

use crate::error::{Error, Result};
use crate::schema::Properties;
use serde_json::{Map, Value};

/// Placeholder token replaced with the event name
pub const PLACEHOLDER: &str = "###Replace_Me";

/// Sample field holding the event name
pub const DEFAULT_EVENT_FIELD: &str = "eventName";

const SAMPLE: &str = "sample";
const TEMPLATE: &str = "template";

/// Extract the event name from a sample
pub fn event_name(sample: &Value, field: &str) -> Result<String> {
    let map = as_object(sample, SAMPLE)?;
    match map.get(field) {
        Some(Value::String(name)) if name.is_empty() => {
            Err(Error::invalid_field(SAMPLE, field, "event name is empty"))
        }
        Some(Value::String(name)) if name.contains(['/', '\\']) => Err(Error::invalid_field(
            SAMPLE,
            field,
            format!("event name '{name}' contains a path separator"),
        )),
        Some(Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(Error::invalid_field(
            SAMPLE,
            field,
            format!("expected a string, found {}", type_name(other)),
        )),
        None => Err(Error::missing_field(SAMPLE, field)),
    }
}

/// Check if a string contains the placeholder token
pub fn has_placeholder(s: &str, placeholder: &str) -> bool {
    s.contains(placeholder)
}

/// Replace the placeholder in `$id` and `title`
///
/// `$id` receives `<event_name>.json`, `title` receives the bare event name.
pub fn fill_placeholders(template: &Value, event_name: &str, placeholder: &str) -> Result<Value> {
    let mut map = as_object(template, TEMPLATE)?.clone();

    replace_in_field(&mut map, "$id", placeholder, &format!("{event_name}.json"))?;
    replace_in_field(&mut map, "title", placeholder, event_name)?;

    Ok(Value::Object(map))
}

/// Merge inferred properties into the template's `properties` object
///
/// Inferred entries replace same-named template entries; every other key
/// of the template passes through unchanged.
pub fn merge_schema(template: &Value, properties: &Properties) -> Result<Value> {
    let mut map = as_object(template, TEMPLATE)?.clone();

    let target = map
        .entry("properties")
        .or_insert_with(|| Value::Object(Map::new()));
    let target = match target {
        Value::Object(target) => target,
        other => {
            return Err(Error::invalid_field(
                TEMPLATE,
                "properties",
                format!("expected an object, found {}", type_name(other)),
            ))
        }
    };

    for (key, node) in properties.iter() {
        target.insert(key.to_string(), node.to_json());
    }

    Ok(Value::Object(map))
}

fn replace_in_field(
    map: &mut Map<String, Value>,
    field: &str,
    placeholder: &str,
    replacement: &str,
) -> Result<()> {
    let value = map
        .get_mut(field)
        .ok_or_else(|| Error::missing_field(TEMPLATE, field))?;

    let current = match value {
        Value::String(current) => current,
        other => {
            return Err(Error::invalid_field(
                TEMPLATE,
                field,
                format!("expected a string, found {}", type_name(other)),
            ))
        }
    };

    if !has_placeholder(current, placeholder) {
        tracing::warn!(field, placeholder, "Template field has no placeholder, leaving it as-is");
        return Ok(());
    }

    *current = current.replace(placeholder, replacement);
    Ok(())
}

fn as_object<'a>(value: &'a Value, document: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        Error::invalid_document(
            document,
            format!("expected a JSON object at the root, found {}", type_name(value)),
        )
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Descriptor, SchemaNode, SchemaType};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_event_name() {
        let sample = json!({"eventName": "Login", "userId": 5});
        assert_eq!(event_name(&sample, DEFAULT_EVENT_FIELD).unwrap(), "Login");
    }

    #[test]
    fn test_event_name_custom_field() {
        let sample = json!({"type": "Checkout"});
        assert_eq!(event_name(&sample, "type").unwrap(), "Checkout");
    }

    #[test]
    fn test_event_name_missing() {
        let err = event_name(&json!({"userId": 5}), DEFAULT_EVENT_FIELD).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "eventName"));
        assert!(err.to_string().contains("eventName"));
    }

    #[test]
    fn test_event_name_not_a_string() {
        let err = event_name(&json!({"eventName": 7}), DEFAULT_EVENT_FIELD).unwrap_err();
        assert!(matches!(err, Error::InvalidField { .. }));
    }

    #[test]
    fn test_event_name_rejects_path_separator() {
        let err = event_name(&json!({"eventName": "../Login"}), DEFAULT_EVENT_FIELD).unwrap_err();
        assert!(matches!(err, Error::InvalidField { .. }));

        let err = event_name(&json!({"eventName": ""}), DEFAULT_EVENT_FIELD).unwrap_err();
        assert!(matches!(err, Error::InvalidField { .. }));
    }

    #[test]
    fn test_sample_root_must_be_object() {
        let err = event_name(&json!(["Login"]), DEFAULT_EVENT_FIELD).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument { .. }));
    }

    #[test]
    fn test_fill_placeholders() {
        let template = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "https://example.com/schemas/###Replace_Me",
            "title": "###Replace_Me",
            "properties": {}
        });

        let filled = fill_placeholders(&template, "Login", PLACEHOLDER).unwrap();
        assert_eq!(
            filled,
            json!({
                "$schema": "http://json-schema.org/draft-07/schema#",
                "$id": "https://example.com/schemas/Login.json",
                "title": "Login",
                "properties": {}
            })
        );

        // Input is left untouched
        assert_eq!(template["title"], "###Replace_Me");
    }

    #[test]
    fn test_fill_placeholders_without_token_is_noop() {
        let template = json!({"$id": "fixed.json", "title": "Fixed"});
        let filled = fill_placeholders(&template, "Login", PLACEHOLDER).unwrap();
        assert_eq!(filled, template);
    }

    #[test]
    fn test_fill_placeholders_custom_token() {
        let template = json!({"$id": "{{event}}", "title": "Event {{event}}"});
        let filled = fill_placeholders(&template, "Login", "{{event}}").unwrap();
        assert_eq!(filled, json!({"$id": "Login.json", "title": "Event Login"}));
    }

    #[test]
    fn test_fill_placeholders_missing_title() {
        let template = json!({"$id": "###Replace_Me"});
        let err = fill_placeholders(&template, "Login", PLACEHOLDER).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_fill_placeholders_id_not_a_string() {
        let template = json!({"$id": 1, "title": "###Replace_Me"});
        let err = fill_placeholders(&template, "Login", PLACEHOLDER).unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "$id"));
    }

    #[test]
    fn test_merge_schema_keeps_other_keys() {
        let template = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "$id": "Login.json",
            "title": "Login",
            "required": ["eventName"],
            "properties": {"version": {"type": "integer"}}
        });

        let mut properties = Properties::new();
        properties.insert(
            "eventName",
            SchemaNode::from(Descriptor::new(SchemaType::String)),
        );

        let merged = merge_schema(&template, &properties).unwrap();
        assert_eq!(
            merged,
            json!({
                "$schema": "http://json-schema.org/draft-07/schema#",
                "$id": "Login.json",
                "title": "Login",
                "required": ["eventName"],
                "properties": {
                    "version": {"type": "integer"},
                    "eventName": {"type": "string"}
                }
            })
        );
    }

    #[test]
    fn test_merge_schema_overwrites_same_key() {
        let template = json!({"properties": {"userId": {"type": "string"}}});
        let mut properties = Properties::new();
        properties.insert(
            "userId",
            SchemaNode::from(Descriptor::new(SchemaType::Integer)),
        );

        let merged = merge_schema(&template, &properties).unwrap();
        assert_eq!(merged["properties"]["userId"], json!({"type": "integer"}));
    }

    #[test]
    fn test_merge_schema_creates_properties() {
        let template = json!({"title": "Login"});
        let merged = merge_schema(&template, &Properties::new()).unwrap();
        assert_eq!(merged, json!({"title": "Login", "properties": {}}));
    }

    #[test]
    fn test_merge_schema_rejects_non_object_properties() {
        let template = json!({"properties": []});
        let err = merge_schema(&template, &Properties::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidField { ref field, .. } if field == "properties"));
    }
}
