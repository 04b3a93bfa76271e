//! Conversion from JSON-Schema-like dictionaries.
//!
//! Accepts the dialect used by settings definitions (`enum` + `enumNames`)
//! as well as the output of `schemars`: `$ref` into `$defs`/`definitions`,
//! single-element `allOf`, `oneOf` of string constants and nullable type
//! arrays such as `["string", "null"]`.

use std::borrow::Cow;

use schemars::JsonSchema;
use serde_json::{Map, Value};

use super::{EnumField, EnumVariant, Field, FieldKind, Schema, title_case};
use crate::error::SchemaError;

impl TryFrom<&Value> for Schema {
    type Error = SchemaError;

    /// Parse a schema dictionary. The name comes from `name`, or from the
    /// snake-cased `title` when `name` is absent.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let obj = as_object(value, "$")?;
        let name = str_of(obj, "name")
            .map(str::to_string)
            .or_else(|| str_of(obj, "title").map(snake_case))
            .ok_or_else(|| SchemaError::invalid("<unnamed>", "missing `name` and `title`"))?;
        parse_object(&name, value)
    }
}

impl Schema {
    /// Parse a schema dictionary under an explicit name.
    pub fn parse_named(name: &str, value: &Value) -> Result<Self, SchemaError> {
        parse_object(name, value)
    }

    /// Derive a schema from a Rust type through its `JsonSchema` impl.
    ///
    /// ```rust
    /// use schemars::JsonSchema;
    /// use setdeck::schema::Schema;
    ///
    /// /// Export options.
    /// #[derive(JsonSchema)]
    /// struct Export {
    ///     /// Write a header row.
    ///     include_headers: bool,
    /// }
    ///
    /// let schema = Schema::for_type::<Export>("export").unwrap();
    /// assert_eq!(schema.fields[0].key, "include_headers");
    /// ```
    pub fn for_type<C: JsonSchema>(name: &str) -> Result<Self, SchemaError> {
        let generated = schemars::schema_for!(C);
        let value = serde_json::to_value(&generated)
            .map_err(|e| SchemaError::invalid(name, e.to_string()))?;
        parse_object(name, &value)
    }
}

fn parse_object(name: &str, root: &Value) -> Result<Schema, SchemaError> {
    let obj = as_object(root, "$")?;
    let title = str_of(obj, "title")
        .map(str::to_string)
        .unwrap_or_else(|| title_case(name));

    let mut fields = Vec::new();
    match obj.get("properties") {
        None => {}
        Some(Value::Object(props)) => {
            for (key, prop) in props {
                fields.push(parse_field(root, key, prop)?);
            }
        }
        Some(other) => return Err(type_mismatch("properties", "object", other)),
    }

    Ok(Schema {
        name: name.to_string(),
        title,
        menu_title: str_of(obj, "menu_title").map(str::to_string),
        description: str_of(obj, "description").map(str::to_string),
        fields,
    })
}

fn parse_field(root: &Value, key: &str, prop: &Value) -> Result<Field, SchemaError> {
    let prop = resolve(root, key, prop)?;
    let title = str_of(&prop, "title")
        .map(str::to_string)
        .unwrap_or_else(|| title_case(key));
    let description = str_of(&prop, "description").map(str::to_string);
    let default = prop.get("default").filter(|v| !v.is_null());

    let kind = if let Some(values) = prop.get("enum") {
        parse_enum(key, values, prop.get("enumNames"), default)?
    } else if let Some(variants) = const_variants(&prop) {
        FieldKind::Enum(EnumField {
            variants,
            default: default_str(key, default)?,
        })
    } else {
        match single_type(key, &prop)? {
            "boolean" => FieldKind::Boolean {
                default: match default {
                    None => None,
                    Some(Value::Bool(b)) => Some(*b),
                    Some(other) => return Err(type_mismatch(key, "boolean default", other)),
                },
            },
            "string" => FieldKind::String {
                default: default_str(key, default)?,
            },
            "integer" => FieldKind::Integer {
                default: default.map(|v| int_of(key, v)).transpose()?,
                minimum: prop.get("minimum").map(|v| int_of(key, v)).transpose()?,
                maximum: prop.get("maximum").map(|v| int_of(key, v)).transpose()?,
            },
            "number" => FieldKind::Number {
                default: default.map(|v| float_of(key, v)).transpose()?,
                minimum: prop.get("minimum").map(|v| float_of(key, v)).transpose()?,
                maximum: prop.get("maximum").map(|v| float_of(key, v)).transpose()?,
            },
            other => {
                return Err(SchemaError::UnsupportedType {
                    path: key.to_string(),
                    kind: other.to_string(),
                });
            }
        }
    };

    Ok(Field {
        key: key.to_string(),
        title,
        description,
        kind,
    })
}

/// Follow `$ref` and single-element `allOf`, letting sibling keywords of the
/// reference override the target.
fn resolve<'a>(root: &Value, key: &str, prop: &'a Value) -> Result<Cow<'a, Map<String, Value>>, SchemaError> {
    resolve_seen(root, key, prop, &mut Vec::new())
}

fn resolve_seen<'a>(
    root: &Value,
    key: &str,
    prop: &'a Value,
    seen: &mut Vec<String>,
) -> Result<Cow<'a, Map<String, Value>>, SchemaError> {
    let obj = as_object(prop, key)?;
    let target = if let Some(reference) = str_of(obj, "$ref") {
        let pointer = reference.strip_prefix('#').ok_or_else(|| SchemaError::UnsupportedType {
            path: key.to_string(),
            kind: format!("external reference {reference}"),
        })?;
        if seen.iter().any(|p| p == pointer) {
            return Err(SchemaError::invalid(key, format!("cyclic reference {reference}")));
        }
        seen.push(pointer.to_string());
        root.pointer(pointer).ok_or_else(|| {
            SchemaError::invalid(key, format!("unresolved reference {reference}"))
        })?
    } else if let Some(Value::Array(all)) = obj.get("allOf")
        && all.len() == 1
    {
        &all[0]
    } else {
        return Ok(Cow::Borrowed(obj));
    };

    let mut merged = resolve_seen(root, key, target, seen)?.into_owned();
    for (k, v) in obj {
        if k != "$ref" && k != "allOf" {
            merged.insert(k.clone(), v.clone());
        }
    }
    Ok(Cow::Owned(merged))
}

fn parse_enum(
    key: &str,
    values: &Value,
    names: Option<&Value>,
    default: Option<&Value>,
) -> Result<FieldKind, SchemaError> {
    let Value::Array(values) = values else {
        return Err(type_mismatch(key, "enum array", values));
    };
    let values = values
        .iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| SchemaError::UnsupportedType {
                path: key.to_string(),
                kind: format!("non-string enum value {v}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let labels = match names {
        None => values.clone(),
        Some(Value::Array(names)) if names.len() == values.len() => names
            .iter()
            .map(|n| {
                n.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| type_mismatch(key, "string enumName", n))
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(SchemaError::invalid(
                key,
                format!("enumNames {other} does not match {} enum values", values.len()),
            ));
        }
    };

    Ok(FieldKind::Enum(EnumField {
        variants: values
            .into_iter()
            .zip(labels)
            .map(|(value, label)| EnumVariant { value, label })
            .collect(),
        default: default_str(key, default)?,
    }))
}

/// `oneOf`/`anyOf` whose entries are all string constants.
fn const_variants(prop: &Map<String, Value>) -> Option<Vec<EnumVariant>> {
    let Some(Value::Array(entries)) = prop.get("oneOf").or_else(|| prop.get("anyOf")) else {
        return None;
    };
    entries
        .iter()
        .map(|entry| {
            let value = entry.get("const")?.as_str()?.to_string();
            let label = entry
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| value.clone());
            Some(EnumVariant { value, label })
        })
        .collect()
}

fn single_type<'a>(key: &str, prop: &'a Map<String, Value>) -> Result<&'a str, SchemaError> {
    match prop.get("type") {
        Some(Value::String(t)) => Ok(t),
        Some(Value::Array(types)) => {
            let mut non_null = types.iter().filter_map(Value::as_str).filter(|t| *t != "null");
            match (non_null.next(), non_null.next()) {
                (Some(t), None) => Ok(t),
                _ => Err(SchemaError::UnsupportedType {
                    path: key.to_string(),
                    kind: Value::Array(types.clone()).to_string(),
                }),
            }
        }
        Some(other) => Err(type_mismatch(key, "type name", other)),
        None => Err(SchemaError::invalid(key, "property has no `type`")),
    }
}

fn default_str(key: &str, default: Option<&Value>) -> Result<Option<String>, SchemaError> {
    match default {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(type_mismatch(key, "string default", other)),
    }
}

fn int_of(key: &str, v: &Value) -> Result<i64, SchemaError> {
    if let Some(i) = v.as_i64() {
        return Ok(i);
    }
    match v.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => Ok(f as i64),
        _ => Err(type_mismatch(key, "integer", v)),
    }
}

fn float_of(key: &str, v: &Value) -> Result<f64, SchemaError> {
    v.as_f64().ok_or_else(|| type_mismatch(key, "number", v))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| type_mismatch(path, "object", value))
}

fn str_of<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

fn type_mismatch(path: &str, expected: &str, actual: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

/// `"CSV Export Settings"` -> `"csv_export_settings"`.
fn snake_case(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_settings_dictionary() {
        let value = json!({
            "name": "notifications",
            "title": "Notification Settings",
            "menu_title": "Notifications",
            "type": "object",
            "properties": {
                "email_enabled": {"type": "boolean", "title": "Email Notifications", "default": true},
                "email_address": {"type": "string", "title": "Email Address", "default": "user@example.com"},
                "notification_frequency": {
                    "type": "string",
                    "title": "Notification Frequency",
                    "default": "daily",
                    "enum": ["realtime", "hourly", "daily", "weekly"],
                    "enumNames": ["Real-time", "Every Hour", "Daily Digest", "Weekly Summary"]
                },
                "pool_size": {"type": "integer", "default": 10, "minimum": 1, "maximum": 100}
            }
        });

        let schema = Schema::try_from(&value).unwrap();
        assert_eq!(schema.name, "notifications");
        assert_eq!(schema.display_title(), "Notifications");
        assert_eq!(schema.fields.len(), 4);
        // properties keep their declared order
        assert_eq!(schema.fields[2].key, "notification_frequency");
        let FieldKind::Enum(e) = &schema.fields[2].kind else {
            panic!("expected enum");
        };
        assert_eq!(e.label_for("daily"), Some("Daily Digest"));
        assert_eq!(e.default.as_deref(), Some("daily"));
        assert_eq!(schema.fields[3].title, "Pool Size");
        assert_eq!(
            schema.fields[3].kind,
            FieldKind::Integer {
                default: Some(10),
                minimum: Some(1),
                maximum: Some(100)
            }
        );
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_name_from_title() {
        let value = json!({"type": "object", "title": "CSV Export Settings", "properties": {}});
        let schema = Schema::try_from(&value).unwrap();
        assert_eq!(schema.name, "csv_export_settings");

        let named = Schema::parse_named("csv_exporter", &value).unwrap();
        assert_eq!(named.name, "csv_exporter");
        assert_eq!(named.title, "CSV Export Settings");
    }

    #[test]
    fn test_rejects_bad_dictionaries() {
        let no_name = json!({"type": "object"});
        assert!(Schema::try_from(&no_name).is_err());

        let array_type = json!({"name": "x", "properties": {"tags": {"type": "array"}}});
        assert!(matches!(
            Schema::try_from(&array_type),
            Err(SchemaError::UnsupportedType { .. })
        ));

        let short_names = json!({"name": "x", "properties": {
            "mode": {"type": "string", "enum": ["a", "b"], "enumNames": ["A"]}
        }});
        assert!(Schema::try_from(&short_names).is_err());

        let wrong_default = json!({"name": "x", "properties": {
            "flag": {"type": "boolean", "default": "yes"}
        }});
        assert!(matches!(
            Schema::try_from(&wrong_default),
            Err(SchemaError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_refs_and_nullable_types() {
        let value = json!({
            "name": "refs",
            "properties": {
                "mode": {"$ref": "#/$defs/Mode", "description": "Processing mode"},
                "legacy": {"allOf": [{"$ref": "#/definitions/Legacy"}], "default": "b"},
                "label": {"type": ["string", "null"]},
                "level": {"oneOf": [
                    {"const": "low", "title": "Low"},
                    {"const": "high"}
                ]}
            },
            "$defs": {"Mode": {"type": "string", "enum": ["fast", "safe"]}},
            "definitions": {"Legacy": {"type": "string", "enum": ["a", "b"]}}
        });

        let schema = Schema::try_from(&value).unwrap();
        let mode = schema.get_field("mode").unwrap();
        assert_eq!(mode.description.as_deref(), Some("Processing mode"));
        assert!(matches!(mode.kind, FieldKind::Enum(_)));

        let FieldKind::Enum(legacy) = &schema.get_field("legacy").unwrap().kind else {
            panic!("expected enum");
        };
        assert_eq!(legacy.default.as_deref(), Some("b"));

        assert_eq!(
            schema.get_field("label").unwrap().kind,
            FieldKind::String { default: None }
        );

        let FieldKind::Enum(level) = &schema.get_field("level").unwrap().kind else {
            panic!("expected enum");
        };
        assert_eq!(level.label_for("low"), Some("Low"));
        assert_eq!(level.label_for("high"), Some("high"));
    }

    #[test]
    fn test_cyclic_refs_rejected() {
        let self_ref = json!({
            "name": "x",
            "properties": {"a": {"$ref": "#/$defs/A"}},
            "$defs": {"A": {"$ref": "#/$defs/A"}}
        });
        let err = Schema::try_from(&self_ref).unwrap_err();
        assert!(matches!(err, SchemaError::Invalid { .. }));
        assert!(err.to_string().contains("cyclic reference"));

        let mutual = json!({
            "name": "x",
            "properties": {"a": {"$ref": "#/$defs/A"}},
            "$defs": {
                "A": {"allOf": [{"$ref": "#/$defs/B"}]},
                "B": {"$ref": "#/$defs/A"}
            }
        });
        assert!(Schema::try_from(&mutual).is_err());

        // one definition shared by two properties is fine
        let shared = json!({
            "name": "x",
            "properties": {
                "a": {"$ref": "#/$defs/Flag"},
                "b": {"$ref": "#/$defs/Flag"}
            },
            "$defs": {"Flag": {"type": "boolean"}}
        });
        assert_eq!(Schema::try_from(&shared).unwrap().fields.len(), 2);
    }

    /// Export settings.
    #[derive(JsonSchema, Serialize, Default)]
    #[allow(dead_code)]
    struct ExportPrefs {
        /// Field separator.
        delimiter: String,
        include_headers: bool,
        indent: u8,
        mode: Mode,
    }

    #[derive(JsonSchema, Serialize, Default)]
    #[serde(rename_all = "lowercase")]
    #[allow(dead_code)]
    enum Mode {
        #[default]
        Fast,
        Safe,
    }

    #[test]
    fn test_for_type() {
        let schema = Schema::for_type::<ExportPrefs>("export_prefs").unwrap();
        assert_eq!(schema.name, "export_prefs");
        assert_eq!(schema.description.as_deref(), Some("Export settings."));

        let delimiter = schema.get_field("delimiter").unwrap();
        assert_eq!(delimiter.description.as_deref(), Some("Field separator."));
        assert!(matches!(delimiter.kind, FieldKind::String { .. }));
        assert!(matches!(
            schema.get_field("include_headers").unwrap().kind,
            FieldKind::Boolean { .. }
        ));
        assert!(matches!(
            schema.get_field("indent").unwrap().kind,
            FieldKind::Integer {
                minimum: Some(0),
                ..
            }
        ));
        let FieldKind::Enum(mode) = &schema.get_field("mode").unwrap().kind else {
            panic!("expected enum");
        };
        assert_eq!(mode.values().collect::<Vec<_>>(), ["fast", "safe"]);
        assert!(schema.validate().is_ok());
    }
}
