//! Settings schema model.
//!
//! A [`Schema`] describes one settings form: a name that identifies it in the
//! registry and on disk, display titles, and an ordered list of [`Field`]s.
//! Each field carries a [`FieldKind`] that fixes its value type, default and
//! constraints.
//!
//! Schemas are usually built with the builder methods:
//!
//! ```rust
//! use setdeck::schema::{Field, Schema};
//!
//! let schema = Schema::new("connection", "Connection Settings")
//!     .menu_title("Connection")
//!     .field(Field::string("db_host", "Host", "localhost"))
//!     .field(Field::integer("db_port", "Port", 5432).range(1, 65535));
//!
//! assert!(schema.validate().is_ok());
//! assert_eq!(schema.defaults()["db_port"], 5432);
//! ```
//!
//! They can also be parsed from a JSON-Schema-like dictionary with
//! `Schema::try_from(&value)` or derived from a Rust type with
//! [`Schema::for_type`].

use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use serde_json::{Map, Number, Value};

use crate::error::SchemaError;

mod parse;

/// Declarative description of a settings form.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Registry name, also used as the persistence key.
    pub name: String,
    /// Page title.
    pub title: String,
    /// Short title for navigation, falls back to `title`.
    pub menu_title: Option<String>,
    /// Optional description shown above the form.
    pub description: Option<String>,
    /// Fields in display order.
    pub fields: Vec<Field>,
}

/// One form field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Property key in the persisted value map.
    pub key: String,
    /// Label shown next to the input.
    pub title: String,
    /// Optional help text.
    pub description: Option<String>,
    /// Value type, default and constraints.
    pub kind: FieldKind,
}

/// Supported field kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Checkbox.
    Boolean { default: Option<bool> },
    /// Free text.
    String { default: Option<String> },
    /// Whole number with optional inclusive bounds.
    Integer {
        default: Option<i64>,
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    /// Floating-point number with optional inclusive bounds.
    Number {
        default: Option<f64>,
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    /// Selection among a fixed list of string values.
    Enum(EnumField),
}

/// Variants of an enumerated string field.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumField {
    /// Allowed values with their display labels.
    pub variants: Vec<EnumVariant>,
    /// Default value, must be one of the variant values.
    pub default: Option<String>,
}

/// One allowed value of an [`EnumField`].
#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariant {
    /// Stored value.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl EnumField {
    /// Index of `value` among the variants.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.variants.iter().position(|v| v.value == value)
    }

    /// Display label for `value`.
    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.variants
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.label.as_str())
    }

    /// Iterator over the stored values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.value.as_str())
    }
}

impl FieldKind {
    /// JSON Schema `type` keyword for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Boolean { .. } => "boolean",
            FieldKind::String { .. } | FieldKind::Enum(_) => "string",
            FieldKind::Integer { .. } => "integer",
            FieldKind::Number { .. } => "number",
        }
    }

    /// Default value as JSON, if one is declared.
    pub fn default_value(&self) -> Option<Value> {
        match self {
            FieldKind::Boolean { default } => default.map(Value::Bool),
            FieldKind::String { default } => default.clone().map(Value::String),
            FieldKind::Integer { default, .. } => default.map(|v| Value::Number(v.into())),
            FieldKind::Number { default, .. } => {
                default.and_then(Number::from_f64).map(Value::Number)
            }
            FieldKind::Enum(e) => e.default.clone().map(Value::String),
        }
    }
}

impl Field {
    /// Create a field with an explicit kind.
    pub fn new(key: impl Into<String>, title: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: None,
            kind,
        }
    }

    /// Boolean field with a default.
    pub fn boolean(key: impl Into<String>, title: impl Into<String>, default: bool) -> Self {
        Self::new(key, title, FieldKind::Boolean {
            default: Some(default),
        })
    }

    /// String field with a default.
    pub fn string(
        key: impl Into<String>,
        title: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self::new(key, title, FieldKind::String {
            default: Some(default.into()),
        })
    }

    /// Integer field with a default and no bounds.
    pub fn integer(key: impl Into<String>, title: impl Into<String>, default: i64) -> Self {
        Self::new(key, title, FieldKind::Integer {
            default: Some(default),
            minimum: None,
            maximum: None,
        })
    }

    /// Number field with a default and no bounds.
    pub fn number(key: impl Into<String>, title: impl Into<String>, default: f64) -> Self {
        Self::new(key, title, FieldKind::Number {
            default: Some(default),
            minimum: None,
            maximum: None,
        })
    }

    /// Enumerated string field from `(value, label)` pairs.
    pub fn enumeration<I, V, L>(
        key: impl Into<String>,
        title: impl Into<String>,
        variants: I,
        default: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        let variants = variants
            .into_iter()
            .map(|(value, label)| EnumVariant {
                value: value.into(),
                label: label.into(),
            })
            .collect();
        Self::new(
            key,
            title,
            FieldKind::Enum(EnumField {
                variants,
                default: Some(default.into()),
            }),
        )
    }

    /// Attach help text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the inclusive lower bound. Ignored for non-numeric kinds.
    ///
    /// Integer fields round a fractional bound up.
    pub fn minimum(mut self, bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        match &mut self.kind {
            FieldKind::Integer { minimum, .. } => *minimum = Some(bound.ceil() as i64),
            FieldKind::Number { minimum, .. } => *minimum = Some(bound),
            _ => {}
        }
        self
    }

    /// Set the inclusive upper bound. Ignored for non-numeric kinds.
    ///
    /// Integer fields round a fractional bound down.
    pub fn maximum(mut self, bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        match &mut self.kind {
            FieldKind::Integer { maximum, .. } => *maximum = Some(bound.floor() as i64),
            FieldKind::Number { maximum, .. } => *maximum = Some(bound),
            _ => {}
        }
        self
    }

    /// Set both bounds.
    pub fn range(self, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        self.minimum(min).maximum(max)
    }

    /// Check a JSON value against this field and return the stored form.
    pub fn check(&self, value: &Value) -> Result<Value, SchemaError> {
        let path = self.key.as_str();
        match &self.kind {
            FieldKind::Boolean { .. } => match value {
                Value::Bool(_) => Ok(value.clone()),
                _ => Err(mismatch(path, "boolean", value)),
            },
            FieldKind::String { .. } => match value {
                Value::String(_) => Ok(value.clone()),
                _ => Err(mismatch(path, "string", value)),
            },
            FieldKind::Integer {
                minimum, maximum, ..
            } => {
                let Some(v) = value.as_i64() else {
                    return Err(mismatch(path, "integer", value));
                };
                check_range(path, v, *minimum, *maximum)?;
                Ok(Value::Number(v.into()))
            }
            FieldKind::Number {
                minimum, maximum, ..
            } => {
                let Some(v) = value.as_f64().filter(|v| v.is_finite()) else {
                    return Err(mismatch(path, "number", value));
                };
                check_range(path, v, *minimum, *maximum)?;
                Ok(value.clone())
            }
            FieldKind::Enum(e) => match value {
                Value::String(s) if e.position(s).is_some() => Ok(value.clone()),
                _ => Err(SchemaError::TypeMismatch {
                    path: path.to_string(),
                    expected: format!("one of: {:?}", e.values().collect::<Vec<_>>()),
                    actual: value.to_string(),
                }),
            },
        }
    }

    /// Convert a raw HTML form value into a checked JSON value.
    ///
    /// Browsers omit unchecked checkboxes, so a missing boolean is `false`.
    /// Other missing values fall back to the field default.
    pub fn parse_form(&self, raw: Option<&str>) -> Result<Value, SchemaError> {
        let path = self.key.as_str();
        let value = match (&self.kind, raw) {
            (FieldKind::Boolean { .. }, None) => Value::Bool(false),
            (FieldKind::Boolean { .. }, Some(s)) => match s.trim() {
                "on" | "true" | "1" | "yes" => Value::Bool(true),
                "off" | "false" | "0" | "no" | "" => Value::Bool(false),
                other => return Err(mismatch(path, "boolean", &Value::String(other.into()))),
            },
            (FieldKind::String { default }, None) => {
                Value::String(default.clone().unwrap_or_default())
            }
            (FieldKind::String { .. }, Some(s)) => Value::String(s.to_string()),
            (kind, None) => kind
                .default_value()
                .ok_or_else(|| mismatch(path, kind.type_name(), &Value::Null))?,
            (FieldKind::Integer { .. }, Some(s)) => {
                let v: i64 = s
                    .trim()
                    .parse()
                    .map_err(|_| mismatch(path, "integer", &Value::String(s.into())))?;
                Value::Number(v.into())
            }
            (FieldKind::Number { .. }, Some(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| mismatch(path, "number", &Value::String(s.into())))?,
            (FieldKind::Enum(_), Some(s)) => Value::String(s.to_string()),
        };
        self.check(&value)
    }

    fn validate(&self, schema: &str) -> Result<(), SchemaError> {
        if self.key.trim().is_empty() {
            return Err(SchemaError::invalid(schema, "field key must not be empty"));
        }
        let at = |reason: String| SchemaError::invalid(schema, format!("field `{}`: {reason}", self.key));
        match &self.kind {
            FieldKind::Boolean { .. } | FieldKind::String { .. } => {}
            FieldKind::Integer {
                default,
                minimum,
                maximum,
            } => {
                if let (Some(min), Some(max)) = (minimum, maximum)
                    && min > max
                {
                    return Err(at(format!("minimum {min} exceeds maximum {max}")));
                }
                if let Some(d) = default {
                    check_range(&self.key, *d, *minimum, *maximum)
                        .map_err(|e| at(format!("default {e}")))?;
                }
            }
            FieldKind::Number {
                default,
                minimum,
                maximum,
            } => {
                for v in [default, minimum, maximum].into_iter().flatten() {
                    if !v.is_finite() {
                        return Err(at(format!("{v} is not a finite number")));
                    }
                }
                if let (Some(min), Some(max)) = (minimum, maximum)
                    && min > max
                {
                    return Err(at(format!("minimum {min} exceeds maximum {max}")));
                }
                if let Some(d) = default {
                    check_range(&self.key, *d, *minimum, *maximum)
                        .map_err(|e| at(format!("default {e}")))?;
                }
            }
            FieldKind::Enum(e) => {
                if e.variants.is_empty() {
                    return Err(at("enum has no variants".into()));
                }
                let mut seen = HashSet::new();
                for v in &e.variants {
                    if !seen.insert(v.value.as_str()) {
                        return Err(at(format!("duplicate enum value `{}`", v.value)));
                    }
                }
                if let Some(d) = &e.default
                    && e.position(d).is_none()
                {
                    return Err(at(format!("default `{d}` is not an enum value")));
                }
            }
        }
        Ok(())
    }

    fn to_json(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".into(), self.kind.type_name().into());
        prop.insert("title".into(), self.title.clone().into());
        if let Some(desc) = &self.description {
            prop.insert("description".into(), desc.clone().into());
        }
        if let Some(default) = self.kind.default_value() {
            prop.insert("default".into(), default);
        }
        match &self.kind {
            FieldKind::Integer {
                minimum, maximum, ..
            } => {
                if let Some(min) = minimum {
                    prop.insert("minimum".into(), (*min).into());
                }
                if let Some(max) = maximum {
                    prop.insert("maximum".into(), (*max).into());
                }
            }
            FieldKind::Number {
                minimum, maximum, ..
            } => {
                if let Some(min) = minimum.and_then(Number::from_f64) {
                    prop.insert("minimum".into(), Value::Number(min));
                }
                if let Some(max) = maximum.and_then(Number::from_f64) {
                    prop.insert("maximum".into(), Value::Number(max));
                }
            }
            FieldKind::Enum(e) => {
                prop.insert(
                    "enum".into(),
                    e.variants.iter().map(|v| Value::from(v.value.clone())).collect(),
                );
                prop.insert(
                    "enumNames".into(),
                    e.variants.iter().map(|v| Value::from(v.label.clone())).collect(),
                );
            }
            FieldKind::Boolean { .. } | FieldKind::String { .. } => {}
        }
        Value::Object(prop)
    }
}

impl Schema {
    /// Create an empty schema.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            menu_title: None,
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn menu_title(mut self, menu_title: impl Into<String>) -> Self {
        self.menu_title = Some(menu_title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Title used in navigation.
    pub fn display_title(&self) -> &str {
        self.menu_title.as_deref().unwrap_or(&self.title)
    }

    /// Look up a field by key.
    pub fn get_field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Check the schema definition itself.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Invalid`] for a malformed name, duplicate or
    /// empty field keys, inverted bounds, out-of-range defaults and invalid
    /// enum definitions.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !is_valid_name(&self.name) {
            return Err(SchemaError::invalid(
                &self.name,
                "name must be non-empty and contain only ASCII letters, digits, `_` or `-`",
            ));
        }
        let mut keys = HashSet::new();
        for field in &self.fields {
            if !keys.insert(field.key.as_str()) {
                return Err(SchemaError::invalid(
                    &self.name,
                    format!("duplicate field `{}`", field.key),
                ));
            }
            field.validate(&self.name)?;
        }
        Ok(())
    }

    /// Default values of all fields that declare one, in field order.
    pub fn defaults(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter_map(|f| f.kind.default_value().map(|v| (f.key.clone(), v)))
            .collect()
    }

    /// Validate a submitted value map and complete it with defaults.
    ///
    /// # Errors
    ///
    /// Fails on unknown keys and on values that do not satisfy their field.
    pub fn check_values(&self, values: &Map<String, Value>) -> Result<Map<String, Value>, SchemaError> {
        if let Some(unknown) = values.keys().find(|k| self.get_field(k).is_none()) {
            return Err(SchemaError::UnknownField {
                schema: self.name.clone(),
                field: unknown.clone(),
            });
        }
        let mut out = Map::new();
        for field in &self.fields {
            let value = match values.get(&field.key) {
                Some(v) => Some(field.check(v)?),
                None => field.kind.default_value(),
            };
            if let Some(v) = value {
                out.insert(field.key.clone(), v);
            }
        }
        Ok(out)
    }

    /// Parse an HTML form submission into a checked value map.
    ///
    /// Form keys that match no field are ignored.
    pub fn values_from_form(
        &self,
        form: &HashMap<String, String>,
    ) -> Result<Map<String, Value>, SchemaError> {
        let mut out = Map::new();
        for field in &self.fields {
            let value = field.parse_form(form.get(&field.key).map(String::as_str))?;
            out.insert(field.key.clone(), value);
        }
        Ok(out)
    }

    /// Dictionary form of the schema.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("name".into(), self.name.clone().into());
        obj.insert("title".into(), self.title.clone().into());
        if let Some(menu) = &self.menu_title {
            obj.insert("menu_title".into(), menu.clone().into());
        }
        if let Some(desc) = &self.description {
            obj.insert("description".into(), desc.clone().into());
        }
        obj.insert("type".into(), "object".into());
        let props = self
            .fields
            .iter()
            .map(|f| (f.key.clone(), f.to_json()))
            .collect();
        obj.insert("properties".into(), Value::Object(props));
        Value::Object(obj)
    }
}

/// Whether `name` can be used as a schema or group name.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// `"email_enabled"` -> `"Email Enabled"`.
pub fn title_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn mismatch(path: &str, expected: &str, actual: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        path: path.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

fn check_range<T: PartialOrd + Display + Copy>(
    path: &str,
    value: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<(), SchemaError> {
    let below = min.is_some_and(|m| value < m);
    let above = max.is_some_and(|m| value > m);
    if below || above {
        let range = match (min, max) {
            (Some(a), Some(b)) => format!("{a}..={b}"),
            (Some(a), None) => format!("{a}.."),
            (None, Some(b)) => format!("..={b}"),
            (None, None) => "..".to_string(),
        };
        return Err(SchemaError::OutOfRange {
            path: path.to_string(),
            value: value.to_string(),
            range,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn backup() -> Schema {
        Schema::new("backup", "Backup Settings")
            .menu_title("Backup")
            .field(Field::boolean("auto_backup", "Enable Auto Backup", false))
            .field(Field::enumeration(
                "backup_schedule",
                "Backup Schedule",
                [("hourly", "Every Hour"), ("daily", "Daily"), ("weekly", "Weekly")],
                "daily",
            ))
            .field(Field::integer("retention_days", "Retention Period (days)", 30).range(1, 365))
            .field(Field::number("query_timeout", "Query Timeout", 30.0).minimum(1.0))
    }

    #[test]
    fn test_valid_schema_passes() {
        assert!(backup().validate().is_ok());
        assert_eq!(backup().display_title(), "Backup");
        assert_eq!(Schema::new("x", "Only Title").display_title(), "Only Title");
    }

    #[test]
    fn test_invalid_definitions_rejected() {
        let bad_name = Schema::new("has space", "x");
        assert!(matches!(bad_name.validate(), Err(SchemaError::Invalid { .. })));

        let dup = Schema::new("dup", "Dup")
            .field(Field::boolean("a", "A", true))
            .field(Field::string("a", "A", ""));
        assert!(dup.validate().is_err());

        let out_of_range = Schema::new("r", "R").field(Field::integer("n", "N", 0).range(1, 10));
        assert!(out_of_range.validate().is_err());

        let inverted = Schema::new("r", "R").field(Field::integer("n", "N", 5).range(10, 1));
        assert!(inverted.validate().is_err());

        let bad_enum = Schema::new("e", "E").field(Field::enumeration(
            "mode",
            "Mode",
            [("a", "A"), ("b", "B")],
            "c",
        ));
        assert!(bad_enum.validate().is_err());

        let dup_variant = Schema::new("e", "E").field(Field::enumeration(
            "mode",
            "Mode",
            [("a", "A"), ("a", "Again")],
            "a",
        ));
        assert!(dup_variant.validate().is_err());
    }

    #[test]
    fn test_defaults_in_field_order() {
        let defaults = backup().defaults();
        let keys: Vec<_> = defaults.keys().cloned().collect();
        assert_eq!(
            keys,
            ["auto_backup", "backup_schedule", "retention_days", "query_timeout"]
        );
        assert_eq!(defaults["backup_schedule"], "daily");
        assert_eq!(defaults["retention_days"], 30);
    }

    #[test]
    fn test_check_values() {
        let schema = backup();
        let mut values = Map::new();
        values.insert("retention_days".into(), json!(90));
        let full = schema.check_values(&values).unwrap();
        assert_eq!(full["retention_days"], 90);
        assert_eq!(full["auto_backup"], false);

        values.insert("retention_days".into(), json!(400));
        assert!(matches!(
            schema.check_values(&values),
            Err(SchemaError::OutOfRange { .. })
        ));

        values.insert("retention_days".into(), json!("ten"));
        assert!(matches!(
            schema.check_values(&values),
            Err(SchemaError::TypeMismatch { .. })
        ));

        let mut unknown = Map::new();
        unknown.insert("nope".into(), json!(true));
        assert!(matches!(
            schema.check_values(&unknown),
            Err(SchemaError::UnknownField { .. })
        ));

        let mut bad_choice = Map::new();
        bad_choice.insert("backup_schedule".into(), json!("yearly"));
        assert!(schema.check_values(&bad_choice).is_err());
    }

    #[test]
    fn test_values_from_form() {
        let schema = backup();
        let form: HashMap<String, String> = [
            ("backup_schedule", "weekly"),
            ("retention_days", " 14 "),
            ("query_timeout", "2.5"),
            ("submit", "Save"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let values = schema.values_from_form(&form).unwrap();
        // unchecked checkbox is absent from the form
        assert_eq!(values["auto_backup"], false);
        assert_eq!(values["backup_schedule"], "weekly");
        assert_eq!(values["retention_days"], 14);
        assert_eq!(values["query_timeout"], 2.5);

        let mut bad = form.clone();
        bad.insert("query_timeout".into(), "0.5".into());
        assert!(matches!(
            schema.values_from_form(&bad),
            Err(SchemaError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_to_json_shape() {
        let v = backup().to_json();
        assert_eq!(v["type"], "object");
        assert_eq!(v["menu_title"], "Backup");
        let schedule = &v["properties"]["backup_schedule"];
        assert_eq!(schedule["type"], "string");
        assert_eq!(schedule["enum"], json!(["hourly", "daily", "weekly"]));
        assert_eq!(schedule["enumNames"][0], "Every Hour");
        assert_eq!(v["properties"]["retention_days"]["maximum"], 365);
    }

    #[test]
    fn test_fractional_integer_bounds() {
        let field = Field::integer("burst_size", "Burst Size", 5).range(1.5, 9.5);
        assert_eq!(
            field.kind,
            FieldKind::Integer {
                default: Some(5),
                minimum: Some(2),
                maximum: Some(9)
            }
        );
        assert!(field.check(&json!(1)).is_err());
        assert!(field.check(&json!(2)).is_ok());
        assert!(field.check(&json!(9)).is_ok());
        assert!(field.check(&json!(10)).is_err());

        let negative = Field::integer("offset", "Offset", 0).range(-2.5, -0.5);
        assert!(negative.check(&json!(-3)).is_err());
        assert!(negative.check(&json!(-1)).is_ok());
        assert!(negative.check(&json!(0)).is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("email_enabled"), "Email Enabled");
        assert_eq!(title_case("light"), "Light");
        assert_eq!(title_case("night-owl"), "Night Owl");
    }
}
