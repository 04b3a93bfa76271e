//! Error types for schema validation, registration and persistence.

use thiserror::Error;

/// Validation failures raised while checking a schema or a value against it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    /// The schema or field definition itself is malformed.
    #[error("invalid schema `{schema}`: {reason}")]
    Invalid { schema: String, reason: String },

    /// A value does not have the type the field expects.
    #[error("type mismatch at `{path}`: expected {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// A numeric value falls outside the field bounds.
    #[error("value {value} at `{path}` is out of range {range}")]
    OutOfRange {
        path: String,
        value: String,
        range: String,
    },

    /// A submitted key has no matching field.
    #[error("unknown field `{field}` in schema `{schema}`")]
    UnknownField { schema: String, field: String },

    /// The field type is not one of the supported kinds.
    #[error("unsupported type `{kind}` at `{path}`")]
    UnsupportedType { path: String, kind: String },
}

impl SchemaError {
    pub(crate) fn invalid(schema: &str, reason: impl Into<String>) -> Self {
        SchemaError::Invalid {
            schema: schema.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by the registry, plugin registry and config store.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A top-level name or form id is already taken.
    #[error("`{0}` is already registered")]
    Duplicate(String),

    #[error("schema `{0}` is not registered")]
    UnknownSchema(String),

    #[error("plugin category `{0}` is not registered")]
    UnknownCategory(String),

    #[error("plugin `{name}` not found in category `{category}`")]
    UnknownPlugin { category: String, name: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// Persisted content has an unexpected shape.
    #[error("malformed config file {path}: {reason}")]
    Malformed { path: String, reason: String },
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
