//! # setdeck
//!
//! A schema-driven settings registry with JSON persistence and a web
//! settings interface.
//!
//! Applications describe their settings as [`Schema`]s, optionally bundle
//! related schemas into collapsible [`SchemaGroup`]s, and register everything
//! in a [`SchemaRegistry`] at startup. The settings router renders each
//! schema as a form and stores submitted values in a configuration directory,
//! one file per schema, read back on the next render.
//!
//! ## Features
//!
//! - Typed field kinds: boolean, string, integer, number, enumerated string
//! - Validation of definitions at registration and of values on save
//! - Schemas from builders, JSON-Schema dictionaries or `schemars` types
//! - Plugin registry with per-plugin configuration
//! - JSON or TOML persistence with optional backups
//! - axum settings router (feature `web`)
//! - Built-in theme catalog (feature `themes`)
//!
//! ## Quick Start
//!
//! ```rust
//! use setdeck::{Field, Schema, SchemaGroup, SchemaRegistry};
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     Schema::new("notifications", "Notification Settings")
//!         .field(Field::boolean("email_enabled", "Email Notifications", true)),
//! )?;
//! registry.register(
//!     SchemaGroup::new("database", "Database Settings")
//!         .default_open(true)
//!         .schema(Schema::new("connection", "Connection Settings")),
//! )?;
//!
//! assert_eq!(registry.list_schemas(), ["notifications", "database"]);
//! assert!(registry.resolve("database_connection").is_some());
//! # Ok::<(), setdeck::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Schema and field model, parsing and validation
//! - [`group`] - Collapsible schema groups
//! - [`registry`] - Schema registry
//! - [`plugin`] - Plugin managers and the plugin registry
//! - [`store`] - Persisted configuration values
//! - [`config`] - Application settings schema and theme detection
//! - [`web`] - Settings router (requires `web` feature)

/// Error types and result alias.
pub mod error;

/// Schema and field model.
pub mod schema;

/// Collapsible schema groups.
pub mod group;

/// Schema registry built at startup and shared read-only afterwards.
pub mod registry;

/// Plugin managers and the category-keyed plugin registry.
pub mod plugin;

/// File-backed storage of submitted values.
pub mod store;

/// Application-wide settings schema.
pub mod config;

/// Theme catalog.
#[cfg(feature = "themes")]
pub mod theme;

/// Settings router for axum.
///
/// This module is only available when the `web` feature is enabled.
#[cfg(feature = "web")]
pub mod web;

pub use error::{Error, Result, SchemaError};
pub use group::SchemaGroup;
pub use plugin::{PluginDescriptor, PluginManager, PluginRegistry, StaticPluginManager};
pub use registry::{RegistryEntry, SchemaRegistry};
pub use schema::{Field, FieldKind, Schema};
pub use store::{ConfigFormat, ConfigStore};
pub use serde_json::Value;
