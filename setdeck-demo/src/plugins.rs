//! Example plugins.
//!
//! Plugin configuration schemas are written in the JSON-Schema dictionary
//! form a plugin would ship in its manifest, and parsed on load.

use std::{path::Path, sync::Arc};

use serde_json::{Value, json};
use setdeck::{PluginDescriptor, PluginRegistry, Schema, StaticPluginManager};

fn descriptor(
    name: &str,
    version: &str,
    title: &str,
    description: &str,
    config_schema: Value,
) -> setdeck::Result<PluginDescriptor> {
    Ok(PluginDescriptor {
        name: name.to_string(),
        version: version.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        config_schema: Schema::parse_named(name, &config_schema)?,
    })
}

/// CSV and JSON exporters.
pub fn export_plugins() -> setdeck::Result<Vec<PluginDescriptor>> {
    Ok(vec![
        descriptor(
            "csv_exporter",
            "1.0.0",
            "CSV Exporter",
            "Export data to CSV format",
            json!({
                "type": "object",
                "title": "CSV Export Settings",
                "properties": {
                    "delimiter": {
                        "type": "string",
                        "title": "Delimiter",
                        "description": "Character to separate fields",
                        "default": ",",
                        "enum": [",", ";", "\t", "|"],
                        "enumNames": ["Comma (,)", "Semicolon (;)", "Tab", "Pipe (|)"]
                    },
                    "include_headers": {"type": "boolean", "title": "Include Headers", "default": true},
                    "quote_all_fields": {"type": "boolean", "title": "Quote All Fields", "default": false}
                }
            }),
        )?,
        descriptor(
            "json_exporter",
            "1.0.0",
            "JSON Exporter",
            "Export data to JSON format",
            json!({
                "type": "object",
                "title": "JSON Export Settings",
                "properties": {
                    "indent": {
                        "type": "integer",
                        "title": "Indentation",
                        "description": "Number of spaces for indentation",
                        "default": 2,
                        "minimum": 0,
                        "maximum": 8
                    },
                    "compact": {
                        "type": "boolean",
                        "title": "Compact Output",
                        "description": "Remove whitespace for smaller files",
                        "default": false
                    }
                }
            }),
        )?,
    ])
}

/// Data validation and cleaning plugins.
pub fn processing_plugins() -> setdeck::Result<Vec<PluginDescriptor>> {
    Ok(vec![
        descriptor(
            "data_validator",
            "1.2.0",
            "Data Validator",
            "Validate data quality",
            json!({
                "type": "object",
                "title": "Validation Settings",
                "properties": {
                    "strict_mode": {
                        "type": "boolean",
                        "title": "Strict Mode",
                        "description": "Fail on any validation error",
                        "default": false
                    },
                    "max_errors": {
                        "type": "integer",
                        "title": "Maximum Errors",
                        "description": "Stop after this many errors (0 = unlimited)",
                        "default": 100,
                        "minimum": 0
                    },
                    "check_duplicates": {"type": "boolean", "title": "Check for Duplicates", "default": true}
                }
            }),
        )?,
        descriptor(
            "data_cleaner",
            "2.0.1",
            "Data Cleaner",
            "Clean and normalize data",
            json!({
                "type": "object",
                "title": "Cleaning Settings",
                "properties": {
                    "remove_nulls": {"type": "boolean", "title": "Remove Null Values", "default": true},
                    "trim_whitespace": {"type": "boolean", "title": "Trim Whitespace", "default": true},
                    "normalize_case": {
                        "type": "string",
                        "title": "Normalize Text Case",
                        "default": "none",
                        "enum": ["none", "lower", "upper", "title"],
                        "enumNames": ["No Change", "Lowercase", "UPPERCASE", "Title Case"]
                    }
                }
            }),
        )?,
    ])
}

/// Plugin registry with the `export` and `processing` categories.
pub fn plugin_registry(config_dir: &Path) -> setdeck::Result<PluginRegistry> {
    let mut registry = PluginRegistry::new(config_dir);
    registry.register_plugin_manager(
        "export",
        Arc::new(StaticPluginManager::new(export_plugins()?)?),
        "Export Tools",
    )?;
    registry.register_plugin_manager(
        "processing",
        Arc::new(StaticPluginManager::new(processing_plugins()?)?),
        "Data Processing",
    )?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use setdeck::FieldKind;

    use super::*;

    #[test]
    fn test_plugin_counts() {
        let registry = plugin_registry(Path::new("demo_configs")).unwrap();
        assert_eq!(registry.categories(), ["export", "processing"]);
        assert_eq!(registry.plugins_by_category("export").len(), 2);
        assert_eq!(registry.plugins_by_category("processing").len(), 2);
        assert_eq!(registry.total_plugins(), 4);
        assert_eq!(registry.categories_with_plugins().len(), 2);
    }

    #[test]
    fn test_config_schemas_parsed() {
        let registry = plugin_registry(Path::new("demo_configs")).unwrap();
        let csv = registry.plugin_config_schema("export", "csv_exporter").unwrap();
        assert_eq!(csv.name, "csv_exporter");
        assert_eq!(csv.title, "CSV Export Settings");
        let FieldKind::Enum(delimiter) = &csv.get_field("delimiter").unwrap().kind else {
            panic!("delimiter should be an enum");
        };
        assert_eq!(delimiter.label_for("\t"), Some("Tab"));

        let cleaner = registry.plugin("processing", "data_cleaner").unwrap();
        assert_eq!(cleaner.version, "2.0.1");
        assert_eq!(cleaner.config_schema.defaults()["normalize_case"], "none");
    }
}
