//! Startup registration sequence.
//!
//! Builds the schema registry, the plugin registry and the settings router
//! in a fixed order, then prints a summary of what was registered.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use colored::Colorize;
use log::info;
use setdeck::{
    PluginRegistry, RegistryEntry, SchemaRegistry,
    config::{AppConfigOptions, DEFAULT_THEME, ThemeSupport, app_config_schema},
    web::{SettingsConfig, SettingsRouter, configure_settings},
};

use crate::{catalog, plugins};

/// Title of the demo application.
pub const APP_TITLE: &str = "Setdeck Settings Demo";

/// Options that vary between runs.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub host: String,
    pub port: u16,
    pub config_dir: PathBuf,
    pub themes: ThemeSupport,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5010,
            config_dir: PathBuf::from("demo_configs"),
            themes: setdeck::config::detect_theme_support(),
        }
    }
}

/// Everything the server needs, built once at startup.
#[derive(Debug, Clone)]
pub struct DemoApp {
    pub registry: Arc<SchemaRegistry>,
    pub plugins: Arc<PluginRegistry>,
    pub settings: SettingsRouter,
    pub config_dir: PathBuf,
}

impl DemoApp {
    pub fn build(options: &DemoOptions) -> anyhow::Result<Self> {
        let mut registry = SchemaRegistry::new();

        let app_options = AppConfigOptions {
            app_title: APP_TITLE.to_string(),
            server_host: options.host.clone(),
            server_port: options.port,
            default_theme: DEFAULT_THEME.to_string(),
        };
        registry
            .register(app_config_schema(&app_options, &options.themes))
            .context("failed to register application settings")?;
        if options.themes.is_available() {
            info!("application settings registered with theme support");
        } else {
            info!("application settings registered without theme support");
        }

        registry
            .register(catalog::notifications())
            .context("failed to register notifications schema")?;
        registry
            .register(catalog::database_group())
            .context("failed to register database group")?;
        registry
            .register(catalog::api_group())
            .context("failed to register api group")?;

        let plugins = plugins::plugin_registry(&options.config_dir)
            .context("failed to set up plugin registry")?;
        info!(
            "registered {} plugins in {}",
            plugins.total_plugins(),
            plugins.categories_with_plugins().join(", ")
        );
        let plugins = Arc::new(plugins);

        let registry = Arc::new(registry);
        let settings = configure_settings(
            registry.clone(),
            SettingsConfig::new(&options.config_dir)
                .plugin_registry(plugins.clone())
                .app_title(APP_TITLE),
        )
        .context("failed to configure settings routes")?;

        Ok(Self {
            registry,
            plugins,
            settings,
            config_dir: options.config_dir.clone(),
        })
    }

    /// Print the registered schemas and plugins.
    pub fn print_summary(&self) {
        let rule = "=".repeat(70);
        println!("\n{rule}");
        println!("{}", "Demo App Ready!".green().bold());
        println!("{rule}");

        println!("\n{}", "Registered Settings:".bold());
        for entry in self.registry.iter() {
            match entry {
                RegistryEntry::Schema(schema) => println!("  - {}", schema.title),
                RegistryEntry::Group(group) => {
                    println!("\n  {} {}", group.title.cyan(), "(Group)".dimmed());
                    for member in &group.schemas {
                        println!("     └─ {}", member.title);
                    }
                }
            }
        }

        let categories = self.plugins.categories_with_plugins();
        if !categories.is_empty() {
            println!("\n{}", "Registered Plugins:".bold());
            for category in categories {
                let label = self.plugins.display_name(category).unwrap_or(category);
                println!("\n  Category: {}", label.cyan());
                for plugin in self.plugins.plugins_by_category(category) {
                    let version = if plugin.version.is_empty() {
                        "1.0"
                    } else {
                        plugin.version.as_str()
                    };
                    println!("    • {} (v{version})", plugin.title);
                }
            }
        }

        println!(
            "\nConfig directory: {}",
            self.config_dir.display().to_string().yellow()
        );
        println!("{rule}\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(dir: &std::path::Path, themes: ThemeSupport) -> DemoOptions {
        DemoOptions {
            config_dir: dir.to_path_buf(),
            themes,
            ..Default::default()
        }
    }

    #[test]
    fn test_registration_order() {
        let dir = tempfile::tempdir().unwrap();
        let app = DemoApp::build(&options(dir.path(), ThemeSupport::Available(&["light", "dark"]))).unwrap();

        assert_eq!(
            app.registry.list_schemas(),
            ["general", "notifications", "database", "api"]
        );
        for name in app.registry.list_schemas() {
            assert!(app.registry.get(name).is_some(), "{name}");
        }

        let db = app.registry.get("database").and_then(RegistryEntry::as_group).unwrap();
        assert_eq!(db.len(), 3);
        assert!(db.default_open);
        let api = app.registry.get("api").and_then(RegistryEntry::as_group).unwrap();
        assert_eq!(api.len(), 2);
        assert!(!api.default_open);

        assert_eq!(app.registry.schema_ids().len(), 7);
        assert!(app.registry.resolve("api_rate_limiting").is_some());
    }

    #[test]
    fn test_plugins_registered() {
        let dir = tempfile::tempdir().unwrap();
        let app = DemoApp::build(&options(dir.path(), ThemeSupport::Unavailable)).unwrap();
        assert_eq!(app.plugins.plugins_by_category("export").len(), 2);
        assert_eq!(app.plugins.plugins_by_category("processing").len(), 2);
        assert_eq!(app.plugins.display_name("export"), Some("Export Tools"));
        assert_eq!(app.plugins.config_dir(), dir.path());
    }

    #[test]
    fn test_theme_field_follows_support() {
        let dir = tempfile::tempdir().unwrap();

        let without = DemoApp::build(&options(dir.path(), ThemeSupport::Unavailable)).unwrap();
        let general = without.registry.resolve("general").unwrap().schema;
        assert!(general.get_field("theme").is_none());

        let with = DemoApp::build(&options(dir.path(), ThemeSupport::Available(&["light", "dark"]))).unwrap();
        let general = with.registry.resolve("general").unwrap().schema;
        assert!(general.get_field("theme").is_some());
        assert_eq!(general.defaults()["app_title"], APP_TITLE);
    }

    #[test]
    fn test_default_build_theme_field() {
        let dir = tempfile::tempdir().unwrap();
        let app = DemoApp::build(&DemoOptions {
            config_dir: dir.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap();
        let general = app.registry.resolve("general").unwrap().schema;
        // the `themes` feature of this crate decides whether the catalog is linked in
        assert_eq!(general.get_field("theme").is_some(), cfg!(feature = "themes"));
        assert_eq!(
            DemoOptions::default().themes.is_available(),
            cfg!(feature = "themes")
        );
    }
}
