//! Plugin registry.
//!
//! Plugins are grouped by category; each category is served by exactly one
//! [`PluginManager`]. The registry only needs a manager to list its plugins
//! and hand out their configuration schemas. Plugin configuration is
//! persisted under `{config_dir}/plugins/{category}_{name}.json`.

use std::{collections::HashSet, path::PathBuf, sync::Arc};

use log::info;
use serde_json::{Map, Value};

use crate::{
    error::{Error, Result, SchemaError},
    schema::{Schema, is_valid_name},
    store::ConfigStore,
};

/// Metadata and configuration schema of one plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginDescriptor {
    /// Unique name within its manager.
    pub name: String,
    pub version: String,
    pub title: String,
    pub description: String,
    /// Schema of the plugin's settings form.
    pub config_schema: Schema,
}

/// Source of plugins for one category.
pub trait PluginManager: Send + Sync {
    /// All plugins this manager knows about.
    fn discover_plugins(&self) -> Vec<PluginDescriptor>;

    /// Configuration schema of the named plugin.
    fn plugin_config_schema(&self, name: &str) -> Option<Schema> {
        self.discover_plugins()
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.config_schema)
    }
}

/// Manager over a fixed list of descriptors.
#[derive(Debug, Clone)]
pub struct StaticPluginManager {
    plugins: Vec<PluginDescriptor>,
}

impl StaticPluginManager {
    /// # Errors
    ///
    /// Fails when a name is not a safe identifier, two descriptors share a
    /// name or a config schema is invalid.
    pub fn new(plugins: Vec<PluginDescriptor>) -> Result<Self> {
        let mut names = HashSet::new();
        for plugin in &plugins {
            if !is_valid_name(&plugin.name) {
                return Err(SchemaError::invalid(&plugin.name, "invalid plugin name").into());
            }
            if !names.insert(plugin.name.as_str()) {
                return Err(Error::Duplicate(plugin.name.clone()));
            }
            plugin.config_schema.validate()?;
        }
        Ok(Self { plugins })
    }
}

impl PluginManager for StaticPluginManager {
    fn discover_plugins(&self) -> Vec<PluginDescriptor> {
        self.plugins.clone()
    }

    fn plugin_config_schema(&self, name: &str) -> Option<Schema> {
        self.plugins
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.config_schema.clone())
    }
}

struct CategoryEntry {
    category: String,
    display_name: String,
    manager: Arc<dyn PluginManager>,
}

/// Category-keyed registry of plugin managers.
pub struct PluginRegistry {
    config_dir: PathBuf,
    store: ConfigStore,
    categories: Vec<CategoryEntry>,
}

impl PluginRegistry {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        Self {
            store: ConfigStore::new(config_dir.join("plugins")),
            config_dir,
            categories: Vec::new(),
        }
    }

    pub fn config_dir(&self) -> &std::path::Path {
        &self.config_dir
    }

    /// Register the manager for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duplicate`] when the category already has a manager.
    pub fn register_plugin_manager(
        &mut self,
        category: impl Into<String>,
        manager: Arc<dyn PluginManager>,
        display_name: impl Into<String>,
    ) -> Result<()> {
        let category = category.into();
        if !is_valid_name(&category) {
            return Err(SchemaError::invalid(&category, "invalid plugin category name").into());
        }
        if self.entry(&category).is_some() {
            return Err(Error::Duplicate(category));
        }

        // `{category}_{name}` must stay unique across categories
        let mut taken: HashSet<String> = self
            .categories
            .iter()
            .flat_map(|c| {
                c.manager
                    .discover_plugins()
                    .into_iter()
                    .map(move |p| Self::config_id(&c.category, &p.name))
            })
            .collect();
        let plugins = manager.discover_plugins();
        for plugin in &plugins {
            if !is_valid_name(&plugin.name) {
                return Err(SchemaError::invalid(&plugin.name, "invalid plugin name").into());
            }
            let id = Self::config_id(&category, &plugin.name);
            if !taken.insert(id.clone()) {
                return Err(Error::Duplicate(id));
            }
        }

        info!(
            "registered plugin category `{category}` with {} plugins",
            plugins.len()
        );
        self.categories.push(CategoryEntry {
            category,
            display_name: display_name.into(),
            manager,
        });
        Ok(())
    }

    fn entry(&self, category: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// All registered categories in registration order.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.category.as_str()).collect()
    }

    /// Categories whose manager currently reports at least one plugin.
    pub fn categories_with_plugins(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| !c.manager.discover_plugins().is_empty())
            .map(|c| c.category.as_str())
            .collect()
    }

    pub fn display_name(&self, category: &str) -> Option<&str> {
        self.entry(category).map(|c| c.display_name.as_str())
    }

    /// Plugins of `category`; empty for unknown categories.
    pub fn plugins_by_category(&self, category: &str) -> Vec<PluginDescriptor> {
        self.entry(category)
            .map(|c| c.manager.discover_plugins())
            .unwrap_or_default()
    }

    /// Look up one plugin.
    pub fn plugin(&self, category: &str, name: &str) -> Result<PluginDescriptor> {
        let entry = self
            .entry(category)
            .ok_or_else(|| Error::UnknownCategory(category.to_string()))?;
        entry
            .manager
            .discover_plugins()
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownPlugin {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    /// Configuration schema of one plugin, as reported by its manager.
    pub fn plugin_config_schema(&self, category: &str, name: &str) -> Result<Schema> {
        let entry = self
            .entry(category)
            .ok_or_else(|| Error::UnknownCategory(category.to_string()))?;
        entry
            .manager
            .plugin_config_schema(name)
            .ok_or_else(|| Error::UnknownPlugin {
                category: category.to_string(),
                name: name.to_string(),
            })
    }

    /// Sum of plugin counts over all categories.
    pub fn total_plugins(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.manager.discover_plugins().len())
            .sum()
    }

    /// Persistence key of a plugin's configuration.
    pub fn config_id(category: &str, name: &str) -> String {
        format!("{category}_{name}")
    }

    /// Store holding plugin configuration.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Saved configuration of a plugin over its schema defaults.
    pub async fn load_plugin_config(&self, category: &str, name: &str) -> Result<Map<String, Value>> {
        let schema = self.plugin_config_schema(category, name)?;
        self.store
            .load(&Self::config_id(category, name), &schema)
            .await
    }

    /// Validate and persist a plugin's configuration.
    pub async fn save_plugin_config(
        &self,
        category: &str,
        name: &str,
        values: &Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        let schema = self.plugin_config_schema(category, name)?;
        self.store
            .save(&Self::config_id(category, name), &schema, values)
            .await
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("config_dir", &self.config_dir)
            .field("categories", &self.categories())
            .finish()
    }
}
