//! Schema registry.
//!
//! The registry is built once at startup, then frozen behind an `Arc` and
//! shared read-only with every consumer (settings router, homepage, console
//! summary). Nothing mutates it after serving begins.

use std::collections::HashSet;

use log::info;

use crate::{
    error::{Error, Result},
    group::SchemaGroup,
    schema::Schema,
};

/// A top-level registry entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEntry {
    Schema(Schema),
    Group(SchemaGroup),
}

impl RegistryEntry {
    /// Top-level name.
    pub fn name(&self) -> &str {
        match self {
            RegistryEntry::Schema(s) => &s.name,
            RegistryEntry::Group(g) => &g.name,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            RegistryEntry::Schema(s) => &s.title,
            RegistryEntry::Group(g) => &g.title,
        }
    }

    /// Form ids contributed by this entry.
    pub fn form_ids(&self) -> Vec<String> {
        match self {
            RegistryEntry::Schema(s) => vec![s.name.clone()],
            RegistryEntry::Group(g) => g.member_ids().collect(),
        }
    }

    pub fn as_group(&self) -> Option<&SchemaGroup> {
        match self {
            RegistryEntry::Group(g) => Some(g),
            RegistryEntry::Schema(_) => None,
        }
    }
}

impl From<Schema> for RegistryEntry {
    fn from(schema: Schema) -> Self {
        RegistryEntry::Schema(schema)
    }
}

impl From<SchemaGroup> for RegistryEntry {
    fn from(group: SchemaGroup) -> Self {
        RegistryEntry::Group(group)
    }
}

/// A schema located by form id.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSchema<'a> {
    pub schema: &'a Schema,
    /// Owning group for group members.
    pub group: Option<&'a SchemaGroup>,
}

/// Ordered collection of schemas and schema groups.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: Vec<RegistryEntry>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and add a schema or group.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Schema`] when the definition is invalid and
    /// [`Error::Duplicate`] when its name or any member form id collides
    /// with an existing top-level name or form id.
    pub fn register(&mut self, entry: impl Into<RegistryEntry>) -> Result<()> {
        let entry = entry.into();
        match &entry {
            RegistryEntry::Schema(s) => s.validate()?,
            RegistryEntry::Group(g) => g.validate()?,
        }

        let taken: HashSet<String> = self
            .entries
            .iter()
            .flat_map(|e| {
                let mut names = e.form_ids();
                names.push(e.name().to_string());
                names
            })
            .collect();

        if taken.contains(entry.name()) {
            return Err(Error::Duplicate(entry.name().to_string()));
        }
        if let RegistryEntry::Group(g) = &entry
            && let Some(clash) = g.member_ids().find(|id| taken.contains(id))
        {
            return Err(Error::Duplicate(clash));
        }

        match &entry {
            RegistryEntry::Schema(s) => info!("registered schema `{}`", s.name),
            RegistryEntry::Group(g) => {
                info!("registered group `{}` ({} schemas)", g.name, g.len())
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Look up a top-level entry by name.
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Resolve a form id to a top-level schema or a group member.
    pub fn resolve(&self, id: &str) -> Option<ResolvedSchema<'_>> {
        self.entries.iter().find_map(|e| match e {
            RegistryEntry::Schema(s) if s.name == id => Some(ResolvedSchema {
                schema: s,
                group: None,
            }),
            RegistryEntry::Group(g) => g.resolve(id).map(|schema| ResolvedSchema {
                schema,
                group: Some(g),
            }),
            RegistryEntry::Schema(_) => None,
        })
    }

    /// Like [`resolve`](Self::resolve) but returns an error for unknown ids.
    pub fn require(&self, id: &str) -> Result<ResolvedSchema<'_>> {
        self.resolve(id)
            .ok_or_else(|| Error::UnknownSchema(id.to_string()))
    }

    /// Top-level names in registration order.
    pub fn list_schemas(&self) -> Vec<&str> {
        self.entries.iter().map(RegistryEntry::name).collect()
    }

    /// Every form id, groups expanded in place.
    pub fn schema_ids(&self) -> Vec<String> {
        self.entries.iter().flat_map(RegistryEntry::form_ids).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    fn notifications() -> Schema {
        Schema::new("notifications", "Notification Settings")
            .field(Field::boolean("email_enabled", "Email Notifications", true))
    }

    fn database() -> SchemaGroup {
        SchemaGroup::new("database", "Database Settings")
            .default_open(true)
            .schema(Schema::new("connection", "Connection Settings"))
            .schema(Schema::new("backup", "Backup Settings"))
    }

    #[test]
    fn test_register_and_enumerate() {
        let mut registry = SchemaRegistry::new();
        registry.register(notifications()).unwrap();
        registry.register(database()).unwrap();

        assert_eq!(registry.list_schemas(), ["notifications", "database"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.schema_ids(),
            ["notifications", "database_connection", "database_backup"]
        );
        assert!(matches!(
            registry.get("database"),
            Some(RegistryEntry::Group(g)) if g.len() == 2
        ));

        let member = registry.resolve("database_backup").unwrap();
        assert_eq!(member.schema.name, "backup");
        assert_eq!(member.group.map(|g| g.name.as_str()), Some("database"));

        let top = registry.resolve("notifications").unwrap();
        assert!(top.group.is_none());
        assert!(registry.resolve("database").is_none());
        assert!(matches!(
            registry.require("missing"),
            Err(Error::UnknownSchema(_))
        ));
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut registry = SchemaRegistry::new();
        registry.register(notifications()).unwrap();
        assert!(matches!(
            registry.register(notifications()),
            Err(Error::Duplicate(name)) if name == "notifications"
        ));

        registry.register(database()).unwrap();
        let shadowing = Schema::new("database_backup", "Shadow");
        assert!(matches!(
            registry.register(shadowing),
            Err(Error::Duplicate(_))
        ));

        // a group whose member id collides with an existing schema
        let mut registry = SchemaRegistry::new();
        registry
            .register(Schema::new("api_authentication", "Flat"))
            .unwrap();
        let api = SchemaGroup::new("api", "API").schema(Schema::new("authentication", "Auth"));
        assert!(matches!(
            registry.register(api),
            Err(Error::Duplicate(id)) if id == "api_authentication"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let mut registry = SchemaRegistry::new();
        let bad = Schema::new("bad", "Bad").field(Field::integer("n", "N", 50).range(1, 10));
        assert!(matches!(registry.register(bad), Err(Error::Schema(_))));
        assert!(registry.is_empty());
    }
}
