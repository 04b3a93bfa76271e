//! Collapsible groups of related schemas.

use std::collections::HashSet;

use crate::{error::SchemaError, schema::Schema};

/// A named collection of schemas shown as one collapsible sidebar section.
///
/// Members are addressed by the form id `"{group}_{member}"`, which is also
/// the name of their persisted config file.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaGroup {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    /// Whether the section starts expanded.
    pub default_open: bool,
    /// Member schemas in display order.
    pub schemas: Vec<Schema>,
}

impl SchemaGroup {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: None,
            default_open: false,
            schemas: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    /// Append a member schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Number of member schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Look up a member by its own name.
    pub fn get(&self, member: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == member)
    }

    /// Form id of a member.
    pub fn member_id(&self, member: &str) -> String {
        format!("{}_{}", self.name, member)
    }

    /// Resolve a form id of the form `"{group}_{member}"`.
    pub fn resolve(&self, id: &str) -> Option<&Schema> {
        id.strip_prefix(self.name.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|member| self.get(member))
    }

    /// Form ids of all members, in order.
    pub fn member_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.schemas.iter().map(|s| self.member_id(&s.name))
    }

    /// Validate the group name and every member.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if !crate::schema::is_valid_name(&self.name) {
            return Err(SchemaError::invalid(&self.name, "invalid group name"));
        }
        let mut names = HashSet::new();
        for schema in &self.schemas {
            if !names.insert(schema.name.as_str()) {
                return Err(SchemaError::invalid(
                    &self.name,
                    format!("duplicate member `{}`", schema.name),
                ));
            }
            schema.validate()?;
        }
        Ok(())
    }
}
