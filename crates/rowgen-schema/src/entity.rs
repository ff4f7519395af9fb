use crate::{
    SpecError, naming,
    property::{PropertyDescriptor, SqlType},
    validate,
};
use serde::{Deserialize, Serialize};

///
/// EntitySpec
///
/// Declarative description of one generated model: its type name, backing
/// table, whether it participates in origin sync, and its declared columns
/// in order.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EntitySpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,

    #[serde(default)]
    pub syncable: bool,

    #[serde(default, rename = "property", skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDescriptor>,
}

impl EntitySpec {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            syncable: false,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    #[must_use]
    pub const fn syncable(mut self, syncable: bool) -> Self {
        self.syncable = syncable;
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Shorthand for `with_property` with a constraint expression.
    #[must_use]
    pub fn property(self, name: &str, sql_type: SqlType, constraint: &str) -> Self {
        self.with_property(PropertyDescriptor::new(name, sql_type).with_constraint(constraint))
    }

    /// Resolve the table name, falling back to the snake-cased entity name.
    #[must_use]
    pub fn table_name(&self) -> String {
        self.table
            .clone()
            .unwrap_or_else(|| naming::default_table_name(&self.name))
    }

    #[must_use]
    pub fn module_name(&self) -> String {
        naming::module_name(&self.name)
    }

    #[must_use]
    pub const fn property_count(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn validate(&self) -> Result<(), SpecError> {
        validate::validate_entity(self).map_err(|errors| SpecError::Invalid {
            entity: self.name.clone(),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_defaults_to_snake_name() {
        let spec = EntitySpec::new("TaskList");
        assert_eq!(spec.table_name(), "task_list");

        let spec = spec.with_table("lists");
        assert_eq!(spec.table_name(), "lists");
    }

    #[test]
    fn builder_keeps_declaration_order() {
        let spec = EntitySpec::new("Task")
            .syncable(true)
            .property("title", SqlType::Text, "NOT NULL")
            .property("priority", SqlType::Integer, "DEFAULT 0");

        let names: Vec<_> = spec.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["title", "priority"]);
        assert!(spec.syncable);
        assert_eq!(spec.property_count(), 2);
        assert!(spec.get_property("priority").is_some());
    }
}
