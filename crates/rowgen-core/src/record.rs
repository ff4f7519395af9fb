use crate::{
    property::{Property, PropertyModel, PropertyValue},
    value::Value,
};
use std::collections::BTreeMap;

///
/// Record
///
/// Column values of one row, keyed by column name.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    values: BTreeMap<&'static str, Value>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A record holding each property's SQL `DEFAULT` literal.
    #[must_use]
    pub fn with_defaults(properties: &[&dyn PropertyModel]) -> Self {
        let values = properties
            .iter()
            .filter_map(|p| p.default_value().map(|v| (p.name(), v)))
            .collect();

        Self { values }
    }

    #[must_use]
    pub fn get<T: PropertyValue>(&self, property: &Property<T>) -> Option<T> {
        self.values.get(property.name()).and_then(T::from_value)
    }

    /// Stored value, else the literal from the property's SQL `DEFAULT`
    /// clause, else `T::default()`.
    #[must_use]
    pub fn get_or_declared<T: PropertyValue + Default>(&self, property: &Property<T>) -> T {
        self.get(property)
            .or_else(|| property.default_value().as_ref().and_then(T::from_value))
            .unwrap_or_default()
    }

    pub fn set<T: PropertyValue>(&mut self, property: &Property<T>, value: T) {
        self.values.insert(property.name(), value.into_value());
    }

    /// Remove a value, returning what was stored.
    pub fn clear<T>(&mut self, property: &Property<T>) -> Option<Value> {
        self.values.remove(property.name())
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    #[must_use]
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }
}
