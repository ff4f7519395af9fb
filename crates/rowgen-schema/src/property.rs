use crate::naming::{self, ConstName};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// SqlType
///
/// Column storage type of a declared property. Each maps to exactly one
/// runtime property type and one Rust value type.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[remain::sorted]
pub enum SqlType {
    Blob,
    Boolean,
    Integer,
    Long,
    Real,
    Text,
}

impl SqlType {
    pub const ALL: [Self; 6] = [
        Self::Blob,
        Self::Boolean,
        Self::Integer,
        Self::Long,
        Self::Real,
        Self::Text,
    ];

    /// Runtime property type used for columns of this type.
    #[must_use]
    pub const fn property_type(self) -> &'static str {
        match self {
            Self::Blob => "BlobProperty",
            Self::Boolean => "BooleanProperty",
            Self::Integer => "IntegerProperty",
            Self::Long => "LongProperty",
            Self::Real => "RealProperty",
            Self::Text => "TextProperty",
        }
    }
}

///
/// PropertyDescriptor
///
/// A declared column: name, storage type and SQL constraint expression.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub sql_type: SqlType,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub constraint: String,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            constraint: String::new(),
        }
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    #[must_use]
    pub fn constant_name(&self) -> ConstName {
        naming::constant_name(&self.name)
    }

    #[must_use]
    pub fn getter_name(&self) -> String {
        naming::getter_name(&self.name)
    }

    #[must_use]
    pub fn setter_name(&self) -> String {
        naming::setter_name(&self.name)
    }
}
