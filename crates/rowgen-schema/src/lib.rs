pub mod entity;
pub mod error;
pub mod naming;
pub mod property;
pub mod validate;

/// Maximum length for entity type names.
pub const MAX_ENTITY_NAME_LEN: usize = 64;

/// Maximum length for column names.
pub const MAX_COLUMN_NAME_LEN: usize = 64;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        entity::EntitySpec,
        err,
        error::ErrorList,
        naming::ConstName,
        property::{PropertyDescriptor, SqlType},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// SpecError
///
/// An entity spec the generator cannot satisfy. Raised before any code
/// is emitted for the entity.
///

#[derive(Debug, ThisError)]
pub enum SpecError {
    #[error("entity '{entity}' failed validation: {errors}")]
    Invalid {
        entity: String,
        errors: error::ErrorList,
    },
}
