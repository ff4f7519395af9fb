//! Runtime support for generated row models.
//!
//! ## Crate layout
//! - `model`: the `TableModel` trait every generated type implements.
//! - `property`: typed column descriptors referenced by generated constants.
//! - `record`: the per-row value store behind generated accessors.
//! - `sync`: origin sync state codes written by generated mutators.
//! - `value`: stored column values and SQL default parsing.

pub mod model;
pub mod property;
pub mod record;
pub mod sync;
pub mod value;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        model::TableModel,
        property::{
            BlobProperty, BooleanProperty, IntegerProperty, LongProperty, Property, PropertyModel,
            PropertyValue, RealProperty, TextProperty,
        },
        record::Record,
        sync::RowSyncState,
        value::Value,
    };
}
