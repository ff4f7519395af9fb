//! Name derivation shared by every emission site.
//!
//! Generated constants, accessors and module names are all derived here so a
//! column is spelled the same way wherever it is referenced.

use convert_case::{Case, Casing};
use derive_more::{Deref, Display};
use serde::Serialize;

/// Column backing the row id property every model carries.
pub const ROW_ID_COLUMN: &str = "_id";

/// Column recording the id assigned by the remote origin.
pub const ORIGIN_ID_COLUMN: &str = "origin_id";

/// Column recording the row's sync state.
pub const ROW_STATUS_COLUMN: &str = "row_status";

// sync methods
pub const ORIGIN_ID_GETTER: &str = "origin_id";
pub const CONFIRM_ORIGIN_INSERTION: &str = "confirm_origin_insertion";
pub const ROW_STATE_GETTER: &str = "row_state";
pub const MARK_UPDATING: &str = "mark_updating";
pub const MARK_DELETING: &str = "mark_deleting";
pub const MARK_IDLE: &str = "mark_idle";

/// Methods added to syncable models, in emission order.
pub const SYNC_METHODS: [&str; 6] = [
    ORIGIN_ID_GETTER,
    CONFIRM_ORIGIN_INSERTION,
    ROW_STATE_GETTER,
    MARK_UPDATING,
    MARK_DELETING,
    MARK_IDLE,
];

// runtime types imported by every generated unit
pub const RECORD_TYPE: &str = "Record";
pub const PROPERTY_MODEL_TYPE: &str = "PropertyModel";
pub const TABLE_MODEL_TYPE: &str = "TableModel";

///
/// ConstName
///
/// Name of an associated constant on a generated model (`ROW_STATUS`).
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ConstName(String);

impl ConstName {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ConstName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Constant name for a column: `row_status` -> `ROW_STATUS`.
#[must_use]
pub fn constant_name(column: &str) -> ConstName {
    ConstName(column.trim_matches('_').to_case(Case::Constant))
}

/// Getter name for a column: `dueDate` -> `due_date`.
#[must_use]
pub fn getter_name(column: &str) -> String {
    column.trim_matches('_').to_case(Case::Snake)
}

/// Setter name for a column: `due_date` -> `set_due_date`.
#[must_use]
pub fn setter_name(column: &str) -> String {
    format!("set_{}", getter_name(column))
}

/// Module (and output file stem) for an entity: `TaskList` -> `task_list`.
#[must_use]
pub fn module_name(entity: &str) -> String {
    entity.to_case(Case::Snake)
}

/// Default table name for an entity when none is given.
#[must_use]
pub fn default_table_name(entity: &str) -> String {
    module_name(entity)
}

///
/// TESTS
///
