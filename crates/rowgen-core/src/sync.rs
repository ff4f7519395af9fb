use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// RowSyncState
///
/// Sync status of a row relative to its remote origin, persisted as an
/// integer column. New rows start as `PendingOriginConfirmation` through the
/// column's SQL default; no mutator moves a row back into that state.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[repr(i32)]
pub enum RowSyncState {
    Idle = 0,

    #[default]
    PendingOriginConfirmation = 1,

    Updating = 2,
    Deleting = 3,
}

impl RowSyncState {
    pub const ALL: [Self; 4] = [
        Self::Idle,
        Self::PendingOriginConfirmation,
        Self::Updating,
        Self::Deleting,
    ];

    /// Persisted integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for RowSyncState {
    type Error = UnknownRowState;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|state| state.code() == code)
            .ok_or(UnknownRowState(code))
    }
}

impl From<RowSyncState> for i32 {
    fn from(state: RowSyncState) -> Self {
        state.code()
    }
}

///
/// UnknownRowState
///

#[derive(Debug, Eq, PartialEq, ThisError)]
#[error("unknown row sync state code {0}")]
pub struct UnknownRowState(pub i32);

///
/// TESTS
///
