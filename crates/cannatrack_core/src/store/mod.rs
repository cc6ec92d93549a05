//! Local entity store: slot-keyed persistence for whole collections.
//!
//! # Responsibility
//! - Define the raw slot storage contract and its SQLite implementation.
//! - Provide the generic collection store with seed fallback and
//!   full-rewrite persistence.
//!
//! # Invariants
//! - One slot per entity kind; a slot's value is always the JSON
//!   serialization of the full current collection (plain string for the
//!   theme slot).
//! - Malformed persisted data is treated as absence: logged, replaced by
//!   the seed, never surfaced to callers as an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod entity_store;
mod prefs;
mod slot;

pub use entity_store::{EntityStore, SeedPersistence};
pub use prefs::{load_theme, save_theme};
pub use slot::{slots, SlotStorage, SqliteSlotStorage};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from slot storage operations.
///
/// Deserialization failure is intentionally absent: corrupt slot data is
/// recovered with the seed, not reported.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// A collection could not be serialized for writing.
    Serialize { slot: &'static str, message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize { slot, message } => {
                write!(f, "cannot serialize slot `{slot}`: {message}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize { .. } => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
