//! Domain model for the consumption tracker.
//!
//! # Responsibility
//! - Define the flat persisted records, one module per entity family.
//! - Keep serialized field names identical to the stored JSON shape
//!   (camelCase, enums by display name).
//!
//! # Invariants
//! - Every record carries a stable string id (see [`id`]); the stash record
//!   is the exception, keyed by the product it stocks.
//! - Cross-entity references are soft: ids of other records, cleared (not
//!   cascaded) when the target is deleted.

pub mod device;
pub mod entry;
pub mod id;
pub mod location;
pub mod product;
pub mod quantity;
pub mod stash;
pub mod theme;
pub mod tolerance;

/// Collection membership by identifier equality.
///
/// Store operations (update/remove) are parametrized only by this key.
pub trait Keyed {
    fn key(&self) -> &str;
}
