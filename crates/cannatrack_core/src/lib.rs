//! Core domain logic for the cannatrack consumption tracker.
//! This crate is the single source of truth for persistence and
//! state-synchronization behavior.

pub mod db;
pub mod logging;
pub mod model;
pub mod seed;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::device::{Device, DeviceDraft, DeviceType};
pub use model::entry::{EntryDraft, LogEntry};
pub use model::location::{LocationDraft, Pharmacy, Surgery};
pub use model::product::{Product, StrainType, TerpeneProfile};
pub use model::stash::StockedItem;
pub use model::theme::Theme;
pub use model::tolerance::ToleranceBreak;
pub use service::tracker::{CatalogOutcome, StashOutcome, Tracker};
pub use store::{
    slots, EntityStore, SeedPersistence, SlotStorage, SqliteSlotStorage, StoreError, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
