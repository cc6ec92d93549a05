//! Raw slot storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Read/write/delete opaque string values keyed by slot name.
//! - Keep SQL details inside this boundary.
//!
//! # Invariants
//! - Writes are last-writer-wins on the slot row; there is exactly one
//!   writer per database in this design.

use crate::store::StoreResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Slot names, one per persisted entity kind.
pub mod slots {
    pub const PRODUCTS: &str = "products";
    pub const LOG_ENTRIES: &str = "log_entries";
    pub const DEVICES: &str = "devices";
    pub const TOLERANCE_BREAKS: &str = "tolerance_breaks";
    pub const SURGERIES: &str = "surgeries";
    pub const PHARMACIES: &str = "pharmacies";
    pub const STOCKED_ITEMS: &str = "stocked_items";
    pub const THEME: &str = "theme";
}

/// Persistent storage facility holding one opaque value per named slot.
pub trait SlotStorage {
    fn read_slot(&self, slot: &str) -> StoreResult<Option<String>>;
    fn write_slot(&self, slot: &str, value: &str) -> StoreResult<()>;
    fn delete_slot(&self, slot: &str) -> StoreResult<()>;
}

/// Slot storage over the migrated `slots` table.
///
/// Copyable so every entity store can carry its own handle to the one
/// underlying connection.
#[derive(Clone, Copy)]
pub struct SqliteSlotStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotStorage for SqliteSlotStorage<'_> {
    fn read_slot(&self, slot: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE slot = ?1;",
                [slot],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, slot: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO slots (slot, value)
             VALUES (?1, ?2)
             ON CONFLICT(slot) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![slot, value],
        )?;
        Ok(())
    }

    fn delete_slot(&self, slot: &str) -> StoreResult<()> {
        self.conn.execute("DELETE FROM slots WHERE slot = ?1;", [slot])?;
        Ok(())
    }
}
