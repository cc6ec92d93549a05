//! Application state orchestrator.
//!
//! # Responsibility
//! - Own the eight slot-backed stores and expose every user-facing
//!   operation over them.
//! - Enforce the cross-entity rules the stores themselves do not know
//!   about: clearing soft references on delete, single active tolerance
//!   break, stash upsert-or-delete.
//!
//! # Invariants
//! - Deleting a device/surgery/pharmacy never deletes dependent log
//!   entries; it only clears their reference field.
//! - Update/delete on an unknown id is a silent no-op, mirrored to the
//!   caller as a `false`/`Ignored` outcome rather than an error.
//! - At most one tolerance break is active after any operation.

use crate::model::device::{Device, DeviceDraft};
use crate::model::entry::{EntryDraft, LogEntry};
use crate::model::id::generate_id;
use crate::model::location::{LocationDraft, Pharmacy, Surgery};
use crate::model::product::Product;
use crate::model::quantity::parse_quantity;
use crate::model::stash::StockedItem;
use crate::model::theme::Theme;
use crate::model::tolerance::ToleranceBreak;
use crate::model::Keyed;
use crate::seed;
use crate::store::{
    load_theme, save_theme, slots, EntityStore, SeedPersistence, SqliteSlotStorage, StoreResult,
};
use log::info;
use rusqlite::Connection;
use std::time::{SystemTime, UNIX_EPOCH};

type Store<'conn, T> = EntityStore<SqliteSlotStorage<'conn>, T>;

/// Result of a catalogue save: the id either matched an existing product or
/// it did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOutcome {
    Added,
    Updated,
}

/// Result of a stash upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StashOutcome {
    Added,
    Updated,
    /// Blank/zero quantity removed an existing record.
    Removed,
    /// Blank/zero quantity with no existing record.
    Ignored,
}

/// All application state, loaded once and mutated synchronously.
pub struct Tracker<'conn> {
    storage: SqliteSlotStorage<'conn>,
    products: Store<'conn, Product>,
    entries: Store<'conn, LogEntry>,
    devices: Store<'conn, Device>,
    breaks: Store<'conn, ToleranceBreak>,
    surgeries: Store<'conn, Surgery>,
    pharmacies: Store<'conn, Pharmacy>,
    stash: Store<'conn, StockedItem>,
    theme: Theme,
}

impl<'conn> Tracker<'conn> {
    /// Loads every store from the migrated database, seeding the catalogue
    /// slots on first run.
    pub fn open(conn: &'conn Connection) -> StoreResult<Self> {
        let storage = SqliteSlotStorage::new(conn);

        let products = EntityStore::open(
            storage,
            slots::PRODUCTS,
            seed::initial_products(),
            SeedPersistence::PersistWhenAbsent,
        )?;
        let surgeries = EntityStore::open(
            storage,
            slots::SURGERIES,
            seed::initial_surgeries(),
            SeedPersistence::PersistWhenAbsent,
        )?;
        let pharmacies = EntityStore::open(
            storage,
            slots::PHARMACIES,
            seed::initial_pharmacies(),
            SeedPersistence::PersistWhenAbsent,
        )?;
        let entries = EntityStore::open(
            storage,
            slots::LOG_ENTRIES,
            Vec::new(),
            SeedPersistence::InMemoryOnly,
        )?;
        let devices = EntityStore::open(
            storage,
            slots::DEVICES,
            Vec::new(),
            SeedPersistence::InMemoryOnly,
        )?;
        let breaks = EntityStore::open(
            storage,
            slots::TOLERANCE_BREAKS,
            Vec::new(),
            SeedPersistence::InMemoryOnly,
        )?;
        let stash = EntityStore::open(
            storage,
            slots::STOCKED_ITEMS,
            Vec::new(),
            SeedPersistence::InMemoryOnly,
        )?;
        let theme = load_theme(&storage)?;

        Ok(Self {
            storage,
            products,
            entries,
            devices,
            breaks,
            surgeries,
            pharmacies,
            stash,
            theme,
        })
    }

    // Products

    pub fn products(&self) -> &[Product] {
        self.products.items()
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Saves a product: replaces the catalogue row when the id already
    /// exists, otherwise adds it to the front.
    pub fn add_or_update_product(&mut self, product: Product) -> StoreResult<CatalogOutcome> {
        let outcome = if self.products.update(product.clone())? {
            CatalogOutcome::Updated
        } else {
            self.products.prepend(product)?;
            CatalogOutcome::Added
        };
        info!(
            "event=product_save module=tracker status=ok outcome={:?}",
            outcome
        );
        Ok(outcome)
    }

    // Log entries

    pub fn entries(&self) -> &[LogEntry] {
        self.entries.items()
    }

    /// Records a session with a freshly generated id; newest entries sit at
    /// the front of the collection.
    pub fn add_entry(&mut self, draft: EntryDraft) -> StoreResult<String> {
        let entry = LogEntry {
            id: generate_id(),
            product_id: draft.product_id,
            date: draft.date,
            rating: draft.rating,
            notes: draft.notes,
            dosage: draft.dosage,
            device_id: draft.device_id,
            surgery_id: draft.surgery_id,
            pharmacy_id: draft.pharmacy_id,
        };
        let id = entry.id.clone();
        self.entries.prepend(entry)?;
        Ok(id)
    }

    pub fn delete_entry(&mut self, id: &str) -> StoreResult<bool> {
        self.entries.remove(id)
    }

    /// Latest entries by session date, newest first, capped at `limit`.
    ///
    /// ISO-8601 date strings sort chronologically as text; the generated id
    /// breaks ties between same-day sessions.
    pub fn recent_entries(&self, limit: usize) -> Vec<LogEntry> {
        let mut sorted: Vec<LogEntry> = self.entries.items().to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        sorted.truncate(limit);
        sorted
    }

    // Devices

    pub fn devices(&self) -> &[Device] {
        self.devices.items()
    }

    pub fn add_device(&mut self, draft: DeviceDraft) -> StoreResult<String> {
        let device = Device {
            id: generate_id(),
            name: draft.name,
            brand: draft.brand,
            kind: draft.kind,
            purchase_date: draft.purchase_date,
            notes: draft.notes,
        };
        let id = device.id.clone();
        self.devices.append(device)?;
        Ok(id)
    }

    pub fn update_device(&mut self, device: Device) -> StoreResult<bool> {
        self.devices.update(device)
    }

    /// Removes a device and clears it from every log entry that used it.
    pub fn delete_device(&mut self, id: &str) -> StoreResult<bool> {
        let removed = self.devices.remove(id)?;
        self.entries.rewrite(|entry| {
            if entry.device_id.as_deref() == Some(id) {
                entry.device_id = None;
                true
            } else {
                false
            }
        })?;
        Ok(removed)
    }

    // Surgeries

    pub fn surgeries(&self) -> &[Surgery] {
        self.surgeries.items()
    }

    pub fn add_surgery(&mut self, draft: LocationDraft) -> StoreResult<String> {
        let surgery = Surgery {
            id: generate_id(),
            name: draft.name,
            address: draft.address,
            notes: draft.notes,
        };
        let id = surgery.id.clone();
        self.surgeries.append(surgery)?;
        Ok(id)
    }

    pub fn update_surgery(&mut self, surgery: Surgery) -> StoreResult<bool> {
        self.surgeries.update(surgery)
    }

    /// Removes a surgery and clears it from every log entry that cited it.
    pub fn delete_surgery(&mut self, id: &str) -> StoreResult<bool> {
        let removed = self.surgeries.remove(id)?;
        self.entries.rewrite(|entry| {
            if entry.surgery_id.as_deref() == Some(id) {
                entry.surgery_id = None;
                true
            } else {
                false
            }
        })?;
        Ok(removed)
    }

    // Pharmacies

    pub fn pharmacies(&self) -> &[Pharmacy] {
        self.pharmacies.items()
    }

    pub fn add_pharmacy(&mut self, draft: LocationDraft) -> StoreResult<String> {
        let pharmacy = Pharmacy {
            id: generate_id(),
            name: draft.name,
            address: draft.address,
            notes: draft.notes,
        };
        let id = pharmacy.id.clone();
        self.pharmacies.append(pharmacy)?;
        Ok(id)
    }

    pub fn update_pharmacy(&mut self, pharmacy: Pharmacy) -> StoreResult<bool> {
        self.pharmacies.update(pharmacy)
    }

    /// Removes a pharmacy and clears it from every log entry that cited it.
    pub fn delete_pharmacy(&mut self, id: &str) -> StoreResult<bool> {
        let removed = self.pharmacies.remove(id)?;
        self.entries.rewrite(|entry| {
            if entry.pharmacy_id.as_deref() == Some(id) {
                entry.pharmacy_id = None;
                true
            } else {
                false
            }
        })?;
        Ok(removed)
    }

    // Tolerance breaks

    pub fn breaks(&self) -> &[ToleranceBreak] {
        self.breaks.items()
    }

    pub fn active_break(&self) -> Option<&ToleranceBreak> {
        self.breaks.items().iter().find(|tb| tb.is_active)
    }

    /// Starts a break today, first closing any break still marked active.
    pub fn start_break(&mut self) -> StoreResult<ToleranceBreak> {
        let today = today_iso_date();
        let stamp = today.clone();
        self.breaks.rewrite(|tb| {
            if tb.is_active {
                tb.is_active = false;
                if tb.end_date.is_none() {
                    tb.end_date = Some(stamp.clone());
                }
                true
            } else {
                false
            }
        })?;

        let new_break = ToleranceBreak {
            id: generate_id(),
            start_date: today,
            end_date: None,
            is_active: true,
        };
        self.breaks.prepend(new_break.clone())?;
        info!(
            "event=break_start module=tracker status=ok start_date={}",
            new_break.start_date
        );
        Ok(new_break)
    }

    /// Ends the given break; unknown ids are a silent no-op.
    pub fn end_break(&mut self, id: &str) -> StoreResult<bool> {
        let today = today_iso_date();
        let ended = self.breaks.rewrite(|tb| {
            if tb.key() == id && tb.is_active {
                tb.is_active = false;
                tb.end_date = Some(today.clone());
                true
            } else {
                false
            }
        })?;
        if ended > 0 {
            info!("event=break_end module=tracker status=ok");
        }
        Ok(ended > 0)
    }

    // Stash

    pub fn stash_items(&self) -> &[StockedItem] {
        self.stash.items()
    }

    /// Upsert-or-delete keyed by product id: a blank/zero quantity removes
    /// any existing record (no zero-value rows are ever stored); otherwise
    /// the incoming record is merged over the existing one or appended.
    pub fn upsert_stash_item(&mut self, item: StockedItem) -> StoreResult<StashOutcome> {
        if item.clears_stock() {
            return Ok(if self.stash.remove(&item.product_id)? {
                StashOutcome::Removed
            } else {
                StashOutcome::Ignored
            });
        }

        match self.stash.get(&item.product_id).cloned() {
            Some(existing) => {
                let merged = StockedItem {
                    product_id: existing.product_id,
                    quantity: item.quantity,
                    acquisition_date: item.acquisition_date.or(existing.acquisition_date),
                };
                self.stash.update(merged)?;
                Ok(StashOutcome::Updated)
            }
            None => {
                self.stash.append(item)?;
                Ok(StashOutcome::Added)
            }
        }
    }

    pub fn remove_stash_item(&mut self, product_id: &str) -> StoreResult<bool> {
        self.stash.remove(product_id)
    }

    /// Sum of stash quantities that parse as grams; everything else is left
    /// out of the total.
    pub fn stash_total_grams(&self) -> f64 {
        self.stash
            .items()
            .iter()
            .filter_map(|item| parse_quantity(&item.quantity).and_then(|q| q.grams()))
            .sum()
    }

    // Theme preference

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.theme = theme;
        save_theme(&self.storage, theme)
    }

    pub fn toggle_theme(&mut self) -> StoreResult<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}

/// Today's civil date as `YYYY-MM-DD` (UTC), computed from the epoch without
/// a calendar dependency.
pub fn today_iso_date() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!("{year:04}-{month:02}-{day:02}")
}

// Days-to-civil conversion over the proleptic Gregorian calendar.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = if month <= 2 { year + 1 } else { year };
    (year, month, day)
}
