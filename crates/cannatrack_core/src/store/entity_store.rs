//! Generic collection store over a single named slot.
//!
//! # Responsibility
//! - Load one entity kind's full collection at startup, falling back to a
//!   seed when the slot is absent or holds malformed data.
//! - Re-serialize the full collection to the slot on every mutation.
//!
//! # Invariants
//! - The in-memory collection and the slot value only diverge between a
//!   mutation and the immediately following persist call.
//! - Update/remove on an unknown key are silent no-ops.
//! - There is no incremental persistence and no transaction boundary; a
//!   mutation is one synchronous full rewrite.

use crate::model::Keyed;
use crate::store::{SlotStorage, StoreError, StoreResult};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Whether a seed used for an absent slot is written back immediately.
///
/// The starter catalogue slots persist their seed on first run; journal-like
/// slots stay empty until the first real mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPersistence {
    PersistWhenAbsent,
    InMemoryOnly,
}

/// One entity kind's collection, backed by one slot.
pub struct EntityStore<S, T> {
    storage: S,
    slot: &'static str,
    items: Vec<T>,
}

impl<S, T> EntityStore<S, T>
where
    S: SlotStorage,
    T: Keyed + Clone + Serialize + DeserializeOwned,
{
    /// Loads the slot, substituting `seed` when it is absent or corrupt.
    ///
    /// Malformed slot data is logged and swallowed; the seed is not written
    /// back in that case, so the next mutation performs the repair.
    pub fn open(
        storage: S,
        slot: &'static str,
        seed: Vec<T>,
        seed_persistence: SeedPersistence,
    ) -> StoreResult<Self> {
        let items = match storage.read_slot(slot)? {
            Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!(
                        "event=slot_load module=store status=fallback slot={} reason=malformed error={}",
                        slot, err
                    );
                    seed
                }
            },
            None => {
                if seed_persistence == SeedPersistence::PersistWhenAbsent {
                    let store = Self {
                        storage,
                        slot,
                        items: seed,
                    };
                    store.persist()?;
                    info!(
                        "event=slot_load module=store status=seeded slot={} count={}",
                        slot,
                        store.items.len()
                    );
                    return Ok(store);
                }
                seed
            }
        };

        Ok(Self {
            storage,
            slot,
            items,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Adds to the front of the collection (newest-first kinds).
    pub fn prepend(&mut self, item: T) -> StoreResult<()> {
        self.items.insert(0, item);
        self.persist()
    }

    /// Adds to the back of the collection.
    pub fn append(&mut self, item: T) -> StoreResult<()> {
        self.items.push(item);
        self.persist()
    }

    /// Replaces the item with a matching key; no-op when no key matches.
    ///
    /// Returns whether a replacement happened.
    pub fn update(&mut self, item: T) -> StoreResult<bool> {
        match self.items.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(existing) => {
                *existing = item;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the item with a matching key; no-op when no key matches.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, key: &str) -> StoreResult<bool> {
        let before = self.items.len();
        self.items.retain(|item| item.key() != key);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Applies `mutate` to every item, persisting once when any reported a
    /// change. Used to clear soft references after a referenced entity is
    /// deleted.
    pub fn rewrite<F>(&mut self, mut mutate: F) -> StoreResult<usize>
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut changed = 0;
        for item in &mut self.items {
            if mutate(item) {
                changed += 1;
            }
        }
        if changed > 0 {
            self.persist()?;
        }
        Ok(changed)
    }

    fn persist(&self) -> StoreResult<()> {
        let raw = serde_json::to_string(&self.items).map_err(|err| StoreError::Serialize {
            slot: self.slot,
            message: err.to_string(),
        })?;
        self.storage.write_slot(self.slot, &raw)
    }
}
