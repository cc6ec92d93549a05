//! Theme preference slot.
//!
//! The theme slot holds a plain string, not JSON; unknown values silently
//! fall back to the default scheme.

use crate::model::theme::Theme;
use crate::store::slot::slots;
use crate::store::{SlotStorage, StoreResult};
use log::warn;

/// Reads the stored theme preference, defaulting when absent or unknown.
pub fn load_theme(storage: &impl SlotStorage) -> StoreResult<Theme> {
    let stored = storage.read_slot(slots::THEME)?;
    Ok(match stored {
        Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
            warn!(
                "event=slot_load module=store status=fallback slot={} reason=unknown_value value={}",
                slots::THEME,
                raw
            );
            Theme::default()
        }),
        None => Theme::default(),
    })
}

/// Persists the theme preference.
pub fn save_theme(storage: &impl SlotStorage, theme: Theme) -> StoreResult<()> {
    storage.write_slot(slots::THEME, theme.as_str())
}
