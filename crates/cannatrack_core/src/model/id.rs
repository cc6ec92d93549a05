//! Identifier generation for persisted records.
//!
//! Ids are strings of the form `<epoch-millis>-<suffix>`: unique enough for a
//! single-user catalogue, deliberately not a cryptographic guarantee. The
//! suffix is drawn from a v4 UUID so two records created in the same
//! millisecond still diverge.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const SUFFIX_LEN: usize = 7;

/// Generates a fresh record id.
pub fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &suffix[..SUFFIX_LEN])
}
