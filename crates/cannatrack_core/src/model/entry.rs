//! Consumption log entries.
//!
//! # Responsibility
//! - Define the journal record linking a product to a dated session.
//!
//! # Invariants
//! - `product_id` is required; device/surgery/pharmacy references are soft
//!   and may dangle after the target is deleted (delete clears them, but
//!   imported data is taken as-is).
//! - `date` is an ISO-8601 string, so lexicographic order is chronological.

use crate::model::Keyed;
use serde::{Deserialize, Serialize};

/// One logged consumption session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub product_id: String,
    pub date: String,
    /// 1-5 stars.
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surgery_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pharmacy_id: Option<String>,
}

/// Entry fields supplied by the caller; the id is generated on add.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub product_id: String,
    pub date: String,
    pub rating: u8,
    pub notes: Option<String>,
    pub dosage: Option<String>,
    pub device_id: Option<String>,
    pub surgery_id: Option<String>,
    pub pharmacy_id: Option<String>,
}

impl Keyed for LogEntry {
    fn key(&self) -> &str {
        &self.id
    }
}
