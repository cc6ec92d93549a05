//! Prescribing surgery and dispensing pharmacy records.
//!
//! Both share one shape; kept as distinct types because they live in
//! distinct slots and log entries reference them through distinct fields.

use crate::model::Keyed;
use serde::{Deserialize, Serialize};

/// Prescribing clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surgery {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Dispensing pharmacy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Shared draft for both location kinds; the id is generated on add.
#[derive(Debug, Clone)]
pub struct LocationDraft {
    pub name: String,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl Keyed for Surgery {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Pharmacy {
    fn key(&self) -> &str {
        &self.id
    }
}
