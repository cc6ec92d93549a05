//! Tolerance break records.
//!
//! At most one break should be active at a time; the service layer enforces
//! this by closing the current break before starting a new one. `end_date`
//! stays `None` while a break is running.

use crate::model::Keyed;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToleranceBreak {
    pub id: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    pub is_active: bool,
}

impl Keyed for ToleranceBreak {
    fn key(&self) -> &str {
        &self.id
    }
}
