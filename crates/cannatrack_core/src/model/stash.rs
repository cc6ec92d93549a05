//! Stash inventory records.
//!
//! # Responsibility
//! - Define the stocked-item record keyed by product id.
//!
//! # Invariants
//! - Existence is implied by presence in the collection: there is never a
//!   stored record with a blank or zero quantity.

use crate::model::Keyed;
use serde::{Deserialize, Serialize};

/// Inventory line for one product. Quantity is free text ("3.5g", "50ml",
/// "1 vape cart") so users can track non-weighable stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockedItem {
    pub product_id: String,
    pub quantity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_date: Option<String>,
}

impl StockedItem {
    /// A blank or zero quantity means "remove this record" on upsert.
    pub fn clears_stock(&self) -> bool {
        let trimmed = self.quantity.trim();
        trimmed.is_empty() || trimmed == "0"
    }
}

impl Keyed for StockedItem {
    fn key(&self) -> &str {
        &self.product_id
    }
}

#[cfg(test)]
mod tests {
    use super::StockedItem;

    fn item(quantity: &str) -> StockedItem {
        StockedItem {
            product_id: "p1".to_string(),
            quantity: quantity.to_string(),
            acquisition_date: None,
        }
    }

    #[test]
    fn blank_and_zero_quantities_clear_stock() {
        assert!(item("").clears_stock());
        assert!(item("   ").clears_stock());
        assert!(item("0").clears_stock());
        assert!(!item("0.5g").clears_stock());
        assert!(!item("1 vape cart").clears_stock());
    }
}
