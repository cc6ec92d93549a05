//! Product catalogue records.
//!
//! # Responsibility
//! - Define the product record and its nested terpene profile.
//!
//! # Invariants
//! - `thc`/`cbd` are percentages of the flower/oil, not absolute amounts.
//! - `price_per_gram` is optional: unlisted products stay comparable.

use crate::model::Keyed;
use serde::{Deserialize, Serialize};

/// Dominant strain classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrainType {
    Indica,
    Sativa,
    Hybrid,
}

impl StrainType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Indica => "Indica",
            Self::Sativa => "Sativa",
            Self::Hybrid => "Hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "indica" => Some(Self::Indica),
            "sativa" => Some(Self::Sativa),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

/// Single terpene measurement attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerpeneProfile {
    pub name: String,
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Catalogue entry for a prescribable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub producer: String,
    pub logo_url: String,
    /// Serialized as `type` to match the stored JSON shape.
    #[serde(rename = "type")]
    pub kind: StrainType,
    pub thc: f64,
    pub cbd: f64,
    #[serde(default)]
    pub terpenes: Vec<TerpeneProfile>,
    #[serde(default)]
    pub effects: Vec<String>,
    pub description: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_gram: Option<f64>,
}

impl Keyed for Product {
    fn key(&self) -> &str {
        &self.id
    }
}
