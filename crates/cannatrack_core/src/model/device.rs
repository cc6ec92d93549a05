//! Consumption device records.

use crate::model::Keyed;
use serde::{Deserialize, Serialize};

/// Hardware category for an owned device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "Portable Vaporizer")]
    PortableVaporizer,
    #[serde(rename = "Desktop Vaporizer")]
    DesktopVaporizer,
    #[serde(rename = "Oil Pen")]
    OilPen,
    #[serde(rename = "Water Pipe")]
    WaterPipe,
    Pipe,
    Other,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PortableVaporizer => "Portable Vaporizer",
            Self::DesktopVaporizer => "Desktop Vaporizer",
            Self::OilPen => "Oil Pen",
            Self::WaterPipe => "Water Pipe",
            Self::Pipe => "Pipe",
            Self::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "portable vaporizer" | "portable" => Some(Self::PortableVaporizer),
            "desktop vaporizer" | "desktop" => Some(Self::DesktopVaporizer),
            "oil pen" | "pen" => Some(Self::OilPen),
            "water pipe" | "bong" => Some(Self::WaterPipe),
            "pipe" => Some(Self::Pipe),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// An owned consumption device, referenced by log entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "type")]
    pub kind: DeviceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Device fields supplied by the caller; the id is generated on add.
#[derive(Debug, Clone)]
pub struct DeviceDraft {
    pub name: String,
    pub kind: DeviceType,
    pub brand: Option<String>,
    pub purchase_date: Option<String>,
    pub notes: Option<String>,
}

impl Keyed for Device {
    fn key(&self) -> &str {
        &self.id
    }
}
