//! Canonical records: flat, denormalized representations of domain
//! entities suitable for serialization.
//!
//! Records carry denormalized names (`category_name`, `room_name`) rather
//! than foreign keys, and opaque photo identifiers the host resolves
//! externally. The UUID identity of each record is preserved byte-for-byte
//! across export/import round-trips.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::condition::ItemCondition;

/// Currency assumed when a source provides none.
pub const DEFAULT_CURRENCY: &str = "USD";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_quantity() -> u32 {
    1
}

/// One inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default = "default_currency")]
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(default)]
    pub condition: ItemCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Opaque references resolved by the host's photo storage.
    #[serde(default)]
    pub photo_identifiers: Vec<String>,
    #[serde(default)]
    pub receipt_ids: Vec<Uuid>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemRecord {
    /// A fresh record with a new identity and creation timestamps.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            brand: None,
            model_number: None,
            serial_number: None,
            barcode: None,
            purchase_price: None,
            purchase_date: None,
            currency_code: default_currency(),
            category_name: None,
            room_name: None,
            condition: ItemCondition::DEFAULT,
            condition_notes: None,
            notes: None,
            warranty_expiry_date: None,
            tags: Vec::new(),
            photo_identifiers: Vec::new(),
            receipt_ids: Vec::new(),
            quantity: default_quantity(),
            created_at: now,
            updated_at: now,
        }
    }

    /// True when the name is empty or whitespace-only.
    #[must_use]
    pub fn name_is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// One item category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// One room items are located in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One purchase receipt. Items reference receipts through `receipt_ids`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency_code: String,
    /// Opaque references resolved by the host's photo storage.
    #[serde(default)]
    pub photo_identifiers: Vec<String>,
}

impl CategoryRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: None,
        }
    }
}

impl RoomRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            notes: None,
        }
    }
}

impl ReceiptRecord {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            store_name: None,
            receipt_date: None,
            total_amount: None,
            currency_code: default_currency(),
            photo_identifiers: Vec::new(),
        }
    }
}

impl Default for ReceiptRecord {
    fn default() -> Self {
        Self::new()
    }
}
