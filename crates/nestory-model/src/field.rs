//! The closed set of canonical item attributes a spreadsheet column can be
//! mapped to, with the metadata table driving header matching and row
//! parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of value a target field holds.
///
/// Selects the value parser applied to spreadsheet cells mapped to the
/// field, keeping row parsing a table lookup rather than a conditional
/// chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, stored as-is after trimming.
    Text,
    /// Decimal currency amount.
    Currency,
    /// Calendar date.
    Date,
    /// Integral count.
    Integer,
    /// Normalized condition vocabulary.
    Condition,
    /// Delimited list of tags.
    TagList,
}

/// A canonical item attribute.
///
/// Declaration order is the deterministic tie-break order for header
/// matching: when two fields score identically, the first declared wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TargetField {
    Name,
    Brand,
    ModelNumber,
    SerialNumber,
    PurchasePrice,
    PurchaseDate,
    Currency,
    Category,
    Room,
    Condition,
    ConditionNotes,
    Notes,
    WarrantyExpiry,
    Tags,
    Quantity,
    Barcode,
}

impl TargetField {
    /// All target fields in declaration order.
    pub const ALL: [TargetField; 16] = [
        TargetField::Name,
        TargetField::Brand,
        TargetField::ModelNumber,
        TargetField::SerialNumber,
        TargetField::PurchasePrice,
        TargetField::PurchaseDate,
        TargetField::Currency,
        TargetField::Category,
        TargetField::Room,
        TargetField::Condition,
        TargetField::ConditionNotes,
        TargetField::Notes,
        TargetField::WarrantyExpiry,
        TargetField::Tags,
        TargetField::Quantity,
        TargetField::Barcode,
    ];

    /// Human-readable name, also the CSV export column header.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetField::Name => "Name",
            TargetField::Brand => "Brand",
            TargetField::ModelNumber => "Model Number",
            TargetField::SerialNumber => "Serial Number",
            TargetField::PurchasePrice => "Value",
            TargetField::PurchaseDate => "Purchase Date",
            TargetField::Currency => "Currency",
            TargetField::Category => "Category",
            TargetField::Room => "Room",
            TargetField::Condition => "Condition",
            TargetField::ConditionNotes => "Condition Notes",
            TargetField::Notes => "Notes",
            TargetField::WarrantyExpiry => "Warranty Expiry",
            TargetField::Tags => "Tags",
            TargetField::Quantity => "Quantity",
            TargetField::Barcode => "Barcode",
        }
    }

    /// True for fields a mapping must cover before row parsing may begin.
    ///
    /// Name is the only mandatory field.
    #[must_use]
    pub fn is_required(&self) -> bool {
        matches!(self, TargetField::Name)
    }

    /// Recognized header-text variations beyond the display name.
    ///
    /// Compared case-insensitively by the exact-match tier; the fuzzy tier
    /// additionally normalizes punctuation on both sides.
    #[must_use]
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            TargetField::Name => &["item", "product", "title", "product name"],
            TargetField::Brand => &["manufacturer", "make", "brand name"],
            TargetField::ModelNumber => &["model", "model no", "model #", "model num"],
            TargetField::SerialNumber => &["serial", "serial no", "serial #", "sn"],
            TargetField::PurchasePrice => &["price", "purchase price", "cost", "amount", "paid"],
            TargetField::PurchaseDate => &[
                "date purchased",
                "purchased",
                "bought",
                "date of purchase",
                "buy date",
            ],
            TargetField::Currency => &["currency code", "curr"],
            TargetField::Category => &["type", "item type", "group"],
            TargetField::Room => &["location", "area", "place", "where"],
            TargetField::Condition => &["state", "item condition"],
            TargetField::ConditionNotes => &["condition note", "condition details"],
            TargetField::Notes => &["note", "comments", "comment", "description", "remarks"],
            TargetField::WarrantyExpiry => &[
                "warranty",
                "warranty expiration",
                "warranty end",
                "warranty until",
                "warranty expires",
            ],
            TargetField::Tags => &["tag", "labels", "keywords"],
            TargetField::Quantity => &["qty", "count", "units", "number of items"],
            TargetField::Barcode => &["upc", "ean", "sku", "barcode number"],
        }
    }

    /// The kind of value this field holds, selecting its parser.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            TargetField::PurchasePrice => FieldKind::Currency,
            TargetField::PurchaseDate | TargetField::WarrantyExpiry => FieldKind::Date,
            TargetField::Quantity => FieldKind::Integer,
            TargetField::Condition => FieldKind::Condition,
            TargetField::Tags => FieldKind::TagList,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
