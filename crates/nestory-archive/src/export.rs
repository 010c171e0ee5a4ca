//! Export serialization: JSON envelope and CSV item table.

use nestory_model::{Archive, ItemRecord, TargetField};
use tracing::debug;

use crate::error::{ArchiveError, Result};

/// Serializes a complete archive envelope to pretty-printed JSON.
///
/// Field order follows struct declaration and is stable across runs. An
/// archive with empty collections still produces a structurally complete
/// envelope.
pub fn archive_to_json(archive: &Archive) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(archive)?;
    bytes.push(b'\n');
    debug!(records = archive.record_count(), "serialized archive");
    Ok(bytes)
}

/// Serializes items to a CSV table: one header row of display names, one
/// data row per item.
///
/// Quoting is RFC-4180: fields containing the delimiter, a quote, or a
/// newline are wrapped in quotes with internal quotes doubled. Only items
/// have a CSV export path; the other collections are JSON-only.
pub fn items_to_csv(items: &[ItemRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(TargetField::ALL.iter().map(TargetField::display_name))?;
    for item in items {
        writer.write_record(csv_row(item))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| ArchiveError::Io(error.into_error()))?;
    debug!(items = items.len(), "serialized csv export");
    Ok(bytes)
}

/// One CSV cell per target field, in [`TargetField::ALL`] order.
fn csv_row(item: &ItemRecord) -> Vec<String> {
    TargetField::ALL
        .iter()
        .map(|field| csv_cell(item, *field))
        .collect()
}

fn csv_cell(item: &ItemRecord, field: TargetField) -> String {
    match field {
        TargetField::Name => item.name.clone(),
        TargetField::Brand => optional(&item.brand),
        TargetField::ModelNumber => optional(&item.model_number),
        TargetField::SerialNumber => optional(&item.serial_number),
        TargetField::PurchasePrice => item
            .purchase_price
            .map(format_amount)
            .unwrap_or_default(),
        TargetField::PurchaseDate => format_date(item.purchase_date),
        TargetField::Currency => item.currency_code.clone(),
        TargetField::Category => optional(&item.category_name),
        TargetField::Room => optional(&item.room_name),
        TargetField::Condition => item.condition.display_name().to_string(),
        TargetField::ConditionNotes => optional(&item.condition_notes),
        TargetField::Notes => optional(&item.notes),
        TargetField::WarrantyExpiry => format_date(item.warranty_expiry_date),
        TargetField::Tags => item.tags.join("; "),
        TargetField::Quantity => item.quantity.to_string(),
        TargetField::Barcode => optional(&item.barcode),
    }
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Formats an amount without trailing zeros ("10.50" becomes "10.5",
/// "10.0" becomes "10").
fn format_amount(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_formatting_drops_trailing_zeros() {
        assert_eq!(format_amount(1234.56), "1234.56");
        assert_eq!(format_amount(10.5), "10.5");
        assert_eq!(format_amount(10.0), "10");
        assert_eq!(format_amount(0.0), "0");
    }
}
