//! CSV dataset import through a finalized column mapping.

use nestory_map::MappingResult;
use nestory_model::{ImportError, ItemRecord, TargetField};
use nestory_parse::{normalize_condition, parse_amount, parse_date, parse_quantity};
use tracing::debug;

use crate::error::Result;
use crate::import::ImportOutcome;

/// Reads the header row of a CSV document, trimmed.
pub fn csv_headers(bytes: &[u8]) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    let headers = reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    Ok(headers)
}

/// Imports item rows from a user-mapped CSV dataset.
///
/// Requires a finalized, valid mapping; an incomplete mapping is rejected
/// before any row is parsed. Each data row is run through the value
/// parser its mapped field selects, and rows that cannot produce a
/// non-empty name are rejected with an error citing the 1-based row
/// number.
pub fn import_csv(bytes: &[u8], mapping: &MappingResult) -> Result<ImportOutcome> {
    mapping.require_valid()?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let mut outcome = ImportOutcome::default();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row_number = index + 1;
        match build_item(&record, mapping) {
            Some(item) => outcome.items.push(item),
            None => outcome.report.errors.push(ImportError::record(format!(
                "row {row_number}: missing item name"
            ))),
        }
    }
    outcome.report.items_imported = outcome.items.len();
    debug!(
        imported = outcome.report.items_imported,
        rejected = outcome.report.errors.len(),
        "imported csv rows"
    );
    Ok(outcome)
}

/// Assembles one candidate record from a data row. Returns `None` when no
/// non-empty name could be extracted.
fn build_item(record: &csv::StringRecord, mapping: &MappingResult) -> Option<ItemRecord> {
    let mut item = ItemRecord::new(String::new());
    for column in mapping.mapped() {
        let Some(field) = column.field else {
            continue;
        };
        let Some(cell) = record.get(column.column_index).map(str::trim) else {
            continue;
        };
        if cell.is_empty() {
            continue;
        }
        apply_field(&mut item, field, cell);
    }
    if item.name_is_blank() {
        return None;
    }
    Some(item)
}

fn apply_field(item: &mut ItemRecord, field: TargetField, cell: &str) {
    match field {
        TargetField::Name => item.name = cell.to_string(),
        TargetField::Brand => item.brand = Some(cell.to_string()),
        TargetField::ModelNumber => item.model_number = Some(cell.to_string()),
        TargetField::SerialNumber => item.serial_number = Some(cell.to_string()),
        TargetField::Barcode => item.barcode = Some(cell.to_string()),
        TargetField::PurchasePrice => item.purchase_price = parse_amount(cell),
        TargetField::PurchaseDate => item.purchase_date = parse_date(cell),
        TargetField::Currency => item.currency_code = cell.to_uppercase(),
        TargetField::Category => item.category_name = Some(cell.to_string()),
        TargetField::Room => item.room_name = Some(cell.to_string()),
        TargetField::Condition => item.condition = normalize_condition(cell),
        TargetField::ConditionNotes => item.condition_notes = Some(cell.to_string()),
        TargetField::Notes => item.notes = Some(cell.to_string()),
        TargetField::WarrantyExpiry => item.warranty_expiry_date = parse_date(cell),
        TargetField::Tags => item.tags = split_tags(cell),
        TargetField::Quantity => {
            if let Some(quantity) = parse_quantity(cell) {
                item.quantity = quantity;
            }
        }
    }
}

fn split_tags(cell: &str) -> Vec<String> {
    cell.split([',', ';'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_split_on_comma_and_semicolon() {
        assert_eq!(split_tags("a, b; c"), vec!["a", "b", "c"]);
        assert_eq!(split_tags(" solo "), vec!["solo"]);
        assert!(split_tags(" , ; ").is_empty());
    }
}
