use chrono::NaiveDate;

use nestory_archive::{csv_headers, import_csv, items_to_csv};
use nestory_map::{analyze_headers, update_mapping};
use nestory_model::{ItemCondition, ItemRecord, TargetField};

#[test]
fn csv_export_quotes_embedded_commas() {
    let item = ItemRecord::new("Item with, comma");
    let bytes = items_to_csv(&[item]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\"Item with, comma\""));
}

#[test]
fn csv_export_doubles_embedded_quotes() {
    let item = ItemRecord::new("She said \"hi\"");
    let bytes = items_to_csv(&[item]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\"She said \"\"hi\"\"\""));
}

#[test]
fn csv_export_header_row_uses_display_names() {
    let bytes = items_to_csv(&[]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let header = text.lines().next().unwrap();
    assert!(header.starts_with("Name,Brand,Model Number,Serial Number,Value"));
}

#[test]
fn csv_headers_reads_the_first_row() {
    let sheet = b"item_name,price,room\nLamp,25,Den\n";
    let headers = csv_headers(sheet).unwrap();
    assert_eq!(headers, vec!["item_name", "price", "room"]);
}

#[test]
fn csv_import_parses_mapped_cells_through_field_parsers() {
    let sheet = concat!(
        "item_name,price,purchase date,condition,qty,tags\n",
        "TV,\"$1,299.99\",03/15/2024,Brand New,2,\"living room; electronics\"\n",
    )
    .as_bytes();
    let mapping = analyze_headers(&csv_headers(sheet).unwrap());
    assert!(mapping.is_valid);

    let outcome = import_csv(sheet, &mapping).unwrap();
    assert_eq!(outcome.report.items_imported, 1);
    assert!(!outcome.report.has_errors());

    let item = &outcome.items[0];
    assert_eq!(item.name, "TV");
    assert_eq!(item.purchase_price, Some(1299.99));
    assert_eq!(item.purchase_date, NaiveDate::from_ymd_opt(2024, 3, 15));
    assert_eq!(item.condition, ItemCondition::New);
    assert_eq!(item.quantity, 2);
    assert_eq!(item.tags, vec!["living room", "electronics"]);
}

#[test]
fn csv_import_rejects_rows_without_a_name() {
    let sheet = b"name,brand\nLamp,Ikea\n,Sony\nDesk,\n";
    let mapping = analyze_headers(&csv_headers(sheet).unwrap());

    let outcome = import_csv(sheet, &mapping).unwrap();
    assert_eq!(outcome.report.items_imported, 2);
    assert_eq!(outcome.report.errors.len(), 1);
    assert!(outcome.report.errors[0].message.contains("row 2"));
    assert!(outcome.report.has_errors());
}

#[test]
fn csv_import_refuses_an_incomplete_mapping() {
    let sheet = b"brand,price\nIkea,10\n";
    let mapping = analyze_headers(&csv_headers(sheet).unwrap());
    assert!(!mapping.is_valid);

    let error = import_csv(sheet, &mapping).unwrap_err();
    assert!(error.to_string().contains("Name"));
}

#[test]
fn csv_import_honors_manual_reassignment() {
    let sheet = b"product code,description\nX100,Standing Desk\n";
    let auto = analyze_headers(&csv_headers(sheet).unwrap());
    // "description" lands on Notes; the user promotes it to Name.
    let mapping = update_mapping(&auto, 1, Some(TargetField::Name));
    assert!(mapping.is_valid);

    let outcome = import_csv(sheet, &mapping).unwrap();
    assert_eq!(outcome.report.items_imported, 1);
    assert_eq!(outcome.items[0].name, "Standing Desk");
}

#[test]
fn invalid_but_present_values_become_absent_not_errors() {
    let sheet = b"name,price,qty,purchase date\nLamp,N/A,5.5,someday\n";
    let mapping = analyze_headers(&csv_headers(sheet).unwrap());

    let outcome = import_csv(sheet, &mapping).unwrap();
    assert_eq!(outcome.report.items_imported, 1);
    assert!(!outcome.report.has_errors());

    let item = &outcome.items[0];
    assert_eq!(item.purchase_price, None);
    assert_eq!(item.purchase_date, None);
    assert_eq!(item.quantity, 1, "unparseable quantity keeps the default");
}

#[test]
fn exported_csv_headers_analyze_as_fully_confident() {
    let mut item = ItemRecord::new("Couch");
    item.tags = vec!["big".to_string()];
    let bytes = items_to_csv(&[item]).unwrap();

    let mapping = analyze_headers(&csv_headers(&bytes).unwrap());
    assert!(mapping.is_valid);
    assert!(mapping.unmapped_columns.is_empty());
    for column in &mapping.mappings {
        assert_eq!(column.confidence, 1.0, "column {}", column.header);
    }
}
