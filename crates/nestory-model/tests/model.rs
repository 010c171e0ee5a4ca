use chrono::NaiveDate;
use nestory_model::{Archive, CategoryRecord, ItemCondition, ItemRecord, RoomRecord};

fn sample_item() -> ItemRecord {
    let mut item = ItemRecord::new("MacBook Pro 14\"");
    item.brand = Some("Apple".to_string());
    item.model_number = Some("A2779".to_string());
    item.purchase_price = Some(2499.99);
    item.purchase_date = NaiveDate::from_ymd_opt(2024, 3, 15);
    item.category_name = Some("Electronics".to_string());
    item.room_name = Some("Office".to_string());
    item.condition = ItemCondition::LikeNew;
    item.tags = vec!["work".to_string(), "laptop".to_string()];
    item
}

#[test]
fn item_serializes_with_camel_case_keys() {
    let item = sample_item();
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["name"], "MacBook Pro 14\"");
    assert_eq!(json["modelNumber"], "A2779");
    assert_eq!(json["purchasePrice"], 2499.99);
    assert_eq!(json["purchaseDate"], "2024-03-15");
    assert_eq!(json["currencyCode"], "USD");
    assert_eq!(json["condition"], "like_new");
    assert!(json.get("serialNumber").is_none(), "absent options are omitted");
}

#[test]
fn item_round_trips_exactly() {
    let item = sample_item();
    let json = serde_json::to_string(&item).unwrap();
    let back: ItemRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
    assert_eq!(back.id, item.id);
}

#[test]
fn sparse_item_decodes_with_defaults() {
    let json = r#"{
        "id": "4f2d9f4a-6a2e-4c7b-9a49-0f2f4fbc2a10",
        "name": "Desk Lamp",
        "createdAt": "2024-01-01T09:30:00Z",
        "updatedAt": "2024-01-01T09:30:00Z"
    }"#;
    let item: ItemRecord = serde_json::from_str(json).unwrap();
    assert_eq!(item.currency_code, "USD");
    assert_eq!(item.condition, ItemCondition::DEFAULT);
    assert_eq!(item.quantity, 1);
    assert!(item.tags.is_empty());
    assert!(!item.name_is_blank());
}

#[test]
fn archive_round_trips_all_collections() {
    let archive = Archive::new(
        vec![sample_item()],
        vec![CategoryRecord::new("Electronics")],
        vec![RoomRecord::new("Office")],
        Vec::new(),
    );
    let json = serde_json::to_string_pretty(&archive).unwrap();
    let back: Archive = serde_json::from_str(&json).unwrap();
    assert_eq!(back, archive);
    assert_eq!(back.record_count(), 3);
}
