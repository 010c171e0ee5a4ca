use nestory_archive::{
    ArchiveError, ExportFormat, archive_to_json, import_json, read_import_file,
    write_export_file,
};
use nestory_model::{Archive, ItemRecord};

#[test]
fn export_writes_a_prefixed_sortable_file() {
    let dir = tempfile::tempdir().unwrap();
    let archive = Archive::new(
        vec![ItemRecord::new("Bookshelf")],
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    let bytes = archive_to_json(&archive).unwrap();

    let first = write_export_file(dir.path(), ExportFormat::Json, &bytes).unwrap();
    let second = write_export_file(dir.path(), ExportFormat::Json, &bytes).unwrap();

    let first_name = first.file_name().unwrap().to_str().unwrap();
    let second_name = second.file_name().unwrap().to_str().unwrap();
    assert!(first_name.starts_with("nestory-backup-"));
    assert!(first_name.ends_with(".json"));
    assert_ne!(first_name, second_name);
    assert!(first_name < second_name, "names sort in creation order");
}

#[test]
fn written_archives_read_back_and_import() {
    let dir = tempfile::tempdir().unwrap();
    let archive = Archive::new(
        vec![ItemRecord::new("Bookshelf")],
        Vec::new(),
        Vec::new(),
        Vec::new(),
    );
    let bytes = archive_to_json(&archive).unwrap();
    let path = write_export_file(dir.path(), ExportFormat::Json, &bytes).unwrap();

    let read_back = read_import_file(&path).unwrap();
    let outcome = import_json(&read_back).unwrap();
    assert_eq!(outcome.report.items_imported, 1);
    assert_eq!(outcome.items, archive.items);
}

#[test]
fn missing_source_file_is_a_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = read_import_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(error, ArchiveError::Io(_)));
}
