//! One entry point per subcommand.

use anyhow::Context;
use tracing::info;

use nestory_archive::{
    ExportFormat, archive_to_json, csv_headers, import_csv, import_json, items_to_csv,
    read_archive, read_import_file, write_export_file,
};
use nestory_map::{MappingResult, analyze_headers};
use nestory_model::Archive;

use crate::cli::{AnalyzeArgs, ConvertArgs, InspectArgs, ValidateArgs};
use crate::summary::{print_inspect, print_mapping, print_report};

pub fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let bytes = read_import_file(&args.archive)
        .with_context(|| format!("reading {}", args.archive.display()))?;
    let archive = read_archive(&bytes)?;
    print_inspect(&archive);
    Ok(())
}

/// Returns the mapping so the caller can turn validity into an exit code.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<MappingResult> {
    let bytes = read_import_file(&args.sheet)
        .with_context(|| format!("reading {}", args.sheet.display()))?;
    let mapping = analyze_sheet(&bytes)?;
    print_mapping(&mapping);
    Ok(mapping)
}

/// Converts a spreadsheet to an archive. Returns true when every row
/// imported cleanly.
pub fn run_convert(args: &ConvertArgs) -> anyhow::Result<bool> {
    let bytes = read_import_file(&args.sheet)
        .with_context(|| format!("reading {}", args.sheet.display()))?;
    let mapping = analyze_sheet(&bytes)?;
    print_mapping(&mapping);

    let outcome = import_csv(&bytes, &mapping)?;
    print_report(&outcome.report);

    let archive = Archive::new(
        outcome.items,
        outcome.categories,
        outcome.rooms,
        outcome.receipts,
    );
    let json = archive_to_json(&archive)?;
    let path = write_export_file(&args.output_dir, ExportFormat::Json, &json)?;
    println!("Archive: {}", path.display());

    if args.with_csv {
        let csv_bytes = items_to_csv(&archive.items)?;
        let csv_path = write_export_file(&args.output_dir, ExportFormat::Csv, &csv_bytes)?;
        println!("CSV: {}", csv_path.display());
    }

    info!(
        items = archive.items.len(),
        errors = outcome.report.errors.len(),
        "conversion finished"
    );
    Ok(!outcome.report.has_errors())
}

/// Returns true when the archive imported without record errors.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<bool> {
    let bytes = read_import_file(&args.archive)
        .with_context(|| format!("reading {}", args.archive.display()))?;
    let outcome = import_json(&bytes)?;
    print_report(&outcome.report);
    Ok(!outcome.report.has_errors())
}

fn analyze_sheet(bytes: &[u8]) -> anyhow::Result<MappingResult> {
    let headers = csv_headers(bytes)?;
    anyhow::ensure!(!headers.is_empty(), "spreadsheet has no header row");
    Ok(analyze_headers(&headers))
}
