//! End-to-end rendering tests: write a workbook, read it back with calamine.

use calamine::{open_workbook, Data, Reader, Xlsx};
use matchsheet::{CellValue, RenderConfig, Table, TableRenderer};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn read_sheet(path: &Path, sheet: &str) -> calamine::Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("rendered file should open");
    workbook
        .worksheet_range(sheet)
        .expect("sheet should exist")
}

fn review_table() -> Table {
    init_tracing();
    let mut table = Table::new([
        "Description",
        "Amount",
        "Source Partner",
        "Partner Candidate 1",
        "_partner_exact_match",
    ])
    .unwrap();

    table
        .push_row([
            CellValue::from("office rent"),
            CellValue::from(120000.0),
            CellValue::from("ACME Corp"),
            CellValue::from("ACME Corporation"),
            CellValue::from(true),
        ])
        .unwrap();
    table
        .push_row([
            CellValue::from("taxi fare"),
            CellValue::from("n/a"),
            CellValue::Null,
            CellValue::from(""),
            CellValue::from(false),
        ])
        .unwrap();

    table
}

#[test]
fn header_row_first_then_all_data_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("review.xlsx");

    TableRenderer::default()
        .render(&review_table(), &path, None)
        .unwrap();

    let range = read_sheet(&path, "Sheet1");
    let (height, width) = range.get_size();
    assert_eq!(height, 3, "header plus two data rows");
    assert_eq!(width, 5);

    assert_eq!(
        range.get((0, 0)),
        Some(&Data::String("Description".to_string()))
    );
    assert_eq!(
        range.get((0, 4)),
        Some(&Data::String("_partner_exact_match".to_string()))
    );
    assert_eq!(
        range.get((1, 0)),
        Some(&Data::String("office rent".to_string()))
    );
    assert_eq!(
        range.get((2, 0)),
        Some(&Data::String("taxi fare".to_string()))
    );
}

#[test]
fn numeric_amounts_stay_numeric_and_text_amounts_stay_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("amounts.xlsx");

    TableRenderer::default()
        .render(&review_table(), &path, None)
        .unwrap();

    let range = read_sheet(&path, "Sheet1");
    assert_eq!(range.get((1, 1)), Some(&Data::Float(120000.0)));
    assert_eq!(range.get((2, 1)), Some(&Data::String("n/a".to_string())));
}

#[test]
fn hidden_flag_columns_retain_their_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flags.xlsx");

    TableRenderer::default()
        .render(&review_table(), &path, None)
        .unwrap();

    // The flag column is hidden in the output but its values are still
    // present in the grid.
    let range = read_sheet(&path, "Sheet1");
    assert_eq!(range.get((1, 4)), Some(&Data::Bool(true)));
    assert_eq!(range.get((2, 4)), Some(&Data::Bool(false)));
}

#[test]
fn empty_table_renders_header_only() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.xlsx");

    let table = Table::new(["Description", "Amount"]).unwrap();
    let result = TableRenderer::default().render(&table, &path, None);
    assert!(result.is_ok(), "empty table should render cleanly");

    let range = read_sheet(&path, "Sheet1");
    assert_eq!(range.get_size(), (1, 2));
}

#[test]
fn render_returns_the_output_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.xlsx");

    let rendered = TableRenderer::default()
        .render(&review_table(), &path, None)
        .unwrap();
    assert_eq!(rendered, path);
}

#[test]
fn custom_sheet_name_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("named.xlsx");

    TableRenderer::default()
        .render(&review_table(), &path, Some("Review"))
        .unwrap();

    let range = read_sheet(&path, "Review");
    assert_eq!(range.get_size().0, 3);
}

#[test]
fn unwritable_destination_is_an_error() {
    let table = review_table();
    let result = TableRenderer::default().render(&table, "/nonexistent/dir/out.xlsx", None);
    assert!(result.is_err(), "saving into a missing directory must fail");
}

#[test]
fn yaml_config_file_drives_the_renderer() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("palette.yaml");
    std::fs::write(
        &config_path,
        "palette:\n  match_fill: \"92D050\"\ncolumns:\n  amount_marker: \"Total\"\n",
    )
    .unwrap();

    let config = RenderConfig::from_yaml_file(&config_path).unwrap();
    assert_eq!(config.palette.match_fill, "92D050");
    assert_eq!(config.columns.amount_marker, "Total");

    let mut table = Table::new(["Total", "Source Partner", "_partner_exact_match"]).unwrap();
    table
        .push_row([
            CellValue::from(9_800_000.0),
            CellValue::from("ACME"),
            CellValue::from(true),
        ])
        .unwrap();

    let path = dir.path().join("custom.xlsx");
    let result = TableRenderer::new(config).render(&table, &path, None);
    assert!(result.is_ok());

    let range = read_sheet(&path, "Sheet1");
    assert_eq!(range.get((1, 0)), Some(&Data::Float(9_800_000.0)));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let result = RenderConfig::from_yaml_file("/nonexistent/config.yaml");
    assert!(matches!(result, Err(matchsheet::SheetError::Io(_))));
}

#[test]
fn full_width_headers_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wide.xlsx");

    let mut table = Table::new(["摘要", "金額 Amount"]).unwrap();
    table
        .push_row([CellValue::from("事務所家賃"), CellValue::from(120000.0)])
        .unwrap();

    TableRenderer::default().render(&table, &path, None).unwrap();

    let range = read_sheet(&path, "Sheet1");
    assert_eq!(range.get((0, 0)), Some(&Data::String("摘要".to_string())));
    assert_eq!(range.get((1, 1)), Some(&Data::Float(120000.0)));
}
