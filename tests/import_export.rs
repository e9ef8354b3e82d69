//! CSV/JSON import and export, end to end through the runtime

mod common;

use std::fs;

use common::{task, test_model};
use gridlite::io::{
    export_csv, parse_csv, CsvDialect, QuoteStyle, IMPORT_FAILED_MESSAGE,
    IMPORT_SUCCEEDED_MESSAGE,
};
use gridlite::messages::{Action, Msg};
use gridlite::model::{AppModel, Notification};
use gridlite::records::{Record, RecordStore};
use gridlite::runtime::Runtime;
use gridlite::GridConfig;

fn import(runtime: &mut Runtime, path: &std::path::Path) {
    runtime.dispatch(Msg::Action(Action::Import {
        path: path.to_path_buf(),
    }));
    runtime.wait_idle();
}

// ========================================================================
// Export
// ========================================================================

#[test]
fn test_export_quotes_only_fields_that_need_it() {
    let records = vec![
        task("Alpha").with(gridlite::records::Field::Id, "1"),
        task("Beta, with comma").with(gridlite::records::Field::Id, "2"),
        task("Gamma \"quoted\"").with(gridlite::records::Field::Id, "3"),
    ];
    let csv = export_csv(&records, QuoteStyle::Necessary).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "ID,Job Request,Submitted,Status,Submitter,URL,Assigned,Priority,Due Date,Est. Value"
    );
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "1,Alpha,,,,,,,,");
    assert_eq!(lines[2], "2,\"Beta, with comma\",,,,,,,,");
    assert_eq!(lines[3], "3,\"Gamma \"\"quoted\"\"\",,,,,,,,");
}

#[test]
fn test_export_always_quote_style() {
    let csv = export_csv(&[task("A")], QuoteStyle::Always).unwrap();
    assert!(csv.lines().nth(1).unwrap().starts_with("\"\",\"A\""));
}

#[test]
fn test_runtime_writes_export_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut runtime = Runtime::new(test_model(), dir.path());
    runtime.dispatch(Msg::Action(Action::Export));

    let path = dir.path().join("project-data.csv");
    assert_eq!(runtime.written_files(), &[path.clone()]);
    let contents = fs::read_to_string(path).unwrap();
    assert_eq!(contents.lines().count(), 6);
    assert!(contents.contains("\"6,200,000\""));
}

// ========================================================================
// Import
// ========================================================================

#[test]
fn test_two_line_csv_import() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.csv");
    fs::write(
        &path,
        "ID,Job Request,Submitted,Status\n7,\"Write docs\",01-02-2025,Complete\n",
    )
    .unwrap();

    let mut runtime = Runtime::new(test_model(), dir.path());
    import(&mut runtime, &path);

    let model = runtime.model();
    assert_eq!(model.records.len(), 1);
    let record = &model.records.records()[0];
    assert_eq!(record.id, "1");
    assert_eq!(record.job_request, "Write docs");
    assert_eq!(record.submitted, "01-02-2025");
    assert_eq!(record.status, "Complete");
    assert_eq!(record.priority, "");
    assert_eq!(
        model.notifications,
        vec![Notification::info(IMPORT_SUCCEEDED_MESSAGE)]
    );
}

#[test]
fn test_csv_rows_without_job_request_are_dropped_and_renumbered() {
    let content = "ID,Job Request\n1,A\n2,\n3,C\n";
    let records = parse_csv(content, CsvDialect::Rfc4180).unwrap();
    let ids: Vec<(&str, &str)> = records
        .iter()
        .map(|r| (r.id.as_str(), r.job_request.as_str()))
        .collect();
    assert_eq!(ids, [("1", "A"), ("2", "C")]);
}

#[test]
fn test_csv_import_strips_quotes_from_job_request() {
    let content = "ID,Job Request\n1,\"say \"\"hi\"\"\"\n2,Task \"B\"\n";
    let records = parse_csv(content, CsvDialect::Rfc4180).unwrap();
    let jobs: Vec<&str> = records.iter().map(|r| r.job_request.as_str()).collect();
    assert_eq!(jobs, ["say hi", "Task B"]);
}

#[test]
fn test_exported_csv_imports_back_to_same_store() {
    let store = RecordStore::seeded();
    let csv = export_csv(store.records(), QuoteStyle::Necessary).unwrap();
    let records = parse_csv(&csv, CsvDialect::Rfc4180).unwrap();
    assert_eq!(records, store.records());
}

#[test]
fn test_json_import_is_lenient() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.JSON");
    fs::write(
        &path,
        r#"[{"id": 3, "jobRequest": "Only job"}, {"id": 3, "priority": "High", "extra": true}]"#,
    )
    .unwrap();

    let mut runtime = Runtime::new(test_model(), dir.path());
    import(&mut runtime, &path);

    let records: &[Record] = runtime.model().records.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "3");
    assert_eq!(records[1].id, "3");
    assert_eq!(records[1].job_request, "");
    assert_eq!(records[1].priority, "High");
    assert_eq!(runtime.model().records.duplicate_ids(), vec!["3"]);
}

#[test]
fn test_unknown_extension_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.xlsx");
    fs::write(&path, "whatever").unwrap();

    let mut runtime = Runtime::new(test_model(), dir.path());
    import(&mut runtime, &path);

    assert_eq!(runtime.model().records.len(), 5);
    assert!(runtime.model().notifications.is_empty());
}

#[test]
fn test_failed_import_leaves_store_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"id": 1, "jobRequest": "#).unwrap();

    let mut runtime = Runtime::new(test_model(), dir.path());
    let before = runtime.model().records.clone();
    import(&mut runtime, &path);

    assert_eq!(runtime.model().records, before);
    assert_eq!(
        runtime.model().notifications,
        vec![Notification::error(IMPORT_FAILED_MESSAGE)]
    );
}

#[test]
fn test_legacy_dialect_splits_naively() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.csv");
    fs::write(&path, "ID,Job Request,Submitted\n1,\"A, B\",x\n").unwrap();

    let mut config = GridConfig::default();
    config.import.csv_dialect = CsvDialect::Legacy;
    let mut runtime = Runtime::new(AppModel::new(config), dir.path());
    import(&mut runtime, &path);

    let record = &runtime.model().records.records()[0];
    assert_eq!(record.job_request, "A");
    assert_eq!(record.submitted, " B\"");
}
