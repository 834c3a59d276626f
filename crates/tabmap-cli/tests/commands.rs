//! Integration tests for CLI commands.

use std::fs;
use std::path::PathBuf;

use tabmap_cli::commands::{ApplyOptions, read_table, run_apply, run_check};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const INPUT: &str = "a,b,c\n4,x,x\n2,z,y\n2,y,z\n1,x,x\n3,x,y\n";

const CROSS_CONFIG: &str = r#"{
    "steps": [
        {
            "kind": "cross_column_mapping",
            "mappings": [["a", {"1": "aa", "2": "bb"}], ["b", {"x": "cc", "z": "dd"}]],
            "adjust_column": "c"
        }
    ]
}"#;

#[test]
fn test_apply_writes_rewritten_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "input.csv", INPUT);
    let config = write_file(&dir, "config.json", CROSS_CONFIG);
    let output = dir.path().join("output.csv");

    let result = run_apply(&ApplyOptions {
        input,
        config,
        output: Some(output.clone()),
        infer_schema: false,
        preview_rows: 2,
    })
    .unwrap();

    assert_eq!(result.rows, 5);
    assert_eq!(result.preview.height(), 2);
    assert_eq!(result.steps.len(), 1);
    assert_eq!(result.steps[0].transformer, "CrossColumnMappingTransformer");
    assert_eq!(result.steps[0].adjust_column.as_deref(), Some("c"));

    let written = read_table(&output, false).unwrap();
    let c: Vec<_> = written
        .column("c")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect();
    assert_eq!(c, vec!["cc", "dd", "bb", "cc", "cc"]);
}

#[test]
fn test_apply_with_typed_keys() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "input.csv", INPUT);
    let config = write_file(
        &dir,
        "config.json",
        r#"{"steps": [{"kind": "mapping", "mappings": {"a": [[1, 10], [2, 20]]}}]}"#,
    );
    let output = dir.path().join("output.csv");

    run_apply(&ApplyOptions {
        input,
        config,
        output: Some(output.clone()),
        infer_schema: true,
        preview_rows: 0,
    })
    .unwrap();

    let written = read_table(&output, true).unwrap();
    let a: Vec<_> = written
        .column("a")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(a, vec![Some(4), Some(20), Some(20), Some(10), Some(3)]);
}

#[test]
fn test_apply_reports_missing_column() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "input.csv", "a,b\n1,x\n");
    let config = write_file(&dir, "config.json", CROSS_CONFIG);

    let err = run_apply(&ApplyOptions {
        input,
        config,
        output: Some(dir.path().join("output.csv")),
        infer_schema: false,
        preview_rows: 0,
    })
    .unwrap_err();

    insta::assert_snapshot!(format!("{err:#}"), @"CrossColumnMappingTransformer: variable c is not in X");
}

#[test]
fn test_check_rejects_unordered_multi_column() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "config.json",
        r#"{"steps": [{
            "kind": "cross_column_mapping",
            "mappings": {"a": {"a": 1}, "b": {"b": 2}},
            "adjust_column": "c"
        }]}"#,
    );

    let err = run_check(&config).unwrap_err();

    insta::assert_snapshot!(
        format!("{err:#}"),
        @"CrossColumnMappingTransformer: mappings should be an ordered dict for 'replace' mappings using multiple columns"
    );
}

#[test]
fn test_check_lists_steps() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "config.json", CROSS_CONFIG);

    let steps = run_check(&config).unwrap();

    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].source_columns, vec!["a", "b"]);
}

#[test]
fn test_check_reports_unreadable_config() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "config.json", "{not json");

    let err = run_check(&config).unwrap_err();

    assert!(err.to_string().starts_with("failed to parse config"));
}
