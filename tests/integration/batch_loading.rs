// tests/integration/batch_loading.rs

use std::io::Write;

use chrono::{TimeZone, Utc};
use tempfile::Builder;
use taskorder::batch::{load_and_validate, parse_batch, parse_due_date};
use taskorder::recommend_order;
use taskorder::types::InputFormat;
use taskorder_test_utils::builders::{BatchBuilder, RawTaskBuilder};
use taskorder_test_utils::titles;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn toml_batch_loads_and_orders() {
    let file = write_temp(
        ".toml",
        r#"
[[task]]
title = "Design"
due_date = "2024-01-05"
estimated_hours = 4

[[task]]
title = "Build"
due_date = "2024-01-03"
after = ["Design"]
"#,
    );

    let batch = load_and_validate(file.path()).unwrap();

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.tasks[0].estimated_hours, Some(4));
    assert!(batch.tasks[1].dependencies.contains("Design"));
    assert_eq!(recommend_order(&batch.tasks), titles(&["Design", "Build"]));
}

#[test]
fn json_request_body_loads_with_camel_case_keys() {
    let file = write_temp(
        ".json",
        r#"{
  "tasks": [
    { "title": "A", "dueDate": "2024-02-01T00:00:00Z", "estimatedHours": 2 },
    { "title": "B", "dueDate": "2024-01-01", "dependencies": null }
  ]
}"#,
    );

    let batch = load_and_validate(file.path()).unwrap();

    assert_eq!(batch.tasks[0].estimated_hours, Some(2));
    assert!(batch.tasks[1].dependencies.is_empty());
    assert_eq!(recommend_order(&batch.tasks), titles(&["B", "A"]));
}

#[test]
fn missing_or_null_task_list_is_an_empty_batch() {
    let raw = parse_batch(r#"{ "tasks": null }"#, InputFormat::Json).unwrap();
    let batch = taskorder::TaskBatch::try_from(raw).unwrap();
    assert!(batch.is_empty());

    let raw = parse_batch("", InputFormat::Toml).unwrap();
    let batch = taskorder::TaskBatch::try_from(raw).unwrap();
    assert!(batch.is_empty());
    assert!(recommend_order(&batch.tasks).is_empty());
}

#[test]
fn due_date_shapes_are_normalised_to_utc() {
    let midnight = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
    let ten = Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap();

    assert_eq!(parse_due_date("2024-01-05"), Some(midnight));
    assert_eq!(parse_due_date("2024-01-05T10:00:00Z"), Some(ten));
    assert_eq!(parse_due_date("2024-01-05T12:00:00+02:00"), Some(ten));
    assert_eq!(parse_due_date("2024-01-05T10:00:00"), Some(ten));
    assert_eq!(parse_due_date("2024-01-05 10:00:00"), Some(ten));
    assert_eq!(parse_due_date(" 2024-01-05 "), Some(midnight));
    assert_eq!(parse_due_date("next tuesday"), None);
}

#[test]
fn validation_keeps_duplicates_dangling_and_cycles() {
    let batch = BatchBuilder::new()
        .with_task(RawTaskBuilder::new("A").due("2024-01-10").after("B").build())
        .with_task(RawTaskBuilder::new("B").due("2024-01-05").after("A").build())
        .with_task(RawTaskBuilder::new("C").after("Ghost").build())
        .with_task(RawTaskBuilder::new("C").build())
        .build();

    assert_eq!(batch.len(), 4);
}

#[test]
fn blank_due_date_counts_as_missing() {
    let batch = BatchBuilder::new()
        .with_task(RawTaskBuilder::new("A").due("  ").build())
        .build();

    assert_eq!(batch.tasks[0].due_date, None);
}

#[test]
fn titles_and_dependencies_are_kept_verbatim() {
    let batch = BatchBuilder::new()
        .with_task(RawTaskBuilder::new(" A ").build())
        .with_task(RawTaskBuilder::new("B").after(" A").after("").build())
        .build();

    assert_eq!(batch.tasks[0].title, " A ");
    assert_eq!(
        batch.tasks[1].dependencies.iter().collect::<Vec<_>>(),
        vec!["", " A"]
    );
}

#[test]
fn empty_dependency_string_still_selects_the_graph_path() {
    let file = write_temp(
        ".json",
        r#"{
  "tasks": [
    { "title": "A", "dueDate": "2024-01-01", "estimatedHours": 5 },
    { "title": "B", "dueDate": "2024-01-01", "estimatedHours": 2, "dependencies": [""] }
  ]
}"#,
    );

    let batch = load_and_validate(file.path()).unwrap();

    // Same due date: the traversal breaks the tie by title, not by estimate.
    assert_eq!(recommend_order(&batch.tasks), titles(&["A", "B"]));
}

#[test]
fn padded_dependency_does_not_match_a_title() {
    let file = write_temp(
        ".json",
        r#"{
  "tasks": [
    { "title": "Design", "dueDate": "2024-01-05" },
    { "title": "Build", "dueDate": "2024-01-03", "dependencies": [" Design "] }
  ]
}"#,
    );

    let batch = load_and_validate(file.path()).unwrap();

    assert_eq!(recommend_order(&batch.tasks), titles(&["Build", "Design"]));
}
