use std::time::Duration;

use desktop_e2e::driver::error::UiError;
use desktop_e2e::trace::logger::StepLogger;
use desktop_e2e::trace::trace::{StepEvent, StepStatus};

mod common;
use common::{portal_with_banner, ui_for};

#[test]
fn step_passes_result_through_and_records_outcome() {
    let (_driver, ui) = ui_for(portal_with_banner(Duration::ZERO));

    let value = ui.step("compute", || Ok::<_, UiError>(42)).unwrap();
    let err = ui
        .step("break", || Err::<(), _>(UiError::DriverIo("gone".into())))
        .unwrap_err();

    assert_eq!(value, 42);
    assert!(matches!(err, UiError::DriverIo(_)));

    let records = ui.steps().records();
    assert_eq!(records[0].status, StepStatus::Passed);
    assert_eq!(records[1].status, StepStatus::Failed);
    assert_eq!(records[1].error.as_deref(), Some("Driver I/O error: gone"));
    assert!(records.iter().all(|r| r.depth == 0));
}

#[test]
fn take_drains_the_log() {
    let steps = StepLogger::new();
    let id = steps.begin("one");
    steps.finish(id, None, 1);

    assert_eq!(steps.take().len(), 1);
    assert!(steps.records().is_empty());
}

#[test]
fn clones_share_one_log() {
    let steps = StepLogger::new();
    let other = steps.clone();
    let id = other.begin("shared");
    other.finish(id, None, 0);
    assert_eq!(steps.count("shared"), 1);
}

#[test]
fn trace_file_gets_one_json_line_per_event() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("steps.jsonl");

    let steps = StepLogger::with_trace_file(&path);
    let outer = steps.begin("outer");
    let inner = steps.begin("inner");
    steps.finish(inner, Some("boom"), 3);
    steps.finish(outer, Some("boom"), 5);

    let content = std::fs::read_to_string(&path).unwrap();
    let events: Vec<StepEvent> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(events.len(), 4);
    assert_eq!(events[0].status, StepStatus::Started);
    assert_eq!(events[1].label, "inner");
    assert_eq!(events[1].depth, 1);
    assert_eq!(events[2].status, StepStatus::Failed);
    assert_eq!(events[2].error.as_deref(), Some("boom"));
    assert_eq!(events[3].label, "outer");
    assert_eq!(events[3].duration_ms, Some(5));
}

#[test]
fn unwritable_trace_file_falls_back_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened for appending
    let steps = StepLogger::with_trace_file(dir.path());
    let id = steps.begin("still recorded");
    steps.finish(id, None, 0);
    assert_eq!(steps.count("still recorded"), 1);
}

#[test]
fn started_event_omits_empty_fields() {
    let event = StepEvent::now("label", 0, StepStatus::Started);
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["status"], "started");
    assert!(json.get("error").is_none());
    assert!(json.get("duration_ms").is_none());
}
