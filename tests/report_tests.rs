use desktop_e2e::report::console::format_console_report;
use desktop_e2e::report::junit::{escape_xml, generate_junit_xml};
use desktop_e2e::report::report_model::TestSuiteReport;
use desktop_e2e::scenario::scenario_model::ScenarioResult;
use desktop_e2e::trace::trace::{StepRecord, StepStatus};

// ============================================================================
// Helper builders
// ============================================================================

fn step(label: &str, depth: usize, error: Option<&str>) -> StepRecord {
    StepRecord {
        label: label.to_string(),
        depth,
        status: if error.is_some() { StepStatus::Failed } else { StepStatus::Passed },
        error: error.map(str::to_string),
        duration_ms: Some(12),
    }
}

fn passing_result(name: &str) -> ScenarioResult {
    ScenarioResult {
        scenario: name.to_string(),
        passed: true,
        steps: vec![step("Communities portal is shown", 0, None)],
        error: None,
        duration_ms: Some(250),
    }
}

fn failing_result(name: &str) -> ScenarioResult {
    let error = "Timed out after 5000 ms waiting for 'banner'";
    ScenarioResult {
        scenario: name.to_string(),
        passed: false,
        steps: vec![
            step("Communities portal is shown", 0, None),
            step("Open create community popup", 0, Some(error)),
        ],
        error: Some(error.to_string()),
        duration_ms: Some(5100),
    }
}

// ============================================================================
// TestSuiteReport
// ============================================================================

#[test]
fn report_counts_results() {
    let report = TestSuiteReport::from_results(
        "suite",
        vec![passing_result("a"), failing_result("b"), passing_result("c")],
    );
    assert_eq!(report.total, 3);
    assert_eq!(report.passed, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.all_passed());
}

#[test]
fn empty_report_passes() {
    let report = TestSuiteReport::from_results("empty", vec![]);
    assert!(report.all_passed());
    assert_eq!(report.total, 0);
}

// ============================================================================
// Console
// ============================================================================

#[test]
fn console_lists_failed_steps_only_for_failures() {
    let report = TestSuiteReport::from_results(
        "desktop-e2e",
        vec![passing_result("portal-visible"), failing_result("open-create-community")],
    )
    .with_duration(5400);

    let out = format_console_report(&report);

    assert!(out.starts_with("=== Test Suite: desktop-e2e ===\n"));
    assert!(out.contains("\u{2713} PASS  portal-visible (1 steps)"));
    assert!(out.contains("\u{2717} FAIL  open-create-community (2 steps)"));
    assert!(out.contains("\u{2717} Open create community popup — Timed out"));
    assert!(out.contains("=== Results: 1 passed, 1 failed (2 total) in 5.4s ==="));
    assert!(!out.contains("[ERROR]"), "error already shown on its step");
}

#[test]
fn console_shows_error_raised_outside_steps() {
    let mut result = failing_result("x");
    result.steps.clear();
    result.error = Some("Driver I/O error: pipe closed".into());
    let report = TestSuiteReport::from_results("s", vec![result]);

    let out = format_console_report(&report);
    assert!(out.contains("[ERROR] Driver I/O error: pipe closed"));
}

#[test]
fn console_indents_nested_steps() {
    let mut result = failing_result("x");
    result.steps.push(step("Open create community popup from banner", 1, Some("gone")));
    let report = TestSuiteReport::from_results("s", vec![result]);

    let out = format_console_report(&report);
    assert!(out.contains("        \u{2717} Open create community popup from banner — gone"));
}

// ============================================================================
// JUnit
// ============================================================================

#[test]
fn junit_marks_failures_with_innermost_step() {
    let mut failing = failing_result("open-create-community");
    failing.steps.push(step("Open create community popup from banner", 1, Some("boom")));
    let report = TestSuiteReport::from_results("suite", vec![passing_result("ok"), failing])
        .with_duration(1234);

    let xml = generate_junit_xml(&report);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<testsuite name=\"suite\" tests=\"2\" failures=\"1\" time=\"1.234\">"));
    assert!(xml.contains("<testcase name=\"ok\" classname=\"desktop-e2e\" time=\"0.250\" />"));
    assert!(xml.contains("message=\"Open create community popup from banner\""));
    assert!(xml.contains("Step &apos;Open create community popup&apos;: Timed out"));
    assert!(xml.contains("Error: Timed out"));
}

#[test]
fn junit_without_failed_steps_reports_execution_error() {
    let mut result = failing_result("x");
    result.steps.clear();
    let xml = generate_junit_xml(&TestSuiteReport::from_results("s", vec![result]));
    assert!(xml.contains("message=\"execution error\""));
}

#[test]
fn escape_xml_handles_all_specials() {
    assert_eq!(
        escape_xml(r#"<a href="x">'&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&apos;&amp;&apos;&lt;/a&gt;"
    );
}
