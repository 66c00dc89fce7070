use crate::report::report_model::TestSuiteReport;

// ============================================================================
// JUnit XML reporter — standard CI integration format
// ============================================================================

/// Generate a JUnit XML report for CI systems.
///
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <testsuite name="..." tests="2" failures="1" time="1.234">
///   <testcase name="portal-visible" classname="desktop-e2e" />
///   <testcase name="open-create-community" classname="desktop-e2e">
///     <failure message="Open create community popup" type="StepFailure">...</failure>
///   </testcase>
/// </testsuite>
/// ```
pub fn generate_junit_xml(report: &TestSuiteReport) -> String {
    let time_attr = report
        .duration_ms
        .map(|ms| format!(" time=\"{:.3}\"", ms as f64 / 1000.0))
        .unwrap_or_default();

    let mut cases = String::new();
    for result in &report.results {
        let case_time = result
            .duration_ms
            .map(|ms| format!(" time=\"{:.3}\"", ms as f64 / 1000.0))
            .unwrap_or_default();

        if result.passed {
            cases.push_str(&format!(
                "  <testcase name=\"{}\" classname=\"desktop-e2e\"{} />\n",
                escape_xml(&result.scenario),
                case_time
            ));
            continue;
        }

        // The innermost failed step is where the error was raised.
        let failed_step = result.failed_steps().last();
        let message = failed_step
            .map(|s| s.label.clone())
            .unwrap_or_else(|| "execution error".to_string());

        let body: Vec<String> = result
            .failed_steps()
            .map(|s| format!("Step '{}': {}", s.label, s.error.as_deref().unwrap_or("failed")))
            .chain(result.error.iter().map(|e| format!("Error: {}", e)))
            .collect();

        cases.push_str(&format!(
            "  <testcase name=\"{name}\" classname=\"desktop-e2e\"{time}>\n    <failure message=\"{message}\" type=\"StepFailure\">{body}</failure>\n  </testcase>\n",
            name = escape_xml(&result.scenario),
            time = case_time,
            message = escape_xml(&message),
            body = escape_xml(&body.join("\n")),
        ));
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<testsuite name=\"{name}\" tests=\"{tests}\" failures=\"{failures}\"{time}>\n{cases}</testsuite>\n",
        name = escape_xml(&report.suite_name),
        tests = report.total,
        failures = report.failed,
        time = time_attr,
        cases = cases,
    )
}

/// Escape XML special characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
