use crate::report::report_model::TestSuiteReport;
use crate::trace::trace::StepStatus;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a suite report for terminal output.
///
/// ```text
/// === Test Suite: desktop-e2e ===
///
/// ✓ PASS  portal-visible (1 steps)
/// ✗ FAIL  open-create-community (2 steps)
///     ✓ Communities portal is shown
///     ✗ Open create community popup — Timed out after 5000 ms waiting for '...'
///
/// === Results: 1 passed, 1 failed (2 total) ===
/// ```
pub fn format_console_report(report: &TestSuiteReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Test Suite: {} ===\n\n", report.suite_name));

    for result in &report.results {
        let marker = if result.passed {
            "\u{2713} PASS"
        } else {
            "\u{2717} FAIL"
        };

        out.push_str(&format!(
            "{}  {} ({} steps)\n",
            marker,
            result.scenario,
            result.steps.len()
        ));

        if result.passed {
            continue;
        }

        for step in &result.steps {
            let indent = "    ".repeat(step.depth + 1);
            let mark = match step.status {
                StepStatus::Passed => "\u{2713}",
                StepStatus::Failed => "\u{2717}",
                StepStatus::Started => "\u{2026}",
            };
            match &step.error {
                Some(e) => out.push_str(&format!("{}{} {} — {}\n", indent, mark, step.label, e)),
                None => out.push_str(&format!("{}{} {}\n", indent, mark, step.label)),
            }
        }

        // Errors raised outside any step
        if let Some(ref error) = result.error {
            if result.failed_steps().next().is_none() {
                out.push_str(&format!("    [ERROR] {}\n", error));
            }
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total)",
        report.passed, report.failed, report.total
    ));

    if let Some(ms) = report.duration_ms {
        let secs = ms as f64 / 1000.0;
        out.push_str(&format!(" in {:.1}s", secs));
    }

    out.push_str(" ===\n");

    out
}
