use std::rc::Rc;
use std::time::Instant;

use crate::cli::config::{AppConfig, DriverKind};
use crate::driver::driver::UiDriver;
use crate::driver::scripted::{ScriptedDriver, Widget};
use crate::driver::session::DriverSession;
use crate::driver::ui::Ui;
use crate::driver::wait::WaitConfig;
use crate::report::console::format_console_report;
use crate::report::junit::generate_junit_xml;
use crate::report::report_model::TestSuiteReport;
use crate::scenario::runner::ScenarioRunner;
use crate::scenario::scenario_model::Scenario;
use crate::screens::names;
use crate::trace::logger::StepLogger;

/// Options for `run`, resolved from CLI flags and the config file.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub scenarios: Vec<Scenario>,
    pub driver: DriverKind,
    pub wait: WaitConfig,
    pub format: String,
    pub output: Option<String>,
    pub trace_file: Option<String>,
}

/// Run scenarios and emit a report. Returns whether every scenario passed.
pub fn cmd_run(
    options: &RunOptions,
    config: &AppConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    if options.scenarios.is_empty() {
        eprintln!("No scenarios selected");
        return Ok(true);
    }

    let session = match options.driver {
        DriverKind::Session => Some(Rc::new(DriverSession::launch(&config.driver)?)),
        DriverKind::Scripted => None,
    };
    let driver: Rc<dyn UiDriver> = match &session {
        Some(s) => s.clone() as Rc<dyn UiDriver>,
        None => Rc::new(happy_path_driver()),
    };

    let steps = match &options.trace_file {
        Some(path) => StepLogger::with_trace_file(path),
        None => StepLogger::new(),
    };
    let ui = Ui::new(driver).with_wait(options.wait).with_steps(steps);

    let start = Instant::now();
    let results = ScenarioRunner::run_all(&options.scenarios, &ui);
    let duration = start.elapsed().as_millis();

    if let Some(s) = &session {
        s.quit()?;
    }

    let report = TestSuiteReport::from_results("desktop-e2e", results).with_duration(duration);
    let all_passed = report.all_passed();

    let output_content = render_report(&report, &options.format);

    match &options.output {
        Some(path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(all_passed)
}

/// Render a report in the named format; anything unknown falls back to console.
pub fn render_report(report: &TestSuiteReport, format: &str) -> String {
    match format {
        "junit" => generate_junit_xml(report),
        _ => format_console_report(report),
    }
}

/// Parse a `--scenario` value into the scenarios to run.
pub fn select_scenarios(name: &str) -> Result<Vec<Scenario>, String> {
    if name == "all" {
        return Ok(Scenario::ALL.to_vec());
    }
    Ok(vec![name.parse()?])
}

/// Render the locator catalog as an aligned table.
pub fn cmd_locators() -> String {
    let width = names::ALL.iter().map(|(d, _)| d.len()).max().unwrap_or(0);
    names::ALL
        .iter()
        .map(|(description, locator)| {
            format!("{:width$}  {}\n", description, locator, width = width)
        })
        .collect()
}

/// Application where every locator resolves and each click reveals the next screen.
pub fn happy_path_driver() -> ScriptedDriver {
    ScriptedDriver::new()
        .with_widget(names::COMMUNITIES_PORTAL_LAYOUT, Widget::shown())
        .with_widget(names::CREATE_NEW_COMMUNITY_BUTTON, Widget::shown())
        .reveal_on_click(
            names::CREATE_NEW_COMMUNITY_BUTTON,
            names::CREATE_COMMUNITIES_BANNER,
            std::time::Duration::ZERO,
        )
        .reveal_on_click(
            names::CREATE_NEW_COMMUNITY_BUTTON,
            names::CREATE_COMMUNITIES_BANNER_BUTTON,
            std::time::Duration::ZERO,
        )
        .reveal_on_click(
            names::CREATE_COMMUNITIES_BANNER_BUTTON,
            names::COMMUNITY_SCREEN_LAYOUT,
            std::time::Duration::ZERO,
        )
}
