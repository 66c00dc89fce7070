use std::time::Instant;

use crate::driver::error::UiError;
use crate::driver::ui::Ui;
use crate::scenario::scenario_model::{Scenario, ScenarioResult};
use crate::screens::community_portal::CommunitiesPortal;

pub const PORTAL_SHOWN_STEP: &str = "Communities portal is shown";
pub const COMMUNITY_SCREEN_SHOWN_STEP: &str = "Community screen is shown";

/// Executes scenarios against a `Ui`.
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Run one scenario. Failures are captured in the result, never raised.
    pub fn run(scenario: Scenario, ui: &Ui) -> ScenarioResult {
        // Each scenario reports only its own steps.
        ui.steps().take();

        tracing::info!(scenario = scenario.name(), "running scenario");
        let start = Instant::now();
        let outcome = Self::execute(scenario, ui);
        let duration_ms = start.elapsed().as_millis();

        let error = outcome.err().map(|e| e.to_string());
        match &error {
            Some(e) => tracing::warn!(scenario = scenario.name(), error = %e, "scenario failed"),
            None => tracing::info!(
                scenario = scenario.name(),
                duration_ms = duration_ms as u64,
                "scenario passed"
            ),
        }

        ScenarioResult {
            scenario: scenario.name().to_string(),
            passed: error.is_none(),
            steps: ui.steps().take(),
            error,
            duration_ms: Some(duration_ms),
        }
    }

    /// Run scenarios in order, one result each.
    pub fn run_all(scenarios: &[Scenario], ui: &Ui) -> Vec<ScenarioResult> {
        scenarios.iter().map(|s| Self::run(*s, ui)).collect()
    }

    fn execute(scenario: Scenario, ui: &Ui) -> Result<(), UiError> {
        let portal = CommunitiesPortal::new(ui);
        ui.step(PORTAL_SHOWN_STEP, || portal.root().wait_until_appears().map(|_| ()))?;

        match scenario {
            Scenario::PortalVisible => Ok(()),
            Scenario::OpenCreateCommunity => {
                let community = portal.open_create_community_popup()?;
                ui.step(COMMUNITY_SCREEN_SHOWN_STEP, || {
                    community.wait_until_appears().map(|_| ())
                })
            }
        }
    }
}
