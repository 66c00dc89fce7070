use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::trace::trace::StepRecord;

/// A test case the runner knows how to execute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// The communities portal is shown.
    PortalVisible,

    /// Open the create community popup from the portal.
    OpenCreateCommunity,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::PortalVisible, Scenario::OpenCreateCommunity];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::PortalVisible => "portal-visible",
            Scenario::OpenCreateCommunity => "open-create-community",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|sc| sc.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Scenario::ALL.iter().map(|sc| sc.name()).collect();
                format!("unknown scenario '{}' (known: {})", s, known.join(", "))
            })
    }
}

/// Result of running one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: String,

    pub passed: bool,

    /// Annotated steps in the order they were opened
    pub steps: Vec<StepRecord>,

    /// Error that stopped the scenario, if any
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

impl ScenarioResult {
    pub fn failed_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|s| !s.passed())
    }
}
