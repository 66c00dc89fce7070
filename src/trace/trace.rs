use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Started,
    Passed,
    Failed,
}

/// One line of the JSONL step trace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepEvent {
    pub timestamp_ms: u128,
    pub label: String,

    /// Nesting level: 0 for a test-case step, 1 for a step invoked from inside it, ...
    pub depth: usize,

    pub status: StepStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

impl StepEvent {
    pub fn now(label: &str, depth: usize, status: StepStatus) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            label: label.to_string(),
            depth,
            status,
            error: None,
            duration_ms: None,
        }
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Final state of an annotated step, as shown in reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepRecord {
    pub label: String,
    pub depth: usize,
    pub status: StepStatus,
    pub error: Option<String>,
    pub duration_ms: Option<u128>,
}

impl StepRecord {
    pub fn passed(&self) -> bool {
        self.status == StepStatus::Passed
    }
}
