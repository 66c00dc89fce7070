use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// Locator resolved to zero or several live widgets
    #[error("Element '{locator}' not found: expected exactly 1 match, got {matches}")]
    ElementNotFound { locator: String, matches: usize },

    /// Widget exists but cannot be interacted with (hidden or disabled)
    #[error("Element '{locator}' not ready: {reason}")]
    NotReady { locator: String, reason: String },

    /// An awaited UI condition did not hold within the wait budget
    #[error("Timed out after {waited_ms} ms waiting for '{locator}'")]
    Timeout { locator: String, waited_ms: u128 },

    /// Automation bridge process failed to spawn
    #[error("Failed to spawn {command} (is the automation bridge installed?): {source}")]
    DriverSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Pipe to the automation bridge broke or returned nothing
    #[error("Driver I/O error: {0}")]
    DriverIo(String),

    /// Automation bridge answered a command with ok=false
    #[error("Driver command '{command}' failed: {error}")]
    DriverProtocol { command: String, error: String },

    #[error("JSON parse error ({context}): {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialize error ({context}): {source}")]
    JsonSerialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl UiError {
    /// True for the lookup failures a test step reports as "element not found/not ready".
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, UiError::ElementNotFound { .. } | UiError::NotReady { .. })
    }
}
