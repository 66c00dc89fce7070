use std::cell::RefCell;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::driver::driver::UiDriver;
use crate::driver::error::UiError;

/// How to start the automation bridge process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriverConfig {
    #[serde(default = "default_command")]
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
        }
    }
}

fn default_command() -> String {
    "squish-bridge".to_string()
}

/// Request sent to the bridge over stdin (one JSON line).
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DriverRequest {
    Count { locator: String },
    Visible { locator: String },
    Enabled { locator: String },
    Click { locator: String },
    Quit,
}

impl DriverRequest {
    pub fn count(locator: &str) -> Self {
        DriverRequest::Count { locator: locator.to_string() }
    }

    pub fn visible(locator: &str) -> Self {
        DriverRequest::Visible { locator: locator.to_string() }
    }

    pub fn enabled(locator: &str) -> Self {
        DriverRequest::Enabled { locator: locator.to_string() }
    }

    pub fn click(locator: &str) -> Self {
        DriverRequest::Click { locator: locator.to_string() }
    }

    /// Name used in logs and protocol errors.
    pub fn command_name(&self) -> &'static str {
        match self {
            DriverRequest::Count { .. } => "count",
            DriverRequest::Visible { .. } => "visible",
            DriverRequest::Enabled { .. } => "enabled",
            DriverRequest::Click { .. } => "click",
            DriverRequest::Quit => "quit",
        }
    }
}

/// Response received from the bridge over stdout (one JSON line).
#[derive(Debug, Deserialize, PartialEq)]
pub struct DriverResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub ready: Option<bool>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

struct Pipes {
    stdin: Option<ChildStdin>,
    reader: BufReader<ChildStdout>,
}

/// A live automation bridge.
///
/// Launches a long-lived process attached to the application under test.
/// Commands are sent as NDJSON over stdin, responses read from stdout.
pub struct DriverSession {
    child: RefCell<Child>,
    pipes: RefCell<Pipes>,
    command: String,
}

impl DriverSession {
    /// Spawn the bridge and wait for its ready signal.
    pub fn launch(config: &DriverConfig) -> Result<Self, UiError> {
        tracing::info!(
            command = %config.command,
            args = ?config.args,
            "launching automation bridge"
        );

        let mut child = Command::new(&config.command)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| UiError::DriverSpawn {
                command: config.command.clone(),
                source: e,
            })?;

        let (stdin, reader) = match Self::handshake(&mut child, &config.command) {
            Ok(pipes) => pipes,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };

        Ok(DriverSession {
            child: RefCell::new(child),
            pipes: RefCell::new(Pipes {
                stdin: Some(stdin),
                reader,
            }),
            command: config.command.clone(),
        })
    }

    /// Take the child's pipes and read the ready signal.
    fn handshake(
        child: &mut Child,
        command: &str,
    ) -> Result<(ChildStdin, BufReader<ChildStdout>), UiError> {
        let stdin = child.stdin.take().ok_or_else(|| {
            UiError::DriverIo(format!("Failed to capture stdin of {}", command))
        })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            UiError::DriverIo(format!("Failed to capture stdout of {}", command))
        })?;

        let mut reader = BufReader::new(stdout);

        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| UiError::DriverIo(format!("Failed to read ready signal: {}", e)))?;

        let response: DriverResponse =
            serde_json::from_str(line.trim()).map_err(|e| UiError::JsonParse {
                context: "bridge ready signal".into(),
                source: e,
            })?;

        if !response.ok || response.ready != Some(true) {
            return Err(UiError::DriverProtocol {
                command: "launch".into(),
                error: "Did not receive ready signal from bridge".into(),
            });
        }

        Ok((stdin, reader))
    }

    /// Send a request and read the response.
    fn send(&self, request: &DriverRequest) -> Result<DriverResponse, UiError> {
        let json = serde_json::to_string(request).map_err(|e| UiError::JsonSerialize {
            context: "DriverRequest".into(),
            source: e,
        })?;

        tracing::trace!(request = %json, "-> bridge");

        let mut pipes = self.pipes.borrow_mut();
        let stdin = pipes
            .stdin
            .as_mut()
            .ok_or_else(|| UiError::DriverIo("Bridge session already closed".into()))?;

        writeln!(stdin, "{}", json).map_err(|e| {
            UiError::DriverIo(format!("Failed to write to {} stdin: {}", self.command, e))
        })?;

        stdin.flush().map_err(|e| {
            UiError::DriverIo(format!("Failed to flush {} stdin: {}", self.command, e))
        })?;

        let mut line = String::new();
        pipes.reader.read_line(&mut line).map_err(|e| {
            UiError::DriverIo(format!("Failed to read from {} stdout: {}", self.command, e))
        })?;

        if line.trim().is_empty() {
            return Err(UiError::DriverIo(format!(
                "Empty response from {} (process may have died)",
                self.command
            )));
        }

        tracing::trace!(response = %line.trim(), "<- bridge");

        serde_json::from_str(line.trim()).map_err(|e| UiError::JsonParse {
            context: "bridge response".into(),
            source: e,
        })
    }

    /// Send a request and verify it succeeded.
    fn send_ok(&self, request: &DriverRequest) -> Result<DriverResponse, UiError> {
        let response = self.send(request)?;
        if !response.ok {
            return Err(UiError::DriverProtocol {
                command: request.command_name().into(),
                error: response.error.unwrap_or_else(|| "Unknown error".into()),
            });
        }
        Ok(response)
    }

    /// Shut the bridge down. Safe to call more than once.
    pub fn quit(&self) -> Result<(), UiError> {
        if self.pipes.borrow().stdin.is_none() {
            return Ok(());
        }
        // Best-effort: the bridge may already be gone.
        let _ = self.send(&DriverRequest::Quit);
        self.pipes.borrow_mut().stdin.take();
        let _ = self.child.borrow_mut().wait();
        tracing::info!(command = %self.command, "automation bridge stopped");
        Ok(())
    }
}

impl UiDriver for DriverSession {
    fn count(&self, locator: &str) -> Result<usize, UiError> {
        let response = self.send_ok(&DriverRequest::count(locator))?;
        Ok(response.count.unwrap_or(0))
    }

    fn is_visible(&self, locator: &str) -> Result<bool, UiError> {
        let response = self.send_ok(&DriverRequest::visible(locator))?;
        Ok(response.visible.unwrap_or(false))
    }

    fn is_enabled(&self, locator: &str) -> Result<bool, UiError> {
        let response = self.send_ok(&DriverRequest::enabled(locator))?;
        Ok(response.enabled.unwrap_or(false))
    }

    fn click(&self, locator: &str) -> Result<(), UiError> {
        self.send_ok(&DriverRequest::click(locator))?;
        Ok(())
    }
}

impl Drop for DriverSession {
    fn drop(&mut self) {
        let _ = self.quit();
    }
}
