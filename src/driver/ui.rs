use std::rc::Rc;
use std::time::Instant;

use crate::driver::driver::UiDriver;
use crate::driver::error::UiError;
use crate::driver::wait::WaitConfig;
use crate::trace::logger::StepLogger;

/// Everything a page object needs to talk to the application under test.
///
/// Cheap to clone; every page object keeps its own copy.
#[derive(Clone)]
pub struct Ui {
    driver: Rc<dyn UiDriver>,
    wait: WaitConfig,
    steps: StepLogger,
}

impl Ui {
    pub fn new(driver: Rc<dyn UiDriver>) -> Self {
        Self {
            driver,
            wait: WaitConfig::default(),
            steps: StepLogger::new(),
        }
    }

    pub fn with_wait(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_steps(mut self, steps: StepLogger) -> Self {
        self.steps = steps;
        self
    }

    pub fn driver(&self) -> &dyn UiDriver {
        self.driver.as_ref()
    }

    pub fn wait_config(&self) -> &WaitConfig {
        &self.wait
    }

    pub fn steps(&self) -> &StepLogger {
        &self.steps
    }

    /// Run `action` as an annotated step.
    ///
    /// The annotation is recorded before `action` runs and closed exactly once with
    /// the outcome. The result is returned unchanged.
    pub fn step<T, F>(&self, label: &str, action: F) -> Result<T, UiError>
    where
        F: FnOnce() -> Result<T, UiError>,
    {
        let id = self.steps.begin(label);
        let start = Instant::now();
        let result = action();
        let elapsed = start.elapsed().as_millis();

        match &result {
            Ok(_) => self.steps.finish(id, None, elapsed),
            Err(e) => self.steps.finish(id, Some(&e.to_string()), elapsed),
        }
        result
    }
}
