use crate::driver::error::UiError;
use crate::driver::ui::Ui;
use crate::driver::wait::poll_until;

/// A named widget or container in the application under test.
///
/// Holds only the locator; nothing is looked up until a method is called.
#[derive(Clone)]
pub struct UiObject {
    locator: &'static str,
    ui: Ui,
}

impl std::fmt::Debug for UiObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiObject")
            .field("locator", &self.locator)
            .finish()
    }
}

impl UiObject {
    pub fn new(ui: &Ui, locator: &'static str) -> Self {
        Self {
            locator,
            ui: ui.clone(),
        }
    }

    pub fn locator(&self) -> &'static str {
        self.locator
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    /// True when at least one live widget matches.
    pub fn exists(&self) -> Result<bool, UiError> {
        Ok(self.ui.driver().count(self.locator)? > 0)
    }

    pub fn is_visible(&self) -> Result<bool, UiError> {
        self.ui.driver().is_visible(self.locator)
    }

    /// Block until the object is visible, or fail with `Timeout`.
    pub fn wait_until_appears(&self) -> Result<&Self, UiError> {
        tracing::debug!(locator = self.locator, "waiting until appears");
        poll_until(self.locator, self.ui.wait_config(), || self.is_visible())?;
        Ok(self)
    }

    /// Block until the object is gone or hidden, or fail with `Timeout`.
    pub fn wait_until_hidden(&self) -> Result<(), UiError> {
        tracing::debug!(locator = self.locator, "waiting until hidden");
        poll_until(self.locator, self.ui.wait_config(), || {
            self.is_visible().map(|visible| !visible)
        })
    }
}
