use crate::driver::error::UiError;
use crate::driver::ui::Ui;
use crate::elements::object::UiObject;

#[derive(Debug, Clone)]
pub struct Button {
    object: UiObject,
}

impl Button {
    pub fn new(ui: &Ui, locator: &'static str) -> Self {
        Self {
            object: UiObject::new(ui, locator),
        }
    }

    pub fn object(&self) -> &UiObject {
        &self.object
    }

    pub fn is_enabled(&self) -> Result<bool, UiError> {
        self.object.ui().driver().is_enabled(self.object.locator())
    }

    /// Click the button.
    ///
    /// The locator must resolve to exactly one widget that is visible and enabled.
    /// The lookup happens once; there is no implicit wait.
    pub fn click(&self) -> Result<(), UiError> {
        let locator = self.object.locator();
        let driver = self.object.ui().driver();

        let matches = driver.count(locator)?;
        if matches != 1 {
            return Err(UiError::ElementNotFound {
                locator: locator.to_string(),
                matches,
            });
        }
        if !driver.is_visible(locator)? {
            return Err(UiError::NotReady {
                locator: locator.to_string(),
                reason: "not visible".into(),
            });
        }
        if !driver.is_enabled(locator)? {
            return Err(UiError::NotReady {
                locator: locator.to_string(),
                reason: "disabled".into(),
            });
        }

        tracing::debug!(locator, "click");
        driver.click(locator)
    }
}
