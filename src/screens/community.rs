use crate::driver::error::UiError;
use crate::driver::ui::Ui;
use crate::elements::object::UiObject;
use crate::screens::names;

/// A community's main layout.
#[derive(Debug, Clone)]
pub struct CommunityScreen {
    root: UiObject,
}

impl CommunityScreen {
    pub fn new(ui: &Ui) -> Self {
        Self {
            root: UiObject::new(ui, names::COMMUNITY_SCREEN_LAYOUT),
        }
    }

    pub fn root(&self) -> &UiObject {
        &self.root
    }

    pub fn is_visible(&self) -> Result<bool, UiError> {
        self.root.is_visible()
    }

    pub fn wait_until_appears(self) -> Result<Self, UiError> {
        self.root.wait_until_appears()?;
        Ok(self)
    }
}
