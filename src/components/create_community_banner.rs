use crate::driver::error::UiError;
use crate::driver::ui::Ui;
use crate::elements::button::Button;
use crate::elements::object::UiObject;
use crate::screens::community::CommunityScreen;
use crate::screens::names;

pub const OPEN_FROM_BANNER_STEP: &str = "Open create community popup from banner";

/// Overlay shown after "Create New Community" is clicked on the portal.
pub struct CreateCommunitiesBanner {
    root: UiObject,
    create_button: Button,
}

impl CreateCommunitiesBanner {
    pub fn new(ui: &Ui) -> Self {
        Self {
            root: UiObject::new(ui, names::CREATE_COMMUNITIES_BANNER),
            create_button: Button::new(ui, names::CREATE_COMMUNITIES_BANNER_BUTTON),
        }
    }

    pub fn root(&self) -> &UiObject {
        &self.root
    }

    pub fn wait_until_appears(self) -> Result<Self, UiError> {
        self.root.wait_until_appears()?;
        Ok(self)
    }

    pub fn open_create_community_popup(&self) -> Result<CommunityScreen, UiError> {
        let ui = self.root.ui();
        ui.step(OPEN_FROM_BANNER_STEP, || {
            self.create_button.click()?;
            Ok(CommunityScreen::new(ui))
        })
    }
}
