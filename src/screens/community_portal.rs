use crate::components::create_community_banner::CreateCommunitiesBanner;
use crate::driver::error::UiError;
use crate::driver::ui::Ui;
use crate::elements::button::Button;
use crate::elements::object::UiObject;
use crate::screens::community::CommunityScreen;
use crate::screens::names;

pub const OPEN_CREATE_COMMUNITY_POPUP_STEP: &str = "Open create community popup";

/// The "Communities Portal" layout of the main window.
pub struct CommunitiesPortal {
    root: UiObject,
    create_community_button: Button,
}

impl CommunitiesPortal {
    /// Binds the portal's locators. Makes no driver call.
    pub fn new(ui: &Ui) -> Self {
        Self {
            root: UiObject::new(ui, names::COMMUNITIES_PORTAL_LAYOUT),
            create_community_button: Button::new(ui, names::CREATE_NEW_COMMUNITY_BUTTON),
        }
    }

    pub fn root(&self) -> &UiObject {
        &self.root
    }

    /// Click "Create New Community", wait for the banner, and open the create popup
    /// from it.
    ///
    /// Fails with `ElementNotFound`/`NotReady` if the button cannot be clicked and with
    /// `Timeout` if the banner never shows. Errors from the banner propagate unchanged.
    pub fn open_create_community_popup(&self) -> Result<CommunityScreen, UiError> {
        let ui = self.root.ui();
        ui.step(OPEN_CREATE_COMMUNITY_POPUP_STEP, || {
            self.create_community_button.click()?;
            CreateCommunitiesBanner::new(ui)
                .wait_until_appears()?
                .open_create_community_popup()
        })
    }
}
