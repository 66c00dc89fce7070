#![allow(dead_code)]

use std::rc::Rc;
use std::time::Duration;

use desktop_e2e::driver::scripted::{ScriptedDriver, Widget};
use desktop_e2e::driver::ui::Ui;
use desktop_e2e::driver::wait::WaitConfig;
use desktop_e2e::screens::names;

/// Short timeout so failing waits finish quickly.
pub fn fast_wait() -> WaitConfig {
    WaitConfig::new(Duration::from_millis(150), Duration::from_millis(10))
}

/// Portal shown with its button, nothing wired to the click.
pub fn portal_only() -> ScriptedDriver {
    ScriptedDriver::new()
        .with_widget(names::COMMUNITIES_PORTAL_LAYOUT, Widget::shown())
        .with_widget(names::CREATE_NEW_COMMUNITY_BUTTON, Widget::shown())
}

/// Portal whose button reveals the banner (after `delay`), whose button in turn
/// reveals the community screen.
pub fn portal_with_banner(delay: Duration) -> ScriptedDriver {
    portal_only()
        .reveal_on_click(
            names::CREATE_NEW_COMMUNITY_BUTTON,
            names::CREATE_COMMUNITIES_BANNER,
            delay,
        )
        .reveal_on_click(
            names::CREATE_NEW_COMMUNITY_BUTTON,
            names::CREATE_COMMUNITIES_BANNER_BUTTON,
            delay,
        )
        .reveal_on_click(
            names::CREATE_COMMUNITIES_BANNER_BUTTON,
            names::COMMUNITY_SCREEN_LAYOUT,
            Duration::ZERO,
        )
}

/// Wrap a scripted driver in a `Ui`, keeping a handle to inspect the journal.
pub fn ui_for(driver: ScriptedDriver) -> (Rc<ScriptedDriver>, Ui) {
    let driver = Rc::new(driver);
    let ui = Ui::new(driver.clone()).with_wait(fast_wait());
    (driver, ui)
}
