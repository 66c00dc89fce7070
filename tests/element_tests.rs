use std::time::{Duration, Instant};

use desktop_e2e::driver::error::UiError;
use desktop_e2e::driver::scripted::{Interaction, ScriptedDriver, Widget};
use desktop_e2e::driver::wait::{poll_until, WaitConfig};
use desktop_e2e::elements::button::Button;
use desktop_e2e::elements::object::UiObject;

mod common;
use common::ui_for;

const PANEL: &str = "mainWindow_panel";
const OK_BUTTON: &str = "mainWindow_ok_StatusButton";

// =========================================================================
// UiObject
// =========================================================================

#[test]
fn object_exists_and_visibility_follow_driver_state() {
    let driver = ScriptedDriver::new().with_widget(PANEL, Widget::hidden());
    let (driver, ui) = ui_for(driver);
    let panel = UiObject::new(&ui, PANEL);

    assert!(panel.exists().unwrap());
    assert!(!panel.is_visible().unwrap());

    driver.set_widget(PANEL, Widget::shown());
    assert!(panel.is_visible().unwrap());

    driver.remove_widget(PANEL);
    assert!(!panel.exists().unwrap());
}

#[test]
fn wait_until_appears_returns_immediately_when_visible() {
    let (driver, ui) = ui_for(ScriptedDriver::new().with_widget(PANEL, Widget::shown()));
    let panel = UiObject::new(&ui, PANEL);

    let start = Instant::now();
    let same = panel.wait_until_appears().unwrap();

    assert_eq!(same.locator(), PANEL);
    assert!(start.elapsed() < Duration::from_millis(100));
    assert_eq!(driver.journal(), vec![Interaction::Visible(PANEL.to_string())]);
}

#[test]
fn wait_until_appears_times_out_for_absent_object() {
    let (_driver, ui) = ui_for(ScriptedDriver::new());
    let err = UiObject::new(&ui, PANEL).wait_until_appears().unwrap_err();
    assert!(matches!(err, UiError::Timeout { ref locator, .. } if locator == PANEL));
}

#[test]
fn wait_until_hidden_succeeds_once_object_is_gone() {
    let driver = ScriptedDriver::new()
        .with_widget(OK_BUTTON, Widget::shown())
        .with_widget(PANEL, Widget::hidden());
    let (_driver, ui) = ui_for(driver);

    UiObject::new(&ui, PANEL).wait_until_hidden().unwrap();
    let err = UiObject::new(&ui, OK_BUTTON).wait_until_hidden().unwrap_err();
    assert!(matches!(err, UiError::Timeout { .. }));
}

// =========================================================================
// Button
// =========================================================================

#[test]
fn click_checks_then_clicks_once() {
    let (driver, ui) = ui_for(ScriptedDriver::new().with_widget(OK_BUTTON, Widget::shown()));

    Button::new(&ui, OK_BUTTON).click().unwrap();

    let ok = OK_BUTTON.to_string();
    assert_eq!(
        driver.journal(),
        vec![
            Interaction::Count(ok.clone()),
            Interaction::Visible(ok.clone()),
            Interaction::Enabled(ok.clone()),
            Interaction::Click(ok),
        ]
    );
}

#[test]
fn click_on_hidden_button_is_not_ready() {
    let (driver, ui) = ui_for(ScriptedDriver::new().with_widget(OK_BUTTON, Widget::hidden()));

    let err = Button::new(&ui, OK_BUTTON).click().unwrap_err();

    match err {
        UiError::NotReady { reason, .. } => assert_eq!(reason, "not visible"),
        other => panic!("expected NotReady, got {:?}", other),
    }
    assert!(driver.clicks().is_empty());
}

#[test]
fn click_does_not_wait_for_missing_button() {
    let (_driver, ui) = ui_for(ScriptedDriver::new());

    let start = Instant::now();
    let err = Button::new(&ui, OK_BUTTON).click().unwrap_err();

    assert!(matches!(err, UiError::ElementNotFound { matches: 0, .. }));
    assert!(start.elapsed() < Duration::from_millis(100));
}

#[test]
fn button_reports_enabled_state() {
    let (_driver, ui) = ui_for(ScriptedDriver::new().with_widget(OK_BUTTON, Widget::disabled()));
    assert!(!Button::new(&ui, OK_BUTTON).is_enabled().unwrap());
}

// =========================================================================
// poll_until
// =========================================================================

#[test]
fn poll_until_evaluates_at_least_once_with_zero_timeout() {
    let config = WaitConfig::new(Duration::ZERO, Duration::from_millis(10));
    let mut calls = 0;
    let result = poll_until("x", &config, || {
        calls += 1;
        Ok(true)
    });
    assert!(result.is_ok());
    assert_eq!(calls, 1);
}

#[test]
fn poll_until_stops_on_driver_error() {
    let config = WaitConfig::new(Duration::from_secs(5), Duration::from_millis(10));
    let start = Instant::now();
    let err = poll_until("x", &config, || Err(UiError::DriverIo("pipe closed".into())))
        .unwrap_err();
    assert!(matches!(err, UiError::DriverIo(_)));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn poll_until_polls_until_condition_holds() {
    let config = WaitConfig::new(Duration::from_secs(2), Duration::from_millis(5));
    let mut calls = 0;
    poll_until("x", &config, || {
        calls += 1;
        Ok(calls >= 3)
    })
    .unwrap();
    assert_eq!(calls, 3);
}

#[test]
fn zero_poll_interval_is_clamped() {
    let config = WaitConfig { timeout_ms: 10, poll_interval_ms: 0 };
    assert_eq!(config.poll_interval(), Duration::from_millis(1));
}
