use std::cell::RefCell;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::driver::driver::UiDriver;
use crate::driver::error::UiError;

/// Scripted state of one locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widget {
    /// Live widgets matching the locator. Anything but 1 makes a click fail.
    pub count: usize,
    pub visible: bool,
    pub enabled: bool,
}

impl Widget {
    pub fn shown() -> Self {
        Self { count: 1, visible: true, enabled: true }
    }

    pub fn disabled() -> Self {
        Self { count: 1, visible: true, enabled: false }
    }

    pub fn hidden() -> Self {
        Self { count: 1, visible: false, enabled: true }
    }

    pub fn duplicated(count: usize) -> Self {
        Self { count, visible: true, enabled: true }
    }
}

/// Driver call recorded by [`ScriptedDriver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    Count(String),
    Visible(String),
    Enabled(String),
    Click(String),
}

impl Interaction {
    pub fn locator(&self) -> &str {
        match self {
            Interaction::Count(l)
            | Interaction::Visible(l)
            | Interaction::Enabled(l)
            | Interaction::Click(l) => l,
        }
    }
}

#[derive(Debug, Clone)]
struct Reveal {
    clicked: String,
    revealed: String,
    delay: Duration,
}

#[derive(Debug, Default)]
struct ScriptState {
    widgets: HashMap<String, Widget>,
    reveals: Vec<Reveal>,
    /// Widgets revealed by a click, shown once their instant passes.
    pending: Vec<(String, Instant)>,
    journal: Vec<Interaction>,
}

impl ScriptState {
    fn settle(&mut self) {
        let now = Instant::now();
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(_, at)| *at <= now);
        self.pending = waiting;
        for (locator, _) in due {
            self.widgets.insert(locator, Widget::shown());
        }
    }

    fn widget(&mut self, locator: &str) -> Option<Widget> {
        self.settle();
        self.widgets.get(locator).copied()
    }
}

/// In-memory widget tree standing in for the application under test.
///
/// Widgets are declared up front; `reveal_on_click` rules make a click show another
/// widget, optionally after a delay. Every driver call is journaled so tests can check
/// what a page object touched and in which order.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    state: RefCell<ScriptState>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_widget(self, locator: &str, widget: Widget) -> Self {
        self.set_widget(locator, widget);
        self
    }

    /// Clicking `clicked` shows `revealed` once `delay` has passed.
    pub fn reveal_on_click(self, clicked: &str, revealed: &str, delay: Duration) -> Self {
        self.state.borrow_mut().reveals.push(Reveal {
            clicked: clicked.to_string(),
            revealed: revealed.to_string(),
            delay,
        });
        self
    }

    pub fn set_widget(&self, locator: &str, widget: Widget) {
        self.state
            .borrow_mut()
            .widgets
            .insert(locator.to_string(), widget);
    }

    pub fn remove_widget(&self, locator: &str) {
        self.state.borrow_mut().widgets.remove(locator);
    }

    /// Every call made so far, oldest first.
    pub fn journal(&self) -> Vec<Interaction> {
        self.state.borrow().journal.clone()
    }

    /// Locators clicked so far, oldest first.
    pub fn clicks(&self) -> Vec<String> {
        self.state
            .borrow()
            .journal
            .iter()
            .filter_map(|i| match i {
                Interaction::Click(l) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, interaction: Interaction) {
        self.state.borrow_mut().journal.push(interaction);
    }
}

impl UiDriver for ScriptedDriver {
    fn count(&self, locator: &str) -> Result<usize, UiError> {
        self.record(Interaction::Count(locator.to_string()));
        Ok(self
            .state
            .borrow_mut()
            .widget(locator)
            .map_or(0, |w| w.count))
    }

    fn is_visible(&self, locator: &str) -> Result<bool, UiError> {
        self.record(Interaction::Visible(locator.to_string()));
        Ok(self
            .state
            .borrow_mut()
            .widget(locator)
            .is_some_and(|w| w.count > 0 && w.visible))
    }

    fn is_enabled(&self, locator: &str) -> Result<bool, UiError> {
        self.record(Interaction::Enabled(locator.to_string()));
        Ok(self
            .state
            .borrow_mut()
            .widget(locator)
            .is_some_and(|w| w.count > 0 && w.enabled))
    }

    fn click(&self, locator: &str) -> Result<(), UiError> {
        self.record(Interaction::Click(locator.to_string()));

        let mut state = self.state.borrow_mut();
        let matches = state.widget(locator).map_or(0, |w| w.count);
        if matches != 1 {
            return Err(UiError::ElementNotFound {
                locator: locator.to_string(),
                matches,
            });
        }

        let now = Instant::now();
        let revealed: Vec<(String, Instant)> = state
            .reveals
            .iter()
            .filter(|r| r.clicked == locator)
            .map(|r| (r.revealed.clone(), now + r.delay))
            .collect();
        state.pending.extend(revealed);
        state.settle();
        Ok(())
    }
}
