use crate::driver::error::UiError;

/// The UI-automation capability page objects are written against.
///
/// Every call is a single synchronous round trip to the application under test.
/// Implementations never wait or retry; polling lives in [`crate::driver::wait`].
pub trait UiDriver {
    /// Number of live widgets matching `locator`.
    fn count(&self, locator: &str) -> Result<usize, UiError>;

    /// Whether the widget matching `locator` is currently shown. False when absent.
    fn is_visible(&self, locator: &str) -> Result<bool, UiError>;

    /// Whether the widget matching `locator` accepts input. False when absent.
    fn is_enabled(&self, locator: &str) -> Result<bool, UiError>;

    /// Simulate a user click on the widget matching `locator`.
    fn click(&self, locator: &str) -> Result<(), UiError>;
}
