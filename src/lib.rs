//! Page objects for driving the desktop application in end-to-end tests.
//!
//! Page objects are built from a [`driver::ui::Ui`], which bundles the automation
//! driver, wait settings, and the step log:
//!
//! ```no_run
//! use std::rc::Rc;
//! use desktop_e2e::driver::session::{DriverConfig, DriverSession};
//! use desktop_e2e::driver::ui::Ui;
//! use desktop_e2e::screens::community_portal::CommunitiesPortal;
//!
//! # fn main() -> Result<(), desktop_e2e::driver::error::UiError> {
//! let session = DriverSession::launch(&DriverConfig::default())?;
//! let ui = Ui::new(Rc::new(session));
//! let _community = CommunitiesPortal::new(&ui).open_create_community_popup()?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod components;
pub mod driver;
pub mod elements;
pub mod report;
pub mod scenario;
pub mod screens;
pub mod trace;
