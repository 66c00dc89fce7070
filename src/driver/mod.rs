pub mod driver;
pub mod error;
pub mod scripted;
pub mod session;
pub mod ui;
pub mod wait;
