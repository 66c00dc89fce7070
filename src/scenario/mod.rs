pub mod runner;
pub mod scenario_model;
