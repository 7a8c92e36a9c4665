//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load engine configuration from YAML files:
//! the local calendar offset, currency formatting rules, and seed employee profiles.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Salaries are paid in {}", config.currency().code);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CurrencyFormat, EmployeesConfig, EngineSettings};
