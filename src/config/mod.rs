//! Configuration loading for payroll runs.
//!
//! This module loads payroll metadata and the roster of pay records from YAML
//! files in a configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use payroll_dispatch::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/acme").unwrap();
//! println!("Loaded payroll for: {}", config.metadata().organisation);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, PayrollMetadata, RosterConfig};
