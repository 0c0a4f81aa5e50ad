//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayRecord;

use super::types::{PayrollConfig, PayrollMetadata, RosterConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/acme/
/// ├── payroll.yaml   # Organisation, currency and version
/// └── roster.yaml    # Pay records, in payrun order
/// ```
///
/// Roster records are loaded as written. A record whose kind no employee type
/// supports loads fine and only fails once the roster is paid.
///
/// # Example
///
/// ```no_run
/// use payroll_dispatch::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/acme")?;
/// let record = loader.get_record("Ada Lovelace")?;
/// println!("{} is paid as {}", record.name, record.kind);
/// # Ok::<(), payroll_dispatch::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrollMetadata>(&path.join("payroll.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        debug!(
            organisation = %metadata.organisation,
            records = roster.records.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, roster.records),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        self.config.metadata()
    }

    /// Returns the roster records in file order.
    pub fn roster(&self) -> &[PayRecord] {
        self.config.roster()
    }

    /// Gets a roster record by payee name.
    ///
    /// Returns `RecordNotFound` if no record carries that name.
    pub fn get_record(&self, name: &str) -> PayrollResult<&PayRecord> {
        self.roster()
            .iter()
            .find(|record| record.name == name)
            .ok_or_else(|| PayrollError::RecordNotFound {
                name: name.to_string(),
            })
    }
}
