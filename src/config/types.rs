//! Configuration types for payroll runs.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::PayRecord;

/// Metadata about the payroll being run.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollMetadata {
    /// The organisation that pays the roster.
    pub organisation: String,
    /// The ISO currency code amounts are expressed in (e.g., "AUD").
    pub currency: String,
    /// The version or effective date of this configuration.
    pub version: String,
}

/// Roster configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// The records to pay, in payrun order.
    #[serde(default)]
    pub records: Vec<PayRecord>,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: PayrollMetadata,
    roster: Vec<PayRecord>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(metadata: PayrollMetadata, roster: Vec<PayRecord>) -> Self {
        Self { metadata, roster }
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the roster records in file order.
    pub fn roster(&self) -> &[PayRecord] {
        &self.roster
    }
}
