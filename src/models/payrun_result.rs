//! Payrun result models.
//!
//! This module contains the [`PayrunResult`] type that summarises one pass of
//! the payroll processing loop over a sequence of records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

use super::PayNotice;

/// Aggregated totals for a payrun.
///
/// # Example
///
/// ```
/// use payroll_dispatch::models::PayrunTotals;
/// use rust_decimal::Decimal;
///
/// let totals = PayrunTotals::default();
/// assert_eq!(totals.gross_pay, Decimal::ZERO);
/// assert_eq!(totals.records_processed, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrunTotals {
    /// Sum of every amount delivered.
    pub gross_pay: Decimal,
    /// Number of records turned into payable employees.
    pub records_processed: usize,
    /// Number of employees whose pay was delivered.
    pub payments_delivered: usize,
    /// Number of employees skipped because it was not their pay day.
    pub payments_skipped: usize,
}

impl PayrunTotals {
    /// Records a payment to `name`.
    ///
    /// Fails with `TotalOverflow`, leaving the totals untouched, if the gross
    /// pay cannot hold `amount`.
    pub fn record_delivery(&mut self, name: &str, amount: Decimal) -> PayrollResult<()> {
        self.gross_pay = self.gross_pay.checked_add(amount).ok_or_else(|| {
            PayrollError::TotalOverflow {
                name: name.to_string(),
            }
        })?;
        self.records_processed += 1;
        self.payments_delivered += 1;
        Ok(())
    }

    /// Records an employee that was not due for pay.
    pub fn record_skip(&mut self) {
        self.records_processed += 1;
        self.payments_skipped += 1;
    }
}

/// The complete result of a payrun.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrunResult {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the run.
    pub engine_version: String,
    /// Notices for each delivered payment, in input order.
    pub payments: Vec<PayNotice>,
    /// Aggregated totals.
    pub totals: PayrunTotals,
    /// The total processing duration in microseconds.
    pub duration_us: u64,
}
