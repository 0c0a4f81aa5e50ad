//! Payable employees and the machinery that produces and pays them.
//!
//! A [`PayRecord`](crate::models::PayRecord) is turned into a [`Payable`]
//! exactly once, by an [`EmployeeFactory`]. The factory is the only place the
//! record's kind tag is examined; everything after it, including
//! [`process_payroll`], talks to employees through the [`Payable`] trait.

mod commissioned;
mod factory;
mod hourly;
mod payrun;
mod salaried;

pub use commissioned::CommissionedEmployee;
pub use factory::{EmployeeFactory, StandardEmployeeFactory};
pub use hourly::HourlyEmployee;
pub use payrun::process_payroll;
pub use salaried::SalariedEmployee;

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::delivery::PayNotifier;
use crate::error::PayrollResult;
use crate::models::{PayKind, PayNotice};

/// The capability set every kind of employee provides.
///
/// Implementations capture their kind-specific amounts when they are built
/// and never consult the original record again.
pub trait Payable: fmt::Debug {
    /// The payee's name.
    fn name(&self) -> &str;

    /// The pay arrangement this employee was built for.
    fn kind(&self) -> PayKind;

    /// Returns true if the employee should be paid in the current run.
    fn is_pay_day(&self) -> bool;

    /// Computes the amount owed for the current run.
    fn calculate_pay(&self) -> Decimal;

    /// Delivers `amount` to the employee through `notifier`.
    ///
    /// Returns the notice that was delivered.
    fn deliver_pay(
        &self,
        amount: Decimal,
        notifier: &mut dyn PayNotifier,
    ) -> PayrollResult<PayNotice> {
        let notice = PayNotice::new(self.name(), self.kind(), amount);
        notifier.notify(&notice)?;
        debug!(employee = %notice.name, kind = %notice.kind, amount = %amount, "Pay delivered");
        Ok(notice)
    }
}
