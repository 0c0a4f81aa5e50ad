//! The payroll processing loop.

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::delivery::PayNotifier;
use crate::error::PayrollResult;
use crate::models::{PayRecord, PayrunResult, PayrunTotals};

use super::EmployeeFactory;

/// Pays every record in `records`, in order.
///
/// Each record is turned into an employee by `factory`. Employees that are
/// due for pay have their pay calculated and delivered through `notifier`.
///
/// The first failure stops the run and is returned as-is: records before the
/// failing one have already been delivered, records after it are not
/// touched.
///
/// # Examples
///
/// ```
/// use payroll_dispatch::delivery::RecordingNotifier;
/// use payroll_dispatch::models::PayRecord;
/// use payroll_dispatch::payable::{StandardEmployeeFactory, process_payroll};
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     PayRecord::hourly("Ada", Decimal::from(160), Decimal::from(20)),
///     PayRecord::salaried("Grace", Decimal::from(5000)),
/// ];
/// let mut notifier = RecordingNotifier::new();
///
/// let result = process_payroll(&records, &StandardEmployeeFactory, &mut notifier).unwrap();
/// assert_eq!(result.totals.gross_pay, Decimal::from(8200));
/// assert_eq!(notifier.notices().len(), 2);
/// ```
pub fn process_payroll<F, N>(
    records: &[PayRecord],
    factory: &F,
    notifier: &mut N,
) -> PayrollResult<PayrunResult>
where
    F: EmployeeFactory + ?Sized,
    N: PayNotifier,
{
    let start_time = Instant::now();
    let run_id = Uuid::new_v4();
    info!(run_id = %run_id, records = records.len(), "Starting payrun");

    let mut payments = Vec::with_capacity(records.len());
    let mut totals = PayrunTotals::default();

    for record in records {
        let employee = factory.make_employee(record).inspect_err(|err| {
            warn!(run_id = %run_id, employee = %record.name, error = %err, "Failed to build employee");
        })?;

        if !employee.is_pay_day() {
            totals.record_skip();
            continue;
        }

        let amount = employee.calculate_pay();
        // Count the payment first so an overflowing total is never delivered
        totals.record_delivery(&record.name, amount).inspect_err(|err| {
            warn!(run_id = %run_id, employee = %record.name, error = %err, "Gross pay overflowed");
        })?;
        let notice = employee.deliver_pay(amount, &mut *notifier).inspect_err(|err| {
            warn!(run_id = %run_id, employee = %record.name, error = %err, "Failed to deliver pay");
        })?;

        payments.push(notice);
    }

    let duration = start_time.elapsed();
    info!(
        run_id = %run_id,
        payments = totals.payments_delivered,
        gross_pay = %totals.gross_pay,
        duration_us = duration.as_micros(),
        "Payrun completed"
    );

    Ok(PayrunResult {
        run_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        payments,
        totals,
        duration_us: u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
    })
}
