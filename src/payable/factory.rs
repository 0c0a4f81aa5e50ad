//! Employee construction from pay records.
//!
//! This module is the single dispatch point of the engine: it reads a
//! record's kind tag, picks the matching [`Payable`] implementation and hands
//! the record's amounts to it. Nothing downstream of the factory looks at the
//! tag again.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayKind, PayRecord};

use super::{CommissionedEmployee, HourlyEmployee, Payable, SalariedEmployee};

/// Builds payable employees from pay records.
pub trait EmployeeFactory {
    /// Builds the employee described by `record`.
    ///
    /// Fails with [`PayrollError::UnsupportedKind`] when the record's kind has
    /// no matching employee type. No employee is built on any failure.
    fn make_employee(&self, record: &PayRecord) -> PayrollResult<Box<dyn Payable>>;
}

/// The factory for the commissioned, hourly and salaried employee types.
///
/// # Examples
///
/// ```
/// use payroll_dispatch::models::PayRecord;
/// use payroll_dispatch::payable::{EmployeeFactory, Payable, StandardEmployeeFactory};
/// use rust_decimal::Decimal;
///
/// let record = PayRecord::hourly("Ada", Decimal::from(160), Decimal::from(20));
/// let employee = StandardEmployeeFactory.make_employee(&record).unwrap();
/// assert_eq!(employee.calculate_pay(), Decimal::from(3200));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEmployeeFactory;

impl EmployeeFactory for StandardEmployeeFactory {
    fn make_employee(&self, record: &PayRecord) -> PayrollResult<Box<dyn Payable>> {
        let kind = parse_kind(&record.kind)?;

        let employee: Box<dyn Payable> = match kind {
            PayKind::Commissioned => {
                let base = required_amount(record, "base", record.base)?;
                let commission = required_amount(record, "commission", record.commission)?;
                ensure_representable(record, base.checked_add(commission))?;
                Box::new(CommissionedEmployee::new(record.name.clone(), base, commission))
            }
            PayKind::Hourly => {
                let hours = required_amount(record, "hours", record.hours)?;
                let rate = required_amount(record, "rate", record.rate)?;
                ensure_representable(record, hours.checked_mul(rate))?;
                Box::new(HourlyEmployee::new(record.name.clone(), hours, rate))
            }
            PayKind::Salaried => Box::new(SalariedEmployee::new(
                record.name.clone(),
                required_amount(record, "salary", record.salary)?,
            )),
        };

        debug!(employee = %record.name, kind = %kind, "Built payable employee");
        Ok(employee)
    }
}

/// Maps a record's tag onto a known kind, ignoring case and surrounding space.
fn parse_kind(tag: &str) -> PayrollResult<PayKind> {
    match tag.trim().to_lowercase().as_str() {
        "commissioned" => Ok(PayKind::Commissioned),
        "hourly" => Ok(PayKind::Hourly),
        "salaried" => Ok(PayKind::Salaried),
        _ => Err(PayrollError::UnsupportedKind {
            kind: tag.to_string(),
        }),
    }
}

fn required_amount(
    record: &PayRecord,
    field: &str,
    value: Option<Decimal>,
) -> PayrollResult<Decimal> {
    let value = value.ok_or_else(|| PayrollError::MissingField {
        name: record.name.clone(),
        field: field.to_string(),
    })?;

    if value < Decimal::ZERO {
        return Err(PayrollError::InvalidRecord {
            name: record.name.clone(),
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }

    Ok(value)
}

/// Rejects records whose pay cannot be held in a `Decimal`.
fn ensure_representable(record: &PayRecord, pay: Option<Decimal>) -> PayrollResult<()> {
    match pay {
        Some(_) => Ok(()),
        None => Err(PayrollError::InvalidRecord {
            name: record.name.clone(),
            field: "pay".to_string(),
            message: "pay exceeds the largest representable amount".to_string(),
        }),
    }
}
