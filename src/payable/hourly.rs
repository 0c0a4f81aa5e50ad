//! Hourly employees.

use rust_decimal::Decimal;

use crate::models::PayKind;

use super::Payable;

/// An employee paid for hours worked at an hourly rate.
///
/// # Examples
///
/// ```
/// use payroll_dispatch::payable::{HourlyEmployee, Payable};
/// use rust_decimal::Decimal;
///
/// let employee = HourlyEmployee::new("Ada", Decimal::from(160), Decimal::from(20));
/// assert_eq!(employee.calculate_pay(), Decimal::from(3200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyEmployee {
    name: String,
    hours: Decimal,
    rate: Decimal,
}

impl HourlyEmployee {
    /// Creates an hourly employee.
    pub fn new(name: impl Into<String>, hours: Decimal, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            hours,
            rate,
        }
    }

    /// Hours worked in the period.
    pub fn hours(&self) -> Decimal {
        self.hours
    }

    /// The hourly rate.
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Payable for HourlyEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PayKind {
        PayKind::Hourly
    }

    fn is_pay_day(&self) -> bool {
        true
    }

    fn calculate_pay(&self) -> Decimal {
        self.hours * self.rate
    }
}
