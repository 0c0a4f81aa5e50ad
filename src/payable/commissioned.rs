//! Commissioned employees.
//!
//! A commissioned employee is paid their base amount plus the commission
//! they earned in the period.

use rust_decimal::Decimal;

use crate::models::PayKind;

use super::Payable;

/// An employee paid base plus commission.
///
/// # Examples
///
/// ```
/// use payroll_dispatch::payable::{CommissionedEmployee, Payable};
/// use rust_decimal::Decimal;
///
/// let employee = CommissionedEmployee::new("Linus", Decimal::from(3000), Decimal::from(1200));
/// assert_eq!(employee.calculate_pay(), Decimal::from(4200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionedEmployee {
    name: String,
    base: Decimal,
    commission: Decimal,
}

impl CommissionedEmployee {
    /// Creates a commissioned employee.
    pub fn new(name: impl Into<String>, base: Decimal, commission: Decimal) -> Self {
        Self {
            name: name.into(),
            base,
            commission,
        }
    }

    /// The base amount.
    pub fn base(&self) -> Decimal {
        self.base
    }

    /// The commission earned.
    pub fn commission(&self) -> Decimal {
        self.commission
    }
}

impl Payable for CommissionedEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PayKind {
        PayKind::Commissioned
    }

    fn is_pay_day(&self) -> bool {
        true
    }

    fn calculate_pay(&self) -> Decimal {
        self.base + self.commission
    }
}
