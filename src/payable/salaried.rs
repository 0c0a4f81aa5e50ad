//! Salaried employees.

use rust_decimal::Decimal;

use crate::models::PayKind;

use super::Payable;

/// An employee paid a fixed salary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalariedEmployee {
    name: String,
    salary: Decimal,
}

impl SalariedEmployee {
    /// Creates a salaried employee.
    pub fn new(name: impl Into<String>, salary: Decimal) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }

    /// The fixed salary.
    pub fn salary(&self) -> Decimal {
        self.salary
    }
}

impl Payable for SalariedEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PayKind {
        PayKind::Salaried
    }

    fn is_pay_day(&self) -> bool {
        true
    }

    fn calculate_pay(&self) -> Decimal {
        self.salary
    }
}
