//! Pay record model and the pay kind discriminant.
//!
//! A [`PayRecord`] is the plain data a payroll run starts from. It carries the
//! raw `kind` tag exactly as supplied (in code, from YAML, or over HTTP); only
//! the employee factory turns that tag into a [`PayKind`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kinds of pay arrangement the engine knows how to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayKind {
    /// Paid a base amount plus a commission.
    Commissioned,
    /// Paid hours worked multiplied by an hourly rate.
    Hourly,
    /// Paid a fixed salary.
    Salaried,
}

impl PayKind {
    /// Returns the tag used for this kind on records and in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayKind::Commissioned => "commissioned",
            PayKind::Hourly => "hourly",
            PayKind::Salaried => "salaried",
        }
    }
}

impl fmt::Display for PayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes a payee: a name, a kind tag and the kind-specific amounts.
///
/// Only the fields relevant to the record's kind need to be present:
/// `salary` for salaried, `base` and `commission` for commissioned,
/// `hours` and `rate` for hourly.
///
/// # Example
///
/// ```
/// use payroll_dispatch::models::PayRecord;
/// use rust_decimal::Decimal;
///
/// let record = PayRecord::hourly("Ada", Decimal::from(160), Decimal::from(20));
/// assert_eq!(record.kind, "hourly");
/// assert_eq!(record.hours, Some(Decimal::from(160)));
/// assert!(record.salary.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRecord {
    /// The payee's name.
    pub name: String,
    /// The discriminant tag (e.g., "hourly").
    pub kind: String,
    /// Fixed salary, for salaried records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    /// Base pay, for commissioned records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Decimal>,
    /// Commission earned, for commissioned records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<Decimal>,
    /// Hours worked, for hourly records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    /// Hourly rate, for hourly records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
}

impl PayRecord {
    /// Creates a record with the given tag and no amounts set.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            salary: None,
            base: None,
            commission: None,
            hours: None,
            rate: None,
        }
    }

    /// Creates a commissioned record.
    pub fn commissioned(name: impl Into<String>, base: Decimal, commission: Decimal) -> Self {
        Self {
            base: Some(base),
            commission: Some(commission),
            ..Self::new(name, PayKind::Commissioned.as_str())
        }
    }

    /// Creates an hourly record.
    pub fn hourly(name: impl Into<String>, hours: Decimal, rate: Decimal) -> Self {
        Self {
            hours: Some(hours),
            rate: Some(rate),
            ..Self::new(name, PayKind::Hourly.as_str())
        }
    }

    /// Creates a salaried record.
    pub fn salaried(name: impl Into<String>, salary: Decimal) -> Self {
        Self {
            salary: Some(salary),
            ..Self::new(name, PayKind::Salaried.as_str())
        }
    }
}
