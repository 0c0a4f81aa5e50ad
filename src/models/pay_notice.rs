//! Pay notice model.
//!
//! A [`PayNotice`] is what a payable employee hands to a notifier when pay is
//! delivered.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayKind;

/// A record of pay delivered to one payee.
///
/// # Example
///
/// ```
/// use payroll_dispatch::models::{PayKind, PayNotice};
/// use rust_decimal::Decimal;
///
/// let notice = PayNotice::new("Grace", PayKind::Salaried, Decimal::from(5000));
/// assert_eq!(notice.message, "Paid 5000 to Grace (salaried)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayNotice {
    /// The payee's name.
    pub name: String,
    /// The kind of pay arrangement that produced the amount.
    pub kind: PayKind,
    /// The amount delivered.
    pub amount: Decimal,
    /// Human-readable notification text.
    pub message: String,
}

impl PayNotice {
    /// Creates a notice and renders its message.
    pub fn new(name: impl Into<String>, kind: PayKind, amount: Decimal) -> Self {
        let name = name.into();
        let message = format!("Paid {} to {} ({})", amount, name, kind);
        Self {
            name,
            kind,
            amount,
            message,
        }
    }
}
