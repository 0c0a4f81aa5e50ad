//! Console notifier.

use std::io::{self, Stdout, Write};

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayNotice;

use super::PayNotifier;

/// Writes one line per delivered payment to a writer.
///
/// # Example
///
/// ```
/// use payroll_dispatch::delivery::{ConsoleNotifier, PayNotifier};
/// use payroll_dispatch::models::{PayKind, PayNotice};
/// use rust_decimal::Decimal;
///
/// let mut notifier = ConsoleNotifier::new(Vec::new());
/// let notice = PayNotice::new("Ada", PayKind::Hourly, Decimal::from(3200));
/// notifier.notify(&notice).unwrap();
///
/// let output = String::from_utf8(notifier.into_inner()).unwrap();
/// assert_eq!(output, "Paid 3200 to Ada (hourly)\n");
/// ```
#[derive(Debug)]
pub struct ConsoleNotifier<W: Write> {
    writer: W,
}

impl ConsoleNotifier<Stdout> {
    /// Creates a notifier that prints to process standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNotifier<W> {
    /// Creates a notifier writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the notifier, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PayNotifier for ConsoleNotifier<W> {
    fn notify(&mut self, notice: &PayNotice) -> PayrollResult<()> {
        writeln!(self.writer, "{}", notice.message)
            .and_then(|_| self.writer.flush())
            .map_err(|e| PayrollError::DeliveryFailed {
                name: notice.name.clone(),
                message: e.to_string(),
            })
    }
}
