//! Notification sinks for delivered pay.
//!
//! A payable employee delivers pay by handing a [`PayNotice`] to a
//! [`PayNotifier`]. The console notifier prints each notice; the recording
//! notifier keeps them in memory for callers that need the notices back.

mod console;
mod recording;

pub use console::ConsoleNotifier;
pub use recording::RecordingNotifier;

use crate::error::PayrollResult;
use crate::models::PayNotice;

/// Receives a notice each time pay is delivered.
pub trait PayNotifier {
    /// Delivers a single notice.
    fn notify(&mut self, notice: &PayNotice) -> PayrollResult<()>;
}

