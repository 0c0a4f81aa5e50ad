//! In-memory notifier.

use crate::error::PayrollResult;
use crate::models::PayNotice;

use super::PayNotifier;

/// Keeps every delivered notice, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Vec<PayNotice>,
}

impl RecordingNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notices received so far.
    pub fn notices(&self) -> &[PayNotice] {
        &self.notices
    }

    /// Consumes the notifier, returning the received notices.
    pub fn into_notices(self) -> Vec<PayNotice> {
        self.notices
    }
}

impl PayNotifier for RecordingNotifier {
    fn notify(&mut self, notice: &PayNotice) -> PayrollResult<()> {
        self.notices.push(notice.clone());
        Ok(())
    }
}
