//! Request types for the payroll API.

use serde::{Deserialize, Serialize};

use crate::models::PayRecord;

/// Request body for the `/payrun` endpoint.
///
/// Records are paid in the order given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrunRequest {
    /// The records to pay.
    pub records: Vec<PayRecord>,
}
