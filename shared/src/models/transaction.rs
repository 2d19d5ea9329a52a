//! Borrow Transaction Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One borrow/return transaction as stored remotely
///
/// `status` is kept raw: historical rows mix English, legacy aliases and
/// Thai labels. Normalize through
/// [`crate::status::TransactionStatus::normalize`] before comparing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowTransaction {
    pub id: String,
    /// Serial item reference (String ID)
    pub serial_id: String,
    /// Employee reference (String ID)
    pub employee_id: String,
    pub status: String,
    pub borrowed_at: Option<DateTime<Utc>>,
    pub returned_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}
