//! Transaction status taxonomy
//!
//! The hosted store records borrow-transaction statuses as free-form
//! strings: current English values, legacy aliases from before the
//! approve/reject rework, and Thai labels written by the old admin screens.
//! Everything rule-facing or user-facing goes through
//! [`TransactionStatus::normalize`] first.

use serde::{Deserialize, Serialize};

/// Canonical transaction lifecycle status.
///
/// Serialized exactly as the store's wire strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Pending,
    Active,
    Rejected,
    Completed,
    Returned,
    Cancelled,
}

/// Display label used when a raw status has no recognized alias.
pub const UNKNOWN_STATUS_LABEL: &str = "ไม่ทราบสถานะ";

impl TransactionStatus {
    /// Map an arbitrary status label to its canonical value.
    ///
    /// Total: never panics, `None` in → `None` out. Matching is
    /// case-insensitive and ignores whitespace, `_` and `-`, so
    /// `"Pending Approval"`, `"pending_approval"` and `"pendingapproval"`
    /// are the same alias. Unrecognized input yields `None`.
    pub fn normalize(input: Option<&str>) -> Option<Self> {
        let raw = input?.trim();
        if raw.is_empty() {
            return None;
        }
        let key: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();
        match key.as_str() {
            "pending" | "pendingapproval" | "waitingapproval" | "รออนุมัติ" => Some(Self::Pending),
            // "approved" predates the Active rename and still appears in old rows
            "active" | "approved" | "borrowed" | "inuse" | "กำลังยืม" => Some(Self::Active),
            "rejected" | "denied" | "ไม่อนุมัติ" | "ปฏิเสธ" => Some(Self::Rejected),
            "completed" | "complete" | "done" | "เสร็จสิ้น" => Some(Self::Completed),
            "returned" | "return" | "คืนแล้ว" => Some(Self::Returned),
            "cancelled" | "canceled" | "cancel" | "ยกเลิก" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Active => "Active",
            Self::Rejected => "Rejected",
            Self::Completed => "Completed",
            Self::Returned => "Returned",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Thai display label.
    pub fn thai_label(&self) -> &'static str {
        match self {
            Self::Pending => "รออนุมัติ",
            Self::Active => "กำลังยืม",
            Self::Rejected => "ไม่อนุมัติ",
            Self::Completed => "เสร็จสิ้น",
            Self::Returned => "คืนแล้ว",
            Self::Cancelled => "ยกเลิก",
        }
    }
}

/// True iff the raw status normalizes to a terminal returned-like state.
///
/// `Completed` and `Returned` are treated as equivalent terminal states
/// here; the store carries both without a finished migration between them,
/// so neither side can be collapsed into the other.
pub fn is_returned_like(raw: Option<&str>) -> bool {
    matches!(
        TransactionStatus::normalize(raw),
        Some(TransactionStatus::Completed | TransactionStatus::Returned)
    )
}

/// Thai display label for a raw status string.
///
/// Falls back to the trimmed raw value when no alias matches, and to
/// [`UNKNOWN_STATUS_LABEL`] when the input is blank.
pub fn display_label(raw: &str) -> String {
    match TransactionStatus::normalize(Some(raw)) {
        Some(status) => status.thai_label().to_string(),
        None => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                UNKNOWN_STATUS_LABEL.to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_english_aliases() {
        assert_eq!(
            TransactionStatus::normalize(Some("pending")),
            Some(TransactionStatus::Pending)
        );
        assert_eq!(
            TransactionStatus::normalize(Some("Pending Approval")),
            Some(TransactionStatus::Pending)
        );
        assert_eq!(
            TransactionStatus::normalize(Some("ACTIVE")),
            Some(TransactionStatus::Active)
        );
        assert_eq!(
            TransactionStatus::normalize(Some("approved")),
            Some(TransactionStatus::Active)
        );
        assert_eq!(
            TransactionStatus::normalize(Some("canceled")),
            Some(TransactionStatus::Cancelled)
        );
    }

    #[test]
    fn test_normalize_thai_aliases() {
        assert_eq!(
            TransactionStatus::normalize(Some("รออนุมัติ")),
            Some(TransactionStatus::Pending)
        );
        assert_eq!(
            TransactionStatus::normalize(Some(" กำลังยืม ")),
            Some(TransactionStatus::Active)
        );
        assert_eq!(
            TransactionStatus::normalize(Some("คืนแล้ว")),
            Some(TransactionStatus::Returned)
        );
        assert_eq!(
            TransactionStatus::normalize(Some("ยกเลิก")),
            Some(TransactionStatus::Cancelled)
        );
    }

    #[test]
    fn test_normalize_rejects_unknown_and_empty() {
        assert_eq!(TransactionStatus::normalize(None), None);
        assert_eq!(TransactionStatus::normalize(Some("")), None);
        assert_eq!(TransactionStatus::normalize(Some("   ")), None);
        assert_eq!(TransactionStatus::normalize(Some("shipped")), None);
    }

    #[test]
    fn test_returned_like_covers_both_terminal_states() {
        assert!(is_returned_like(Some("Completed")));
        assert!(is_returned_like(Some("returned")));
        assert!(is_returned_like(Some("เสร็จสิ้น")));
        assert!(!is_returned_like(Some("Active")));
        assert!(!is_returned_like(Some("Cancelled")));
        assert!(!is_returned_like(Some("nonsense")));
        assert!(!is_returned_like(None));
    }

    #[test]
    fn test_display_label_fallbacks() {
        assert_eq!(display_label("Pending"), "รออนุมัติ");
        assert_eq!(display_label("  weird value "), "weird value");
        assert_eq!(display_label("   "), UNKNOWN_STATUS_LABEL);
    }

    #[test]
    fn test_wire_strings_round_trip() {
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Active,
            TransactionStatus::Rejected,
            TransactionStatus::Completed,
            TransactionStatus::Returned,
            TransactionStatus::Cancelled,
        ] {
            assert_eq!(TransactionStatus::normalize(Some(status.as_str())), Some(status));
        }
    }
}
