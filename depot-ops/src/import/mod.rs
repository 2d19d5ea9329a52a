//! CSV bulk import
//!
//! Turns an uploaded delimited file into validated, foreign-key-resolved
//! rows and submits them to the store's bulk procedures in fixed-size
//! sequential batches, tolerating partial failure. Only the submission
//! stage touches remote state, and only additively.

mod counter;
mod employees;
mod products;
mod resolve;
mod rows;
pub mod template;

pub use counter::RunningNumbers;
pub use employees::EmployeeImporter;
pub use products::ProductImporter;
pub use resolve::{
    DEFAULT_CATEGORY_NAME, FALLBACK_PREFIX, ResolvedCategory, prefix_from_category,
    resolve_category,
};

use depot_client::ClientError;
use thiserror::Error;

/// Rows per bulk procedure call.
///
/// Bounds request payload size and keeps progress reporting aligned with
/// submission order; batches run strictly one at a time.
pub const BATCH_SIZE: usize = 50;

/// Import run failure (aborts the whole run).
///
/// Per-batch and per-row failures do not abort; they accumulate in
/// [`ImportReport::errors`] instead.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Upload could not be parsed; nothing was submitted
    #[error("ไม่สามารถอ่านไฟล์นำเข้าได้: {0}")]
    Parse(String),

    /// Reference preload or counter seed read failed
    #[error("โหลดข้อมูลอ้างอิงไม่สำเร็จ: {0}")]
    Reference(#[from] ClientError),
}

/// Aggregated outcome of one import run, never reset mid-run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub success_count: u32,
    /// Per-row messages from the store plus synthetic per-batch entries,
    /// in submission order, not deduplicated
    pub errors: Vec<String>,
}

/// Synthetic error entry for a batch whose call failed outright.
pub(crate) fn batch_error(start_offset: usize, err: &ClientError) -> String {
    format!("นำเข้าชุดที่เริ่มแถวที่ {} ไม่สำเร็จ: {}", start_offset + 1, err)
}

/// Rounded percentage after a batch completes.
pub(crate) fn progress_pct(processed: usize, total: usize) -> u8 {
    ((processed as f64 / total as f64) * 100.0).round() as u8
}
