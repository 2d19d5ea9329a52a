//! Remote procedure payloads and results
//!
//! Wire shapes of the store procedures this workspace consumes. The
//! procedures own every transactional invariant (stock arithmetic, status
//! transition legality, uniqueness); these types only name their inputs and
//! outputs.

use serde::{Deserialize, Serialize};

use crate::models::ProductCreate;

/// Result of `import_products_bulk` / `import_employees_bulk` for one batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BulkImportResult {
    pub success_count: u32,
    /// Per-row rejection messages, passed through to the user verbatim
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Result shape of the mutating procedures (borrow, return, approve,
/// reject, safe deletes, status/stock updates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationOutcome {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn refused(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }
}

/// Result of `create_product_and_serials`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedProduct {
    pub product_id: String,
}

/// Counters returned by `get_dashboard_summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: i64,
    pub total_serials: i64,
    pub available_serials: i64,
    pub borrowed_serials: i64,
    pub total_employees: i64,
    pub pending_requests: i64,
    pub active_borrows: i64,
}

/// Parameters of `borrow_item`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowItemParams {
    pub serial_id: String,
    pub employee_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Parameters of `return_item`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnItemParams {
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Parameters of `create_product_and_serials`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductParams {
    pub product: ProductCreate,
    /// Serial numbers to register alongside the product
    pub serial_numbers: Vec<String>,
}

/// Parameters of `update_product_and_stock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductStockParams {
    pub product_id: String,
    pub changes: crate::models::ProductUpdate,
}

/// Parameters of `update_serial_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSerialStatusParams {
    pub serial_id: String,
    pub status: String,
}

/// Prepared product row, ready for `import_products_bulk`.
///
/// Built by the import reconciler: category resolved, numeric fields
/// defaulted, `p_id` either taken from the upload or generated from the
/// per-prefix running counter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImportRow {
    pub p_id: String,
    pub name: String,
    /// Resolved category (String ID); `None` only when the store has no
    /// categories at all
    pub category_id: Option<String>,
    pub category_name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price: f64,
    pub unit: Option<String>,
    pub quantity: i32,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Prepared employee row, ready for `import_employees_bulk`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeImportRow {
    pub emp_code: String,
    pub name: String,
    pub nickname: Option<String>,
    /// Resolved department (String ID)
    pub department_id: Option<String>,
    pub gender: Option<String>,
    /// Resolved location (String ID)
    pub location_id: Option<String>,
    pub email: Option<String>,
    pub tel: Option<String>,
}
