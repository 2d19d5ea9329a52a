//! Store API surface
//!
//! [`StoreApi`] is the seam between application logic and the hosted store;
//! [`StoreClient`] is the network implementation. Every transactional
//! invariant (stock arithmetic, transition legality, uniqueness) lives in
//! the remote procedures — this layer only names the calls.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::json;

use shared::models::{
    BorrowTransaction, Category, Department, Employee, Location, Product, SerialItem,
};
use shared::rpc::{
    BorrowItemParams, BulkImportResult, CreateProductParams, CreatedProduct, DashboardSummary,
    EmployeeImportRow, MutationOutcome, ProductImportRow, ReturnItemParams,
    UpdateProductStockParams, UpdateSerialStatusParams,
};

use crate::{ClientConfig, ClientError, ClientResult, RestTransport};

/// Which relation employee reads come from.
///
/// The denormalized `employee_directory` view is missing on older store
/// deployments. The first read that observes it missing downgrades the
/// client to the base table for the rest of its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeSource {
    #[default]
    DirectoryView,
    BaseTable,
}

/// Remote operations consumed by the application.
#[async_trait]
pub trait StoreApi: Send + Sync {
    // ========== Reference reads ==========
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;
    async fn list_departments(&self) -> ClientResult<Vec<Department>>;
    async fn list_locations(&self) -> ClientResult<Vec<Location>>;

    // ========== Entity reads ==========
    async fn list_products(&self) -> ClientResult<Vec<Product>>;
    async fn list_serials(&self) -> ClientResult<Vec<SerialItem>>;
    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;
    async fn list_transactions(&self) -> ClientResult<Vec<BorrowTransaction>>;

    /// Last existing display identifier matching `<prefix>-%`, or `None`.
    ///
    /// Seeds the import run's per-prefix running counters. Descending
    /// lexicographic order, limit one — exactly what the counter needs and
    /// nothing more.
    async fn last_identifier(&self, prefix: &str) -> ClientResult<Option<String>>;

    // ========== Procedures ==========
    async fn borrow_item(&self, params: &BorrowItemParams) -> ClientResult<MutationOutcome>;
    async fn return_item(&self, params: &ReturnItemParams) -> ClientResult<MutationOutcome>;
    async fn approve_borrow_request(&self, transaction_id: &str) -> ClientResult<MutationOutcome>;
    async fn reject_borrow_request(&self, transaction_id: &str) -> ClientResult<MutationOutcome>;
    async fn create_product_and_serials(
        &self,
        params: &CreateProductParams,
    ) -> ClientResult<CreatedProduct>;
    async fn update_product_and_stock(
        &self,
        params: &UpdateProductStockParams,
    ) -> ClientResult<MutationOutcome>;
    async fn delete_product_safe(&self, product_id: &str) -> ClientResult<MutationOutcome>;
    async fn delete_serial_safe(&self, serial_id: &str) -> ClientResult<MutationOutcome>;
    async fn update_serial_status(
        &self,
        params: &UpdateSerialStatusParams,
    ) -> ClientResult<MutationOutcome>;
    async fn import_products_bulk(
        &self,
        rows: &[ProductImportRow],
    ) -> ClientResult<BulkImportResult>;
    async fn import_employees_bulk(
        &self,
        rows: &[EmployeeImportRow],
    ) -> ClientResult<BulkImportResult>;
    async fn get_dashboard_summary(&self) -> ClientResult<DashboardSummary>;
}

/// Network implementation of [`StoreApi`].
pub struct StoreClient {
    transport: RestTransport,
    employee_source: RwLock<EmployeeSource>,
}

impl StoreClient {
    /// Create a new store client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            transport: RestTransport::new(config)?,
            employee_source: RwLock::new(EmployeeSource::default()),
        })
    }

    /// Get the transport
    pub fn transport(&self) -> &RestTransport {
        &self.transport
    }

    /// Which relation employee reads currently use
    pub fn employee_source(&self) -> EmployeeSource {
        *self.employee_source.read().unwrap()
    }

    /// Record that the directory view is missing. Idempotent; every later
    /// employee read uses the base table.
    fn note_directory_missing(&self) {
        *self.employee_source.write().unwrap() = EmployeeSource::BaseTable;
    }
}

#[async_trait]
impl StoreApi for StoreClient {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.transport
            .get_rows("categories", &[("select", "id,name"), ("order", "name.asc")])
            .await
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        self.transport
            .get_rows("departments", &[("select", "id,name"), ("order", "name.asc")])
            .await
    }

    async fn list_locations(&self) -> ClientResult<Vec<Location>> {
        self.transport
            .get_rows("locations", &[("select", "id,name"), ("order", "name.asc")])
            .await
    }

    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.transport
            .get_rows("products", &[("select", "*"), ("order", "p_id.asc")])
            .await
    }

    async fn list_serials(&self) -> ClientResult<Vec<SerialItem>> {
        self.transport
            .get_rows("serial_items", &[("select", "*"), ("order", "serial_no.asc")])
            .await
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        if self.employee_source() == EmployeeSource::DirectoryView {
            match self
                .transport
                .get_rows("employee_directory", &[("select", "*"), ("order", "emp_code.asc")])
                .await
            {
                Ok(rows) => return Ok(rows),
                Err(ClientError::NotFound(message)) => {
                    tracing::warn!(
                        %message,
                        "employee_directory view missing, falling back to employees table"
                    );
                    self.note_directory_missing();
                }
                Err(err) => return Err(err),
            }
        }

        self.transport
            .get_rows("employees", &[("select", "*"), ("order", "emp_code.asc")])
            .await
    }

    async fn list_transactions(&self) -> ClientResult<Vec<BorrowTransaction>> {
        self.transport
            .get_rows(
                "borrow_transactions",
                &[("select", "*"), ("order", "borrowed_at.desc.nullslast")],
            )
            .await
    }

    async fn last_identifier(&self, prefix: &str) -> ClientResult<Option<String>> {
        #[derive(serde::Deserialize)]
        struct Row {
            p_id: String,
        }

        let filter = format!("ilike.{prefix}-%");
        let rows: Vec<Row> = self
            .transport
            .get_rows(
                "products",
                &[
                    ("select", "p_id"),
                    ("p_id", filter.as_str()),
                    ("order", "p_id.desc"),
                    ("limit", "1"),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().map(|row| row.p_id))
    }

    async fn borrow_item(&self, params: &BorrowItemParams) -> ClientResult<MutationOutcome> {
        self.transport.rpc("borrow_item", params).await
    }

    async fn return_item(&self, params: &ReturnItemParams) -> ClientResult<MutationOutcome> {
        self.transport.rpc("return_item", params).await
    }

    async fn approve_borrow_request(&self, transaction_id: &str) -> ClientResult<MutationOutcome> {
        self.transport
            .rpc("approve_borrow_request", &json!({ "transaction_id": transaction_id }))
            .await
    }

    async fn reject_borrow_request(&self, transaction_id: &str) -> ClientResult<MutationOutcome> {
        self.transport
            .rpc("reject_borrow_request", &json!({ "transaction_id": transaction_id }))
            .await
    }

    async fn create_product_and_serials(
        &self,
        params: &CreateProductParams,
    ) -> ClientResult<CreatedProduct> {
        self.transport.rpc("create_product_and_serials", params).await
    }

    async fn update_product_and_stock(
        &self,
        params: &UpdateProductStockParams,
    ) -> ClientResult<MutationOutcome> {
        self.transport.rpc("update_product_and_stock", params).await
    }

    async fn delete_product_safe(&self, product_id: &str) -> ClientResult<MutationOutcome> {
        self.transport
            .rpc("delete_product_safe", &json!({ "product_id": product_id }))
            .await
    }

    async fn delete_serial_safe(&self, serial_id: &str) -> ClientResult<MutationOutcome> {
        self.transport
            .rpc("delete_serial_safe", &json!({ "serial_id": serial_id }))
            .await
    }

    async fn update_serial_status(
        &self,
        params: &UpdateSerialStatusParams,
    ) -> ClientResult<MutationOutcome> {
        self.transport.rpc("update_serial_status", params).await
    }

    async fn import_products_bulk(
        &self,
        rows: &[ProductImportRow],
    ) -> ClientResult<BulkImportResult> {
        self.transport
            .rpc("import_products_bulk", &json!({ "products_data": rows }))
            .await
    }

    async fn import_employees_bulk(
        &self,
        rows: &[EmployeeImportRow],
    ) -> ClientResult<BulkImportResult> {
        self.transport
            .rpc("import_employees_bulk", &json!({ "employees_data": rows }))
            .await
    }

    async fn get_dashboard_summary(&self) -> ClientResult<DashboardSummary> {
        self.transport.rpc("get_dashboard_summary", &json!({})).await
    }
}
