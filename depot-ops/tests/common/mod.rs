//! Scriptable in-memory store for pipeline tests

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use depot_client::{ClientError, ClientResult, StoreApi};
use shared::models::{
    BorrowTransaction, Category, Department, Employee, Location, Product, SerialItem,
};
use shared::rpc::{
    BorrowItemParams, BulkImportResult, CreateProductParams, CreatedProduct, DashboardSummary,
    EmployeeImportRow, MutationOutcome, ProductImportRow, ReturnItemParams,
    UpdateProductStockParams, UpdateSerialStatusParams,
};

/// Scripted call outcome; `Err` becomes `ClientError::Internal`.
pub type Scripted<T> = Result<T, String>;

#[derive(Default)]
pub struct MockStore {
    pub categories: Vec<Category>,
    pub departments: Vec<Department>,
    pub locations: Vec<Location>,
    pub transactions: Vec<BorrowTransaction>,
    pub last_identifiers: HashMap<String, String>,

    /// Queued per-batch results; an empty queue means whole-batch success.
    pub product_results: Mutex<VecDeque<Scripted<BulkImportResult>>>,
    pub employee_results: Mutex<VecDeque<Scripted<BulkImportResult>>>,

    /// Every submitted batch, in order.
    pub product_batches: Mutex<Vec<Vec<ProductImportRow>>>,
    pub employee_batches: Mutex<Vec<Vec<EmployeeImportRow>>>,

    /// Prefixes the importer seeded, in order.
    pub seed_queries: Mutex<Vec<String>>,

    pub borrow_outcome: Mutex<Option<Scripted<MutationOutcome>>>,
    pub return_outcome: Mutex<Option<Scripted<MutationOutcome>>>,
    pub approve_outcome: Mutex<Option<Scripted<MutationOutcome>>>,
    pub reject_outcome: Mutex<Option<Scripted<MutationOutcome>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, names: &[(&str, &str)]) -> Self {
        self.categories = names
            .iter()
            .map(|(id, name)| Category { id: id.to_string(), name: name.to_string() })
            .collect();
        self
    }

    pub fn with_departments(mut self, names: &[(&str, &str)]) -> Self {
        self.departments = names
            .iter()
            .map(|(id, name)| Department { id: id.to_string(), name: name.to_string() })
            .collect();
        self
    }

    pub fn with_locations(mut self, names: &[(&str, &str)]) -> Self {
        self.locations = names
            .iter()
            .map(|(id, name)| Location { id: id.to_string(), name: name.to_string() })
            .collect();
        self
    }

    pub fn with_last_identifier(mut self, prefix: &str, id: &str) -> Self {
        self.last_identifiers.insert(prefix.to_string(), id.to_string());
        self
    }

    pub fn queue_product_result(&self, result: Scripted<BulkImportResult>) {
        self.product_results.lock().unwrap().push_back(result);
    }

    pub fn queue_employee_result(&self, result: Scripted<BulkImportResult>) {
        self.employee_results.lock().unwrap().push_back(result);
    }

    fn unscripted<T>(what: &str) -> ClientResult<T> {
        Err(ClientError::Internal(format!("{what} not scripted")))
    }

    fn take_outcome(
        slot: &Mutex<Option<Scripted<MutationOutcome>>>,
    ) -> ClientResult<MutationOutcome> {
        match slot.lock().unwrap().take() {
            Some(Ok(outcome)) => Ok(outcome),
            Some(Err(message)) => Err(ClientError::Internal(message)),
            None => Ok(MutationOutcome::ok()),
        }
    }
}

#[async_trait]
impl StoreApi for MockStore {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        Ok(self.departments.clone())
    }

    async fn list_locations(&self) -> ClientResult<Vec<Location>> {
        Ok(self.locations.clone())
    }

    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        Ok(Vec::new())
    }

    async fn list_serials(&self) -> ClientResult<Vec<SerialItem>> {
        Ok(Vec::new())
    }

    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        Ok(Vec::new())
    }

    async fn list_transactions(&self) -> ClientResult<Vec<BorrowTransaction>> {
        Ok(self.transactions.clone())
    }

    async fn last_identifier(&self, prefix: &str) -> ClientResult<Option<String>> {
        self.seed_queries.lock().unwrap().push(prefix.to_string());
        Ok(self.last_identifiers.get(prefix).cloned())
    }

    async fn borrow_item(&self, _params: &BorrowItemParams) -> ClientResult<MutationOutcome> {
        Self::take_outcome(&self.borrow_outcome)
    }

    async fn return_item(&self, _params: &ReturnItemParams) -> ClientResult<MutationOutcome> {
        Self::take_outcome(&self.return_outcome)
    }

    async fn approve_borrow_request(&self, _transaction_id: &str) -> ClientResult<MutationOutcome> {
        Self::take_outcome(&self.approve_outcome)
    }

    async fn reject_borrow_request(&self, _transaction_id: &str) -> ClientResult<MutationOutcome> {
        Self::take_outcome(&self.reject_outcome)
    }

    async fn create_product_and_serials(
        &self,
        _params: &CreateProductParams,
    ) -> ClientResult<CreatedProduct> {
        Self::unscripted("create_product_and_serials")
    }

    async fn update_product_and_stock(
        &self,
        _params: &UpdateProductStockParams,
    ) -> ClientResult<MutationOutcome> {
        Self::unscripted("update_product_and_stock")
    }

    async fn delete_product_safe(&self, _product_id: &str) -> ClientResult<MutationOutcome> {
        Self::unscripted("delete_product_safe")
    }

    async fn delete_serial_safe(&self, _serial_id: &str) -> ClientResult<MutationOutcome> {
        Self::unscripted("delete_serial_safe")
    }

    async fn update_serial_status(
        &self,
        _params: &UpdateSerialStatusParams,
    ) -> ClientResult<MutationOutcome> {
        Self::unscripted("update_serial_status")
    }

    async fn import_products_bulk(
        &self,
        rows: &[ProductImportRow],
    ) -> ClientResult<BulkImportResult> {
        self.product_batches.lock().unwrap().push(rows.to_vec());
        match self.product_results.lock().unwrap().pop_front() {
            Some(Ok(result)) => Ok(result),
            Some(Err(message)) => Err(ClientError::Internal(message)),
            None => Ok(BulkImportResult {
                success_count: rows.len() as u32,
                errors: Vec::new(),
            }),
        }
    }

    async fn import_employees_bulk(
        &self,
        rows: &[EmployeeImportRow],
    ) -> ClientResult<BulkImportResult> {
        self.employee_batches.lock().unwrap().push(rows.to_vec());
        match self.employee_results.lock().unwrap().pop_front() {
            Some(Ok(result)) => Ok(result),
            Some(Err(message)) => Err(ClientError::Internal(message)),
            None => Ok(BulkImportResult {
                success_count: rows.len() as u32,
                errors: Vec::new(),
            }),
        }
    }

    async fn get_dashboard_summary(&self) -> ClientResult<DashboardSummary> {
        Ok(DashboardSummary::default())
    }
}

/// Transaction row with the given raw status and empty timestamps.
pub fn transaction(id: &str, status: &str) -> BorrowTransaction {
    BorrowTransaction {
        id: id.to_string(),
        serial_id: format!("serial-{id}"),
        employee_id: format!("emp-{id}"),
        status: status.to_string(),
        borrowed_at: None,
        returned_at: None,
        note: None,
    }
}
