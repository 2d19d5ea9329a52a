//! Employee bulk import pipeline
//!
//! The strict subset of the product flow: department and location names are
//! resolved against the reference tables, but no identifiers are generated —
//! `emp_code` always comes from the upload.

use depot_client::StoreApi;
use shared::rpc::EmployeeImportRow;
use tracing::{debug, info, warn};

use crate::QueryCache;
use crate::import::resolve::match_by_name;
use crate::import::{BATCH_SIZE, ImportError, ImportReport, batch_error, progress_pct, rows};

/// Drives one employee import run against the store.
pub struct EmployeeImporter<'a, C: StoreApi> {
    store: &'a C,
    cache: &'a QueryCache,
}

impl<'a, C: StoreApi> EmployeeImporter<'a, C> {
    pub fn new(store: &'a C, cache: &'a QueryCache) -> Self {
        Self { store, cache }
    }

    pub async fn run(&self, data: &[u8]) -> Result<ImportReport, ImportError> {
        self.run_with_progress(data, |_| {}).await
    }

    pub async fn run_with_progress(
        &self,
        data: &[u8],
        mut progress: impl FnMut(u8),
    ) -> Result<ImportReport, ImportError> {
        let departments = self.store.list_departments().await?;
        let locations = self.store.list_locations().await?;
        let raw = rows::parse_rows(data)?;

        let mut prepared = Vec::new();
        for row in &raw {
            let (Some(emp_code), Some(name)) =
                (rows::field(row, &["emp_code"]), rows::field(row, &["name"]))
            else {
                debug!("skipping employee row without emp_code or name");
                continue;
            };

            let department_id = rows::field(row, &["department"])
                .and_then(|input| match_by_name(input, &departments, |d| d.name.as_str()))
                .map(|d| d.id.clone());
            let location_id = rows::field(row, &["location"])
                .and_then(|input| match_by_name(input, &locations, |l| l.name.as_str()))
                .map(|l| l.id.clone());

            prepared.push(EmployeeImportRow {
                emp_code: emp_code.to_string(),
                name: name.to_string(),
                nickname: rows::text_field(row, &["nickname"]),
                department_id,
                gender: rows::text_field(row, &["gender"]),
                location_id,
                email: rows::text_field(row, &["email"]),
                tel: rows::text_field(row, &["tel"]),
            });
        }

        let total = prepared.len();
        let mut report = ImportReport::default();
        if total == 0 {
            return Ok(report);
        }

        let mut processed = 0usize;
        for (index, batch) in prepared.chunks(BATCH_SIZE).enumerate() {
            let start = index * BATCH_SIZE;
            match self.store.import_employees_bulk(batch).await {
                Ok(result) => {
                    report.success_count += result.success_count;
                    report.errors.extend(result.errors);
                }
                Err(err) => {
                    warn!(batch = index, error = %err, "employee import batch failed");
                    report.errors.push(batch_error(start, &err));
                }
            }
            processed += batch.len();
            let pct = progress_pct(processed, total);
            progress(pct);
            debug!(processed, total, pct, "employee import progress");
        }

        if report.success_count > 0 {
            self.cache.employees.invalidate();
        }
        info!(
            success = report.success_count,
            errors = report.errors.len(),
            "employee import finished"
        );
        Ok(report)
    }
}
