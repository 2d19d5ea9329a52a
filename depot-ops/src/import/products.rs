//! Product bulk import pipeline

use depot_client::StoreApi;
use shared::rpc::ProductImportRow;
use tracing::{debug, info, warn};

use crate::QueryCache;
use crate::import::{
    BATCH_SIZE, ImportError, ImportReport, RunningNumbers, batch_error, prefix_from_category,
    progress_pct, resolve_category, rows,
};

/// A prepared row waiting for its identifier.
struct PendingRow {
    explicit_id: Option<String>,
    prefix: String,
    row: ProductImportRow,
}

/// Drives one product import run against the store.
pub struct ProductImporter<'a, C: StoreApi> {
    store: &'a C,
    cache: &'a QueryCache,
}

impl<'a, C: StoreApi> ProductImporter<'a, C> {
    pub fn new(store: &'a C, cache: &'a QueryCache) -> Self {
        Self { store, cache }
    }

    pub async fn run(&self, data: &[u8]) -> Result<ImportReport, ImportError> {
        self.run_with_progress(data, |_| {}).await
    }

    /// Full pipeline: preload → parse → prepare → seed → batched submit.
    ///
    /// `progress` receives the rounded percentage after each batch.
    pub async fn run_with_progress(
        &self,
        data: &[u8],
        mut progress: impl FnMut(u8),
    ) -> Result<ImportReport, ImportError> {
        // Categories can change between sessions; always preload fresh.
        let categories = self.store.list_categories().await?;
        let raw = rows::parse_rows(data)?;

        let mut pending = Vec::new();
        let mut auto_prefixes: Vec<String> = Vec::new();
        for row in &raw {
            let Some(name) = rows::field(row, &["name", "product_name"]) else {
                // Accepted simplification: nameless rows vanish without an
                // error entry (see DESIGN.md).
                debug!("skipping product row without a name");
                continue;
            };

            let category_input = rows::field(row, &["category"]).unwrap_or("");
            let resolved = resolve_category(category_input, &categories);
            let prefix = prefix_from_category(&resolved.name);
            let explicit_id = rows::text_field(row, &["p_id", "id", "code"]);

            if explicit_id.is_none() && !auto_prefixes.contains(&prefix) {
                auto_prefixes.push(prefix.clone());
            }

            pending.push(PendingRow {
                explicit_id,
                prefix,
                row: ProductImportRow {
                    p_id: String::new(),
                    name: name.to_string(),
                    category_id: resolved.id,
                    category_name: resolved.name,
                    brand: rows::text_field(row, &["brand"]),
                    model: rows::text_field(row, &["model"]),
                    price: rows::number_field(row, &["price"]),
                    unit: rows::text_field(row, &["unit"]),
                    quantity: rows::int_field(row, &["quantity", "qty"]),
                    description: rows::text_field(row, &["description"]),
                    notes: rows::text_field(row, &["notes"]),
                    image_url: rows::text_field(row, &["image_url"]),
                },
            });
        }

        // Seed counters only for prefixes that will actually generate ids.
        let mut counters = RunningNumbers::new();
        for prefix in &auto_prefixes {
            let last = self.store.last_identifier(prefix).await?;
            counters.seed(prefix, last.as_deref());
        }

        let prepared: Vec<ProductImportRow> = pending
            .into_iter()
            .map(|mut p| {
                p.row.p_id = match p.explicit_id {
                    Some(id) => id,
                    None => counters.next(&p.prefix),
                };
                p.row
            })
            .collect();

        let total = prepared.len();
        let mut report = ImportReport::default();
        if total == 0 {
            return Ok(report);
        }

        let mut processed = 0usize;
        for (index, batch) in prepared.chunks(BATCH_SIZE).enumerate() {
            let start = index * BATCH_SIZE;
            match self.store.import_products_bulk(batch).await {
                Ok(result) => {
                    report.success_count += result.success_count;
                    report.errors.extend(result.errors);
                }
                Err(err) => {
                    // One failed batch never stops the rest of the run.
                    warn!(batch = index, error = %err, "product import batch failed");
                    report.errors.push(batch_error(start, &err));
                }
            }
            processed += batch.len();
            let pct = progress_pct(processed, total);
            progress(pct);
            debug!(processed, total, pct, "product import progress");
        }

        if report.success_count > 0 {
            self.cache.invalidate_product_views();
        }
        info!(
            success = report.success_count,
            errors = report.errors.len(),
            "product import finished"
        );
        Ok(report)
    }
}
