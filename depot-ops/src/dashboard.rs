//! Dashboard summary

use depot_client::{ClientResult, StoreApi};
use shared::rpc::DashboardSummary;

use crate::QueryCache;

/// Read-through fetch of the dashboard counters.
pub async fn fetch_dashboard<C: StoreApi>(
    store: &C,
    cache: &QueryCache,
) -> ClientResult<DashboardSummary> {
    if let Some(summary) = cache.dashboard.get() {
        return Ok(summary);
    }
    let summary = store.get_dashboard_summary().await?;
    cache.dashboard.put(summary.clone());
    Ok(summary)
}
