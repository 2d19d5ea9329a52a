//! Borrow/return transaction workflows
//!
//! Thin wrappers over the store procedures: every transition rule and all
//! stock arithmetic live remotely. The local work is cache bookkeeping,
//! optimistic status speculation, and status-filtered list views.

use depot_client::{ClientError, StoreApi};
use shared::TransactionStatus;
use shared::models::BorrowTransaction;
use shared::rpc::{BorrowItemParams, MutationOutcome, ReturnItemParams};
use thiserror::Error;
use tracing::info;

use crate::QueryCache;

/// Workflow error
#[derive(Debug, Error)]
pub enum OpsError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The procedure ran and refused; its message is passed through verbatim
    #[error("{0}")]
    Remote(String),
}

fn refusal(outcome: MutationOutcome) -> OpsError {
    OpsError::Remote(outcome.message.unwrap_or_else(|| "ทำรายการไม่สำเร็จ".to_string()))
}

fn set_status(rows: &mut Vec<BorrowTransaction>, id: &str, status: TransactionStatus) {
    if let Some(transaction) = rows.iter_mut().find(|t| t.id == id) {
        transaction.status = status.as_str().to_string();
    }
}

/// Borrow/return workflows over a store client and the query cache.
pub struct TransactionService<'a, C: StoreApi> {
    store: &'a C,
    cache: &'a QueryCache,
}

impl<'a, C: StoreApi> TransactionService<'a, C> {
    pub fn new(store: &'a C, cache: &'a QueryCache) -> Self {
        Self { store, cache }
    }

    /// Transactions whose raw status normalizes to `filter`; all rows when
    /// `None`. Rows with unrecognized statuses only appear unfiltered.
    pub async fn list(
        &self,
        filter: Option<TransactionStatus>,
    ) -> Result<Vec<BorrowTransaction>, OpsError> {
        let all = match self.cache.transactions.get() {
            Some(rows) => rows,
            None => {
                let rows = self.store.list_transactions().await?;
                self.cache.transactions.put(rows.clone());
                rows
            }
        };

        Ok(match filter {
            Some(want) => all
                .into_iter()
                .filter(|t| TransactionStatus::normalize(Some(&t.status)) == Some(want))
                .collect(),
            None => all,
        })
    }

    /// Create a borrow request / check an item out.
    pub async fn borrow(&self, params: &BorrowItemParams) -> Result<(), OpsError> {
        let outcome = self.store.borrow_item(params).await?;
        if !outcome.success {
            return Err(refusal(outcome));
        }
        self.cache.invalidate_transaction_views();
        info!(serial_id = %params.serial_id, "item borrowed");
        Ok(())
    }

    /// Return a borrowed item.
    pub async fn return_item(&self, params: &ReturnItemParams) -> Result<(), OpsError> {
        let outcome = self.store.return_item(params).await?;
        if !outcome.success {
            return Err(refusal(outcome));
        }
        self.cache.invalidate_transaction_views();
        info!(transaction_id = %params.transaction_id, "item returned");
        Ok(())
    }

    /// Approve a pending borrow request.
    ///
    /// Optimistic: the cached row flips to `Active` before the call; the
    /// snapshot is restored if the store refuses or the call fails.
    pub async fn approve(&self, transaction_id: &str) -> Result<(), OpsError> {
        let snapshot = self
            .cache
            .transactions
            .speculate(|rows| set_status(rows, transaction_id, TransactionStatus::Active));

        match self.store.approve_borrow_request(transaction_id).await {
            Ok(outcome) if outcome.success => {
                self.cache.serials.invalidate();
                self.cache.dashboard.invalidate();
                info!(transaction_id, "borrow request approved");
                Ok(())
            }
            Ok(outcome) => {
                self.cache.transactions.restore(snapshot);
                Err(refusal(outcome))
            }
            Err(err) => {
                self.cache.transactions.restore(snapshot);
                Err(err.into())
            }
        }
    }

    /// Reject a pending borrow request. Optimistic, like [`Self::approve`].
    pub async fn reject(&self, transaction_id: &str) -> Result<(), OpsError> {
        let snapshot = self
            .cache
            .transactions
            .speculate(|rows| set_status(rows, transaction_id, TransactionStatus::Rejected));

        match self.store.reject_borrow_request(transaction_id).await {
            Ok(outcome) if outcome.success => {
                self.cache.dashboard.invalidate();
                info!(transaction_id, "borrow request rejected");
                Ok(())
            }
            Ok(outcome) => {
                self.cache.transactions.restore(snapshot);
                Err(refusal(outcome))
            }
            Err(err) => {
                self.cache.transactions.restore(snapshot);
                Err(err.into())
            }
        }
    }
}
