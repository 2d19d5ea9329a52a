//! Application layer for the Depot asset workspace
//!
//! Everything the hosted store does not own: CSV bulk-import
//! reconciliation, the query cache with snapshot-based optimistic
//! mutation, and the borrow/return transaction workflows.

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod import;
pub mod logger;
pub mod transactions;

pub use cache::QueryCache;
pub use config::Config;
