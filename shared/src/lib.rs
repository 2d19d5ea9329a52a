//! Shared types for the Depot asset workspace
//!
//! Domain models, the transaction status taxonomy, and the payload/result
//! types of the hosted store's remote procedures.

pub mod models;
pub mod rpc;
pub mod status;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use status::TransactionStatus;
