//! Data models
//!
//! Row types as the hosted store serves them over REST. All IDs are
//! `String` (store-issued surrogate keys); reference tables join on `name`
//! during import, so `name` uniqueness is assumed but not enforced here.

pub mod category;
pub mod department;
pub mod employee;
pub mod location;
pub mod product;
pub mod serial;
pub mod transaction;

// Re-exports
pub use category::*;
pub use department::*;
pub use employee::*;
pub use location::*;
pub use product::*;
pub use serial::*;
pub use transaction::*;
