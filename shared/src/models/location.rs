//! Location Model

use serde::{Deserialize, Serialize};

/// Storage/office location reference record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub id: String,
    pub name: String,
}
