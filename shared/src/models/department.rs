//! Department Model

use serde::{Deserialize, Serialize};

/// Department reference record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: String,
    pub name: String,
}
