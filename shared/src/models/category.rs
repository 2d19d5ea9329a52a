//! Category Model

use serde::{Deserialize, Serialize};

/// Product category reference record
///
/// `name` is the human-entered join key used by the CSV import; it usually
/// carries a parenthesized short code, e.g. `"Information Technology (IT)"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}
