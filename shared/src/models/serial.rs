//! Serialized Item Model

use serde::{Deserialize, Serialize};

/// One physical unit of a product
///
/// `status` stays a raw string on the wire; the store's `update_serial_status`
/// procedure owns which values are legal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialItem {
    pub id: String,
    pub serial_no: String,
    /// Product reference (String ID)
    pub product_id: String,
    pub status: String,
    /// Location reference (String ID)
    pub location_id: Option<String>,
}
