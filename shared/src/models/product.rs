//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Display identifier, `<PREFIX>-<running number>` for imported rows
    pub p_id: String,
    pub name: String,
    /// Category reference (String ID)
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price: f64,
    pub unit: Option<String>,
    /// Aggregate stock count, maintained by the store procedures
    pub quantity: i32,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub p_id: Option<String>,
    pub name: String,
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub quantity: Option<i32>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}
