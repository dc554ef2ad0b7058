//! Product Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

pub type ProductId = Thing;

/// Product model
///
/// Stored fields use the store front's camelCase names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<ProductId>,
    pub product_name: String,
    #[serde(default)]
    pub image: String,
    pub category: String,
    /// Stock count. Adjustments carry no floor check, so this can go negative.
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub product_name: String,
    pub image: Option<String>,
    pub category: String,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub description: Option<String>,
}
