//! Order Model
//!
//! 每个订单只引用一个商品，productId 以字符串形式存储商品记录 ID

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

pub type OrderId = Thing;

/// Order status enum
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
}

/// Customer reference embedded in an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<OrderId>,
    pub customer: Customer,
    /// Record id of the ordered product, as a "product:key" string
    pub product_id: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    /// Creation timestamp (epoch millis)
    pub created_at: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer: Customer,
    pub product_id: String,
    pub status: Option<OrderStatus>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

/// Order with product display fields promoted from the referenced product
///
/// The enrichment fields stay empty when the product reference does not
/// resolve; the nested product record never appears in the output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedOrder {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<OrderId>,
    pub customer: Customer,
    pub product_id: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub price: f64,
    pub created_at: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}
