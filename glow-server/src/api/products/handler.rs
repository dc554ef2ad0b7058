//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::auth::Session;
use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate};
use crate::db::repository::ProductRepository;
use crate::utils::{AppError, AppResult};

/// GET /products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_all().await?;
    Ok(Json(products))
}

/// GET /product/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
    Ok(Json(product))
}

/// POST /products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;
    Ok(Json(product))
}

/// Payload for a stock adjustment
///
/// `status == "increase"` adds to the stock; any other value (or none)
/// subtracts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityAdjust {
    pub quantity_to_update: i64,
    #[serde(default)]
    pub status: Option<String>,
}

/// PATCH /products/quantity/{id} - 调整库存
pub async fn adjust_quantity(
    _session: Session,
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<QuantityAdjust>,
) -> AppResult<Json<Product>> {
    let increase = payload.status.as_deref() == Some("increase");

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .adjust_quantity(&id, payload.quantity_to_update, increase)
        .await?;

    tracing::info!(
        id = %id,
        delta = payload.quantity_to_update,
        increase,
        quantity = product.quantity,
        "Product stock adjusted"
    );

    Ok(Json(product))
}
