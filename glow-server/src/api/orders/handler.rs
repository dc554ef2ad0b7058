//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::Session;
use crate::core::ServerState;
use crate::db::models::{EnrichedOrder, Order, OrderCreate};
use crate::db::repository::OrderRepository;
use crate::utils::AppResult;

/// POST /order - 创建订单
///
/// 不扣减商品库存，库存调整由客户端另行调用。
pub async fn create(
    _session: Session,
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(payload).await?;

    tracing::info!(
        customer = %order.customer.email,
        product_id = %order.product_id,
        "Order created"
    );

    Ok(Json(order))
}

/// GET /customer-order/{email} - 客户订单列表
///
/// 每条订单携带所引用商品的 name/image/category 字段。
pub async fn list_by_customer(
    _session: Session,
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<EnrichedOrder>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_customer(&email).await?;
    Ok(Json(orders))
}

/// DELETE /order/{id} - 取消订单
///
/// 已送达的订单不可取消 (409)；订单不存在返回 404。
pub async fn cancel(
    _session: Session,
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.cancel(&id).await?;

    tracing::info!(id = %id, "Order cancelled");

    Ok(Json(order))
}
