//! 商品 API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /products | GET | 全部商品 | 无 |
//! | /products | POST | 创建商品 | 无 |
//! | /product/{id} | GET | 单个商品 | 无 |
//! | /products/quantity/{id} | PATCH | 调整库存 | 需要 |

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/products", get(handler::list).post(handler::create))
        .route("/product/{id}", get(handler::get_by_id))
        .route("/products/quantity/{id}", patch(handler::adjust_quantity))
}
