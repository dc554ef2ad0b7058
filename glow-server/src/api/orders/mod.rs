//! 订单 API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /order | POST | 创建订单 | 需要 |
//! | /customer-order/{email} | GET | 客户订单列表 (含商品字段) | 需要 |
//! | /order/{id} | DELETE | 取消订单 (已送达除外) | 需要 |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order", post(handler::create))
        .route("/order/{id}", delete(handler::cancel))
        .route("/customer-order/{email}", get(handler::list_by_customer))
}
