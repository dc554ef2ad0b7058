//! 用户 API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /users/{email} | POST | 注册 (幂等) | 无 |
//! | /users/{email} | PATCH | 请求状态变更 | 需要 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/users/{email}",
        post(handler::upsert).patch(handler::request_status_change),
    )
}
