//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::Session;
use crate::core::ServerState;
use crate::db::models::{User, UserProfile};
use crate::db::repository::UserRepository;
use crate::utils::AppResult;

/// POST /users/{email} - 注册用户 (幂等)
///
/// 已注册的邮箱原样返回现有记录，不合并任何字段。
pub async fn upsert(
    State(state): State<ServerState>,
    Path(email): Path<String>,
    Json(profile): Json<UserProfile>,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.upsert(&email, profile).await?;
    Ok(Json(user))
}

/// PATCH /users/{email} - 请求状态变更
///
/// 不消费请求体。未注册邮箱和重复请求返回同一个冲突结果。
pub async fn request_status_change(
    _session: Session,
    State(state): State<ServerState>,
    Path(email): Path<String>,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo.request_status_change(&email).await?;

    tracing::info!(email = %email, "User status change requested");

    Ok(Json(user))
}
