//! Session Token Handlers
//!
//! Issues the signed session cookie that gates the protected endpoints.

use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};

use crate::auth::TOKEN_COOKIE;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
}

/// POST /jwt - 为邮箱签发会话 cookie
///
/// Cookie 属性随环境变化：生产环境跨站点 (Secure + SameSite=None)，
/// 其他环境同站点严格模式。
pub async fn issue(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(payload): Json<TokenRequest>,
) -> AppResult<(CookieJar, Json<TokenResponse>)> {
    let email = match payload.email.as_deref().map(str::trim) {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => return Err(AppError::validation("Email is required")),
    };

    let token = state
        .get_jwt_service()
        .issue_token(&email)
        .map_err(|e| AppError::internal(format!("Failed to issue token: {e}")))?;

    let mut cookie = Cookie::build((TOKEN_COOKIE, token)).http_only(true).path("/");

    if state.config.is_production() {
        cookie = cookie.secure(true).same_site(SameSite::None);
    } else {
        cookie = cookie.same_site(SameSite::Strict);
    }

    tracing::info!(email = %email, "Session token issued");

    Ok((jar.add(cookie.build()), Json(TokenResponse { success: true })))
}
