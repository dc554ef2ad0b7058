//! Session Extractor
//!
//! Custom extractor that validates the session token and yields the
//! bound email. The token travels in the `token` cookie; a
//! `Authorization: Bearer` header is accepted as a fallback.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use crate::AppError;
use crate::auth::{JwtService, Session, TOKEN_COOKIE};
use crate::core::ServerState;

impl FromRequestParts<ServerState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted earlier in this request
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(session.clone());
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let cookie_token = jar.get(TOKEN_COOKIE).map(|c| c.value().to_string());

        let token = match cookie_token {
            Some(t) => t,
            None => {
                // Fallback: Authorization: Bearer <token>
                let auth_header = parts
                    .headers
                    .get(http::header::AUTHORIZATION)
                    .and_then(|h| h.to_str().ok());

                match auth_header.and_then(JwtService::extract_from_header) {
                    Some(t) => t.to_string(),
                    None => {
                        tracing::warn!(uri = %parts.uri, "Request without session token");
                        return Err(AppError::Unauthorized);
                    }
                }
            }
        };

        let jwt_service = state.get_jwt_service();
        match jwt_service.validate_token(&token) {
            Ok(claims) => {
                let session = Session::from(claims);

                // Store in extensions for potential reuse
                parts.extensions.insert(session.clone());

                Ok(session)
            }
            Err(e) => {
                tracing::warn!(uri = %parts.uri, error = %e, "Session token rejected");

                match e {
                    crate::auth::JwtError::ExpiredToken => Err(AppError::TokenExpired),
                    _ => Err(AppError::InvalidToken),
                }
            }
        }
    }
}
