//! 认证模块 - JWT 会话令牌
//!
//! - [`JwtService`] - 令牌签发和验证
//! - [`Session`] - 已验证会话的提取器

pub mod extractor;
pub mod jwt;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService, Session};

/// 会话 cookie 名称
pub const TOKEN_COOKIE: &str = "token";
