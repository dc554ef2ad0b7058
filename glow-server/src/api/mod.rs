//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`session`] - 会话令牌签发
//! - [`users`] - 用户注册和状态管理接口
//! - [`products`] - 商品管理接口
//! - [`orders`] - 订单管理接口

pub mod health;
pub mod orders;
pub mod products;
pub mod session;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
