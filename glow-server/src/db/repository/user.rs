//! User Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserProfile};
use crate::utils::now_millis;

// =============================================================================
// User Repository
// =============================================================================

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let user: Option<User> = result.take(0)?;
        Ok(user)
    }

    /// Register a user, keyed by email
    ///
    /// Atomic insert-if-absent against the unique email index: a new record
    /// gets role "customer" and a creation timestamp, an existing record is
    /// returned unchanged (no field merge). The no-op assignment in the
    /// ON DUPLICATE KEY branch is what makes the existing record survive
    /// as-is.
    pub async fn upsert(&self, email: &str, profile: UserProfile) -> RepoResult<User> {
        let mut result = self
            .base
            .db()
            .query(
                "INSERT INTO user (email, name, role, created_at) \
                 VALUES ($email, $name, 'customer', $created_at) \
                 ON DUPLICATE KEY UPDATE email = email",
            )
            .bind(("email", email.to_string()))
            .bind(("name", profile.name))
            .bind(("created_at", now_millis()))
            .await?;

        let users: Vec<User> = result.take(0)?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::Database(format!("Failed to upsert user {email}")))
    }

    /// Mark a user as having requested a status change
    ///
    /// Single conditional update. Zero rows updated means the email is
    /// unknown or the user already requested; both cases surface as the
    /// same rejection.
    pub async fn request_status_change(&self, email: &str) -> RepoResult<User> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE user SET status = 'Requested' \
                 WHERE email = $email AND (status = NONE OR status != 'Requested') \
                 RETURN AFTER",
            )
            .bind(("email", email.to_string()))
            .await?;

        let users: Vec<User> = result.take(0)?;
        users.into_iter().next().ok_or_else(|| {
            RepoError::Conflict(format!("Status change already requested for {email}"))
        })
    }
}
