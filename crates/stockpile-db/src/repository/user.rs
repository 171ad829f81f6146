//! # User Repository
//!
//! Login accounts for the HTTP API. Passwords are stored as argon2
//! hashes; the plaintext never touches the database.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// A stored login account.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Looks up an active user by username. Deactivated accounts are
    /// invisible to login.
    pub async fn get_by_username(&self, username: &str) -> DbResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, password_hash, is_active, created_at, updated_at
            FROM users
            WHERE username = ?1 AND is_active = 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Inserts a new user. Duplicate usernames surface as
    /// `DbError::UniqueViolation`.
    pub async fn insert(&self, user: &UserRecord) -> DbResult<()> {
        debug!(username = %user.username, "Inserting user");

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, is_active, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deactivates a user without deleting the row, so historical
    /// references stay intact.
    pub async fn deactivate(&self, username: &str) -> DbResult<()> {
        debug!(username = %username, "Deactivating user");

        let result = sqlx::query("UPDATE users SET is_active = 0 WHERE username = ?1")
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", username));
        }

        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Hash a password for storage.
pub fn hash_password(password: &str) -> DbResult<String> {
    use argon2::{
        password_hash::{rand_core::OsRng, SaltString},
        Argon2, PasswordHasher,
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a password against its stored hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};

    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
