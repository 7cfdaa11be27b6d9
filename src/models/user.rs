use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account, as exposed to clients.
///
/// The stored `password_hash` column is intentionally absent: this struct is
/// what `/api/auth/me` and any future user-facing endpoint serialize, so the
/// hash can never leak through it.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
