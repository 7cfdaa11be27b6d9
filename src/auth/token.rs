use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's id.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Lifetime of a session token before the user has to log in again.
const TOKEN_TTL_HOURS: i64 = 24;

/// Generates a session token for the given user id.
///
/// The token expires after [`TOKEN_TTL_HOURS`]. Signing requires the
/// `JWT_SECRET` environment variable; it is read on every call so the
/// process never caches a stale secret.
///
/// # Errors
/// `AppError::InternalServerError` when the secret is missing or encoding
/// fails.
pub fn generate_token(user_id: i32) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalServerError("JWT_SECRET not set".into()))?;

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a session token and returns its claims.
///
/// Signature and expiration are checked with the library defaults.
///
/// # Errors
/// `AppError::InternalServerError` when `JWT_SECRET` is missing;
/// `AppError::Unauthorized` when the token is malformed, tampered with, or
/// expired.
pub fn verify_token(token: &str) -> Result<Claims, AppError> {
    let secret = std::env::var("JWT_SECRET")
        .map_err(|_| AppError::InternalServerError("JWT_SECRET not set".into()))?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}
