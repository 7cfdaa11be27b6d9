use crate::{
    auth::{
        generate_token, hash_password, verify_password, AuthResponse, AuthenticatedUserId,
        LoginRequest, RegisterRequest,
    },
    error::AppError,
    models::User,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns an authentication token, so the
/// client is signed in immediately after registering.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    // Check if email already exists
    let existing_user: Option<i32> = sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
        .bind(&register_data.email)
        .fetch_optional(&**pool)
        .await?;

    if existing_user.is_some() {
        return Err(AppError::BadRequest("Email already registered".into()));
    }

    // Hash password
    let password_hash = hash_password(&register_data.password)?;

    // Insert new user
    let user_id: i32 = sqlx::query_scalar(
        "INSERT INTO users (username, email, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&register_data.username)
    .bind(&register_data.email)
    .bind(&password_hash)
    .fetch_one(&**pool)
    .await?;

    // Generate token
    let token = generate_token(user_id)?;

    Ok(HttpResponse::Created().json(AuthResponse { token, user_id }))
}

/// Login user
///
/// Authenticates a user and returns an authentication token. An unknown
/// email and a wrong password produce the same response, so the endpoint
/// cannot be used to probe which addresses have accounts.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    // Get user from database
    let user: Option<(i32, String)> =
        sqlx::query_as("SELECT id, password_hash FROM users WHERE email = $1")
            .bind(&login_data.email)
            .fetch_optional(&**pool)
            .await?;

    match user {
        Some((user_id, password_hash)) => {
            // Verify password
            if verify_password(&login_data.password, &password_hash)? {
                let token = generate_token(user_id)?;
                Ok(HttpResponse::Ok().json(AuthResponse { token, user_id }))
            } else {
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}

/// End the current session
///
/// Tokens are stateless, so logging out amounts to the client discarding
/// its token. The endpoint still requires a valid token: clients get a 401
/// here when their session already expired, instead of silently "logging
/// out" of nothing.
#[post("/logout")]
pub async fn logout(user: AuthenticatedUserId) -> Result<impl Responder, AppError> {
    log::debug!("user {} logged out", user.0);
    Ok(HttpResponse::Ok().json(json!({ "message": "Logged out successfully" })))
}

/// Current user profile
///
/// Returns the account behind the presented token. A token whose user has
/// been deleted since issuance yields a 404.
#[get("/me")]
pub async fn me(
    pool: web::Data<PgPool>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let profile = sqlx::query_as::<_, User>(
        "SELECT id, username, email, created_at FROM users WHERE id = $1",
    )
    .bind(user.0)
    .fetch_optional(&**pool)
    .await?;

    match profile {
        Some(profile) => Ok(HttpResponse::Ok().json(profile)),
        None => Err(AppError::NotFound("User not found".into())),
    }
}
