//!
//! # Application Error Handling
//!
//! Defines `AppError`, the single error type every handler in the portfolio
//! backend returns. Centralizing errors here keeps the handlers thin: they
//! bubble failures up with `?` and this module decides the HTTP shape.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so actix converts
//! a returned error into a JSON response with the right status code. `From`
//! implementations cover the fallible layers underneath: `sqlx::Error` for
//! the database, `validator::ValidationErrors` for form validation,
//! `jsonwebtoken::errors::Error` for token verification, and
//! `bcrypt::BcryptError` for password hashing.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// All error conditions the backend can answer a request with.
#[derive(Debug)]
pub enum AppError {
    /// Authentication missing, invalid, or expired (HTTP 401).
    Unauthorized(String),
    /// Malformed or otherwise unacceptable request (HTTP 400).
    /// Also covers business rejections such as a duplicate email.
    BadRequest(String),
    /// The requested record does not exist, or belongs to someone else
    /// and must look like it does not exist (HTTP 404).
    NotFound(String),
    /// Unexpected server-side failure (HTTP 500).
    InternalServerError(String),
    /// Database operation failed (HTTP 500). Wraps `sqlx` errors.
    DatabaseError(String),
    /// Payload deserialized but failed form validation (HTTP 422).
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            // Clients see database failures as plain server errors.
            AppError::DatabaseError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            AppError::ValidationError(msg) => HttpResponse::UnprocessableEntity().json(json!({
                "error": msg
            })),
        }
    }
}

/// `RowNotFound` becomes a 404; every other database failure is a 500.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// Failed `validator` checks keep their per-field messages.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Token decoding/verification failures are authentication failures.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized(error.to_string())
    }
}

/// Hashing failures are internal; they never reflect user input problems.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
