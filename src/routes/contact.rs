use crate::{
    error::AppError,
    models::{ContactInput, ContactMessage},
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

/// Submit a contact message.
///
/// Anonymous endpoint backing the public contact form. Messages are stored
/// and never exposed through the API again; the response confirms receipt
/// without echoing the content back.
///
/// ## Request Body:
/// - `name`: Name of the sender (1-100 characters).
/// - `email`: Reply address of the sender.
/// - `message`: The message body (1-2000 characters).
///
/// ## Responses:
/// - `201 Created`: The message was stored.
/// - `422 Unprocessable Entity`: If input validation on `ContactInput` fails.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[post("/contact")]
pub async fn submit_contact(
    pool: web::Data<PgPool>,
    contact_data: web::Json<ContactInput>,
) -> Result<impl Responder, AppError> {
    // Validate input
    contact_data.validate()?;

    let message = ContactMessage::new(contact_data.into_inner());

    sqlx::query(
        "INSERT INTO contact_messages (id, name, email, message, created_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(message.id)
    .bind(message.name)
    .bind(message.email)
    .bind(message.message)
    .bind(message.created_at)
    .execute(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(json!({ "message": "Message sent successfully" })))
}
