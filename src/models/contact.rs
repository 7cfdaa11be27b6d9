use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Payload of the public contact form.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactInput {
    /// Name of the sender.
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Reply address of the sender.
    #[validate(email, length(max = 255))]
    pub email: String,

    /// The message body. Between 1 and 2000 characters.
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

/// A submitted contact message.
///
/// Write-only: rows are inserted by the public form and never read back
/// through the API, so this type deliberately has no `Serialize` impl.
#[derive(Debug)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(input: ContactInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            message: input.message,
            created_at: Utc::now(),
        }
    }
}
