use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Input structure for creating or updating a project.
/// Contains validation rules for its fields.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProjectInput {
    /// The title of the project.
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// The description of the project.
    /// Required; between 1 and 1000 characters.
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

/// A portfolio project as stored in the database and returned by the API.
///
/// Every project belongs to exactly one user; ownership is enforced in the
/// handlers by scoping queries to `user_id`.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique identifier for the project (UUID v4).
    pub id: Uuid,
    /// The title of the project.
    pub title: String,
    /// The description of the project.
    pub description: String,
    /// Timestamp of when the project was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the project.
    pub updated_at: DateTime<Utc>,
    /// Identifier of the user who owns the project.
    pub user_id: i32,
}

/// Query parameters accepted by the project listing endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectQuery {
    /// Search term matched case-insensitively against title and description.
    pub search: Option<String>,
}

/// A row of the public portfolio index: a project joined with the username
/// of its owner. Anonymous visitors see these instead of raw `Project`s.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct PortfolioEntry {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new `Project` from `ProjectInput` and the owner's `user_id`.
    /// Sets `created_at` and `updated_at` to the current time and `id` to a
    /// fresh UUID.
    pub fn new(input: ProjectInput, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            created_at: now,
            updated_at: now,
            user_id,
        }
    }
}
