use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{Project, ProjectInput, ProjectQuery},
    security::{sanitize_input, validate_sql_input},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Retrieves the authenticated user's projects.
///
/// Only projects owned by the caller are returned, newest first. An optional
/// `search` term matches case-insensitively against titles and descriptions.
///
/// ## Query Parameters:
/// - `search` (optional): A string to search for in project titles and descriptions.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Project` objects.
/// - `400 Bad Request`: If the search term fails the SQL screening check.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[get("")]
pub async fn list_projects(
    pool: web::Data<PgPool>,
    query_params: web::Query<ProjectQuery>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let projects = match &query_params.search {
        Some(search) => {
            if validate_sql_input(search).is_err() {
                return Err(AppError::BadRequest("Invalid search query".into()));
            }
            let pattern = format!("%{}%", sanitize_input(search));
            sqlx::query_as::<_, Project>(
                "SELECT id, title, description, created_at, updated_at, user_id \
                 FROM projects \
                 WHERE user_id = $1 AND (title ILIKE $2 OR description ILIKE $2) \
                 ORDER BY created_at DESC",
            )
            .bind(user.0)
            .bind(pattern)
            .fetch_all(&**pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Project>(
                "SELECT id, title, description, created_at, updated_at, user_id \
                 FROM projects WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(user.0)
            .fetch_all(&**pool)
            .await?
        }
    };

    Ok(HttpResponse::Ok().json(projects))
}

/// Creates a new project for the authenticated user.
///
/// Expects a JSON payload conforming to `ProjectInput`. The owner is always
/// the authenticated caller; there is no way to create a project for
/// somebody else.
///
/// ## Request Body:
/// - `title`: The title of the project (1-200 characters).
/// - `description`: The description of the project (1-1000 characters).
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Project` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `422 Unprocessable Entity`: If input validation on `ProjectInput` fails.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[post("")]
pub async fn create_project(
    pool: web::Data<PgPool>,
    project_data: web::Json<ProjectInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    // Validate input
    project_data.validate()?;

    let project = Project::new(project_data.into_inner(), user.0);

    let result = sqlx::query_as::<_, Project>(
        "INSERT INTO projects (id, title, description, created_at, updated_at, user_id) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id, title, description, created_at, updated_at, user_id",
    )
    .bind(project.id)
    .bind(project.title)
    .bind(project.description)
    .bind(project.created_at)
    .bind(project.updated_at)
    .bind(project.user_id)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Created().json(result))
}

/// Retrieves a specific project by its ID.
///
/// The authenticated user must own the project; anyone else receives the
/// same 404 an absent id produces.
///
/// ## Path Parameters:
/// - `id`: The UUID of the project to retrieve.
///
/// ## Responses:
/// - `200 OK`: Returns the `Project` object as JSON if found and owned by the user.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the project does not exist or is not owned by the caller.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[get("/{id}")]
pub async fn get_project(
    pool: web::Data<PgPool>,
    project_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let project_uuid = project_id.into_inner();

    let project = sqlx::query_as::<_, Project>(
        "SELECT id, title, description, created_at, updated_at, user_id \
         FROM projects WHERE id = $1",
    )
    .bind(project_uuid)
    .fetch_optional(&**pool)
    .await?;

    match project {
        Some(project) => {
            if project.user_id != user.0 {
                Err(AppError::NotFound("Project not found".into()))
            } else {
                Ok(HttpResponse::Ok().json(project))
            }
        }
        None => Err(AppError::NotFound("Project not found".into())),
    }
}

/// Updates an existing project.
///
/// Full update: title and description are both replaced and `updated_at` is
/// refreshed. Only the owner can update a project.
///
/// ## Path Parameters:
/// - `id`: The UUID of the project to update.
///
/// ## Request Body:
/// A JSON object matching `ProjectInput`; see `create_project`.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Project` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the project does not exist or is not owned by the caller.
/// - `422 Unprocessable Entity`: If input validation on `ProjectInput` fails.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[put("/{id}")]
pub async fn update_project(
    pool: web::Data<PgPool>,
    project_id: web::Path<Uuid>,
    project_data: web::Json<ProjectInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    project_data.validate()?;
    let project_uuid = project_id.into_inner();

    // First, verify ownership
    let ownership_check =
        sqlx::query_as::<_, (i32,)>("SELECT user_id FROM projects WHERE id = $1")
            .bind(project_uuid)
            .fetch_optional(&**pool)
            .await?;

    match ownership_check {
        Some((owner_user_id,)) => {
            if owner_user_id != user.0 {
                return Err(AppError::NotFound("Project not found".into()));
            }
        }
        None => return Err(AppError::NotFound("Project not found".into())),
    }

    // If ownership is verified, proceed with update
    let result = sqlx::query_as::<_, Project>(
        "UPDATE projects \
         SET title = $1, description = $2, updated_at = NOW() \
         WHERE id = $3 AND user_id = $4 \
         RETURNING id, title, description, created_at, updated_at, user_id",
    )
    .bind(&project_data.title)
    .bind(&project_data.description)
    .bind(project_uuid)
    .bind(user.0)
    .fetch_one(&**pool)
    .await?;

    Ok(HttpResponse::Ok().json(result))
}

/// Deletes a project by its ID.
///
/// Only the owner can delete a project.
///
/// ## Path Parameters:
/// - `id`: The UUID of the project to delete.
///
/// ## Responses:
/// - `204 No Content`: On successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If the project does not exist or is not owned by the caller.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[delete("/{id}")]
pub async fn delete_project(
    pool: web::Data<PgPool>,
    project_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let project_uuid = project_id.into_inner();

    let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
        .bind(project_uuid)
        .bind(user.0)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Project not found".into()));
    }

    Ok(HttpResponse::NoContent().finish())
}
