use crate::{
    error::AppError,
    models::{PortfolioEntry, ProjectQuery},
    security::{sanitize_input, validate_sql_input},
};
use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

/// Public portfolio index.
///
/// Lists every project from every user, newest first, with the owner's
/// username attached. This is the anonymous landing-page view; no token is
/// required (the auth middleware whitelists the path). Search input goes
/// through the same screening the authenticated listing applies before it
/// is bound as an ILIKE parameter.
///
/// ## Query Parameters:
/// - `search` (optional): A string to search for in project titles and descriptions.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `PortfolioEntry` objects.
/// - `400 Bad Request`: If the search term fails the SQL screening check.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[get("/portfolio")]
pub async fn portfolio_index(
    pool: web::Data<PgPool>,
    query_params: web::Query<ProjectQuery>,
) -> Result<impl Responder, AppError> {
    let entries = match &query_params.search {
        Some(search) => {
            if validate_sql_input(search).is_err() {
                return Err(AppError::BadRequest("Invalid search query".into()));
            }
            let pattern = format!("%{}%", sanitize_input(search));
            sqlx::query_as::<_, PortfolioEntry>(
                "SELECT p.id, p.title, p.description, u.username, p.created_at \
                 FROM projects p \
                 JOIN users u ON u.id = p.user_id \
                 WHERE p.title ILIKE $1 OR p.description ILIKE $1 \
                 ORDER BY p.created_at DESC",
            )
            .bind(pattern)
            .fetch_all(&**pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, PortfolioEntry>(
                "SELECT p.id, p.title, p.description, u.username, p.created_at \
                 FROM projects p \
                 JOIN users u ON u.id = p.user_id \
                 ORDER BY p.created_at DESC",
            )
            .fetch_all(&**pool)
            .await?
        }
    };

    Ok(HttpResponse::Ok().json(entries))
}
