pub mod auth;
pub mod contact;
pub mod health;
pub mod portfolio;
pub mod projects;

use actix_web::web;

/// Registers every `/api` route. The caller mounts this inside a scope
/// wrapped with `AuthMiddleware`; which of these paths skip the token check
/// is decided by the middleware whitelist, not here.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::login)
            .service(auth::register)
            .service(auth::logout)
            .service(auth::me),
    )
    .service(
        web::scope("/projects")
            .service(projects::list_projects)
            .service(projects::create_project)
            .service(projects::get_project)
            .service(projects::update_project)
            .service(projects::delete_project),
    )
    .service(portfolio::portfolio_index)
    .service(contact::submit_contact);
}
