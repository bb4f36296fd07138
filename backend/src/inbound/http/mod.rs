//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod courses;
pub mod downloads;
pub mod enrollments;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Routes served under `/api`.
///
/// Handlers expect a `web::Data<state::HttpState>` registered on the app.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use academy::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(validation::json_config())
        .app_data(validation::query_config())
        .service(
            web::scope("/auth")
                .service(auth::register)
                .service(auth::login),
        )
        .service(courses::list_courses)
        .service(courses::get_course)
        .service(enrollments::enroll)
        .service(enrollments::list_user_enrollments)
        .service(enrollments::update_progress)
        .service(downloads::download_material)
}
