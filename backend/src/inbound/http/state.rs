//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CourseRepository, EnrollmentCommand, EnrollmentQuery, LoginService, UserRegistration,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn UserRegistration>,
    pub login: Arc<dyn LoginService>,
    /// Course reads go straight to the repository port.
    pub courses: Arc<dyn CourseRepository>,
    pub enrollments: Arc<dyn EnrollmentCommand>,
    pub enrollments_query: Arc<dyn EnrollmentQuery>,
}
