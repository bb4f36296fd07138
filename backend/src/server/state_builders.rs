//! Builders for the HTTP handler state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use academy::domain::{AccountService, EnrollmentService};
use academy::inbound::http::state::HttpState;
use academy::outbound::memory::{
    MemoryCourseRepository, MemoryEnrollmentRepository, MemoryStore, MemoryUserRepository,
};
use academy::outbound::security::Argon2PasswordHasher;

/// Repository adapters sharing one in-memory store.
#[derive(Clone)]
pub struct MemoryAdapters {
    pub users: Arc<MemoryUserRepository>,
    pub courses: Arc<MemoryCourseRepository>,
    pub enrollments: Arc<MemoryEnrollmentRepository>,
}

impl MemoryAdapters {
    /// Wrap every repository adapter around `store`.
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            users: Arc::new(MemoryUserRepository::new(store.clone())),
            courses: Arc::new(MemoryCourseRepository::new(store.clone())),
            enrollments: Arc::new(MemoryEnrollmentRepository::new(store.clone())),
        }
    }
}

/// Wire the domain services over the adapters and expose them as ports.
pub fn build_http_state(adapters: &MemoryAdapters) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let accounts = Arc::new(AccountService::new(
        adapters.users.clone(),
        Arc::new(Argon2PasswordHasher::new()),
    ));
    let enrollments = Arc::new(EnrollmentService::new(
        adapters.users.clone(),
        adapters.courses.clone(),
        adapters.enrollments.clone(),
        clock,
    ));

    web::Data::new(HttpState {
        registration: accounts.clone(),
        login: accounts,
        courses: adapters.courses.clone(),
        enrollments: enrollments.clone(),
        enrollments_query: enrollments,
    })
}
