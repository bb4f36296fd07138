//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the wiring shared between suites lives here.

use std::sync::Arc;

use academy::domain::{AccountService, EnrollmentService};
use academy::inbound::http::state::HttpState;
use academy::outbound::memory::{
    MemoryCourseRepository, MemoryEnrollmentRepository, MemoryStore, MemoryUserRepository,
};
use academy::outbound::security::Argon2PasswordHasher;
use argon2::Params;
use mockable::DefaultClock;

pub type Accounts = AccountService<MemoryUserRepository, Argon2PasswordHasher>;
pub type Enrollments =
    EnrollmentService<MemoryUserRepository, MemoryCourseRepository, MemoryEnrollmentRepository>;

/// Domain services over one in-memory store.
#[derive(Clone)]
pub struct MemoryServices {
    pub courses: Arc<MemoryCourseRepository>,
    pub accounts: Arc<Accounts>,
    pub enrollments: Arc<Enrollments>,
}

/// Argon2 at its minimum cost so registration stays fast.
pub fn fast_hasher() -> Arc<Argon2PasswordHasher> {
    let params = Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params");
    Arc::new(Argon2PasswordHasher::with_params(params))
}

/// Wire services over `store` with a fast hasher and the system clock.
pub fn memory_services(store: &MemoryStore) -> MemoryServices {
    let users = Arc::new(MemoryUserRepository::new(store.clone()));
    let courses = Arc::new(MemoryCourseRepository::new(store.clone()));
    let enrollments = Arc::new(MemoryEnrollmentRepository::new(store.clone()));
    MemoryServices {
        courses: courses.clone(),
        accounts: Arc::new(AccountService::new(users.clone(), fast_hasher())),
        enrollments: Arc::new(EnrollmentService::new(
            users,
            courses,
            enrollments,
            Arc::new(DefaultClock),
        )),
    }
}

impl MemoryServices {
    /// Expose the services through the HTTP state ports.
    pub fn http_state(&self) -> HttpState {
        HttpState {
            registration: self.accounts.clone(),
            login: self.accounts.clone(),
            courses: self.courses.clone(),
            enrollments: self.enrollments.clone(),
            enrollments_query: self.enrollments.clone(),
        }
    }
}
