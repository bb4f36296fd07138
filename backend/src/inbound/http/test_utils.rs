//! Test helpers for inbound HTTP components.
//!
//! Handlers are exercised against the real in-memory adapters and services
//! so that status codes reflect the full request path.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use argon2::Params;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{CourseRepository, UserRepository};
use crate::domain::{
    AccountService, Course, CourseDraft, Email, EnrollmentService, FullName, NewCourse, NewUser,
    PasswordHash, User, UserType,
};
use crate::inbound::http::{api_scope, state::HttpState};
use crate::outbound::memory::{
    MemoryCourseRepository, MemoryEnrollmentRepository, MemoryStore, MemoryUserRepository,
};
use crate::outbound::security::Argon2PasswordHasher;

/// Clock pinned to a fixed instant.
pub struct FixtureClock(pub DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Instant reported by [`FixtureClock`] in handler tests.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// Build handler state over a fresh in-memory store.
///
/// Argon2 runs with its minimum cost so registration stays fast in tests.
pub fn memory_state(store: &MemoryStore) -> HttpState {
    let users = Arc::new(MemoryUserRepository::new(store.clone()));
    let courses = Arc::new(MemoryCourseRepository::new(store.clone()));
    let enrollments = Arc::new(MemoryEnrollmentRepository::new(store.clone()));
    let params = Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params");
    let hasher = Arc::new(Argon2PasswordHasher::with_params(params));
    let accounts = Arc::new(AccountService::new(users.clone(), hasher));
    let enrollment_service = Arc::new(EnrollmentService::new(
        users,
        courses.clone(),
        enrollments,
        Arc::new(FixtureClock(fixture_now())),
    ));
    HttpState {
        registration: accounts.clone(),
        login: accounts,
        courses,
        enrollments: enrollment_service.clone(),
        enrollments_query: enrollment_service,
    }
}

/// Course draft with two lessons and one test in the given category.
pub fn course_draft(title: &str, category: &str) -> CourseDraft {
    serde_json::from_value(json!({
        "title": title,
        "description": "Namuna kurs",
        "price": 299000,
        "duration": "8 hafta",
        "rating": "4.9",
        "reviewCount": 1250,
        "imageUrl": "https://example.com/course.jpg",
        "category": category,
        "teacherId": 1,
        "videoLessons": [
            { "id": 1, "title": "Kirish", "duration": "15 daqiqa", "youtubeId": "a" },
            { "id": 2, "title": "O'zgaruvchilar", "duration": "20 daqiqa", "youtubeId": "b" }
        ],
        "materials": [
            { "id": 1, "title": "Qo'llanma", "type": "pdf", "filename": "qollanma.pdf", "size": "2.5 MB" }
        ],
        "tests": [
            { "id": 1, "title": "Asoslar testi", "questionCount": 10, "duration": "15 daqiqa" }
        ]
    }))
    .expect("course draft deserialises")
}

/// Store a course through the repository adapter.
pub async fn seed_course(store: &MemoryStore, title: &str, category: &str) -> Course {
    MemoryCourseRepository::new(store.clone())
        .create(NewCourse::new(course_draft(title, category)).expect("valid course"))
        .await
}

/// Store a student directly, bypassing password hashing.
pub async fn seed_user(store: &MemoryStore, email: &str) -> User {
    MemoryUserRepository::new(store.clone())
        .create(NewUser {
            email: Email::new(email).expect("valid email"),
            password_hash: PasswordHash::new("unused-digest"),
            full_name: FullName::new("Test Student").expect("valid name"),
            user_type: UserType::Student,
        })
        .await
        .expect("unique email")
}

/// Application serving the `/api` scope over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(crate::Trace)
        .service(api_scope())
}
