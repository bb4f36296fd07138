//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the strongly typed catalogue and enrollment model used by
//! the HTTP adapter and the in-memory store, plus the services that enforce
//! cross-entity rules. Types are immutable unless documented otherwise and
//! describe their invariants and serde contracts in their own Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, Course, Enrollment and their value types.
//! - AccountService, EnrollmentService, CatalogueSeeder: domain services.
//! - ports: trait seams implemented by adapters and services.

mod account_service;
mod auth;
mod catalogue_seeder;
mod course;
mod enrollment;
mod enrollment_service;
pub mod error;
mod ids;
pub mod ports;
mod trace_id;
mod user;

pub use self::account_service::AccountService;
pub use self::auth::{CredentialsValidationError, LoginCredentials, RegistrationRequest};
pub use self::catalogue_seeder::{
    CatalogueFixture, CatalogueSeedOutcome, CatalogueSeeder, CatalogueSeedingError, SeedingResult,
};
pub use self::course::{
    ALL_CATEGORIES, CategoryFilter, Course, CourseDraft, CourseMaterial, CourseTest,
    CourseValidationError, MaterialKind, NewCourse, Rating, TestQuestion, VideoLesson,
};
pub use self::enrollment::{
    Enrollment, EnrollmentWithCourse, NewEnrollment, Progress, ProgressOutOfRange, ProgressUpdate,
};
pub use self::enrollment_service::EnrollmentService;
pub use self::error::{EmptyErrorMessage, Error, ErrorCode};
pub use self::ids::{
    CourseId, EnrollmentId, IdValidationError, LessonId, MaterialId, QuestionId, TestId, UserId,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, FullName, NewUser, PasswordHash, User, UserType, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use academy::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("nope"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
