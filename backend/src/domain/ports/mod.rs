//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`]) are implemented by
//! outbound adapters. Driving ports ([`UserRegistration`], [`LoginService`],
//! [`EnrollmentCommand`], [`EnrollmentQuery`]) are implemented by domain
//! services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod course_repository;
mod enrollment_command;
mod enrollment_query;
mod enrollment_repository;
mod login_service;
mod password_hasher;
mod user_registration;
mod user_repository;

pub use course_repository::CourseRepository;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
pub use enrollment_command::EnrollmentCommand;
#[cfg(test)]
pub use enrollment_command::MockEnrollmentCommand;
pub use enrollment_query::EnrollmentQuery;
#[cfg(test)]
pub use enrollment_query::MockEnrollmentQuery;
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError};
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
