//! In-memory storage adapters.
//!
//! [`MemoryStore`] holds the entity tables and the identity allocator. The
//! repository adapters are thin views over one shared store and enforce the
//! uniqueness rules (one user per email, one enrollment per user and course)
//! inside the same write lock as the insert. State lives for the lifetime of
//! the process.

mod course_repository;
mod enrollment_repository;
mod id_allocator;
mod store;
mod user_repository;

pub use course_repository::MemoryCourseRepository;
pub use enrollment_repository::MemoryEnrollmentRepository;
pub use id_allocator::{EntityKind, IdentityAllocator};
pub use store::MemoryStore;
pub use user_repository::MemoryUserRepository;
