//! Port abstraction for the course catalogue.

use async_trait::async_trait;

use crate::domain::{CategoryFilter, Course, CourseId, NewCourse};

/// Read and create access to catalogue courses.
///
/// Listings preserve insertion order. Courses are immutable once created.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Every course in insertion order.
    async fn list_all(&self) -> Vec<Course>;

    /// Fetch a course by identifier.
    async fn find_by_id(&self, id: CourseId) -> Option<Course>;

    /// Courses passing `filter`, in insertion order.
    async fn list_by_category(&self, filter: &CategoryFilter) -> Vec<Course>;

    /// Allocate an id and store the course.
    async fn create(&self, course: NewCourse) -> Course;
}
