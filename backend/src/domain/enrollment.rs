//! Enrollments: a user's progress through one course.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Course, CourseId, EnrollmentId, LessonId, TestId, UserId};

/// Raised when a progress percentage falls outside `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("progress must be between 0 and 100 (got {0})")]
pub struct ProgressOutOfRange(pub i64);

/// Completion percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// No progress yet.
    pub const ZERO: Self = Self(0);

    /// Upper bound.
    pub const COMPLETE: Self = Self(100);

    /// Validate a percentage.
    ///
    /// # Examples
    /// ```
    /// use academy::domain::Progress;
    ///
    /// assert_eq!(Progress::new(73).unwrap().get(), 73);
    /// assert!(Progress::new(101).is_err());
    /// assert!(Progress::new(-1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ProgressOutOfRange> {
        u8::try_from(value)
            .ok()
            .filter(|percent| *percent <= 100)
            .map(Self)
            .ok_or(ProgressOutOfRange(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Progress {
    type Error = ProgressOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Data required to create an enrollment; the store assigns the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewEnrollment {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub enrolled_at: DateTime<Utc>,
}

/// Replacement values for an enrollment's mutable fields.
///
/// Applied wholesale: nothing is merged with the previous state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressUpdate {
    pub progress: Progress,
    pub completed_lessons: BTreeSet<LessonId>,
    pub completed_tests: BTreeSet<TestId>,
}

impl ProgressUpdate {
    /// Lesson ids that `course` does not contain.
    pub fn unknown_lessons<'a>(&'a self, course: &'a Course) -> impl Iterator<Item = LessonId> + 'a {
        self.completed_lessons
            .iter()
            .copied()
            .filter(|lesson| !course.has_lesson(*lesson))
    }

    /// Test ids that `course` does not contain.
    pub fn unknown_tests<'a>(&'a self, course: &'a Course) -> impl Iterator<Item = TestId> + 'a {
        self.completed_tests
            .iter()
            .copied()
            .filter(|test| !course.has_test(*test))
    }
}

/// A user's enrollment in a course.
///
/// ## Invariants
/// - At most one enrollment exists per `(user_id, course_id)`.
/// - `user_id` and `course_id` are weak references; the store does not
///   check that they resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    id: EnrollmentId,
    user_id: UserId,
    course_id: CourseId,
    progress: Progress,
    enrolled_at: DateTime<Utc>,
    completed_lessons: BTreeSet<LessonId>,
    completed_tests: BTreeSet<TestId>,
}

impl Enrollment {
    /// Start an enrollment with zero progress.
    #[must_use]
    pub fn from_new(id: EnrollmentId, new_enrollment: NewEnrollment) -> Self {
        Self {
            id,
            user_id: new_enrollment.user_id,
            course_id: new_enrollment.course_id,
            progress: Progress::ZERO,
            enrolled_at: new_enrollment.enrolled_at,
            completed_lessons: BTreeSet::new(),
            completed_tests: BTreeSet::new(),
        }
    }

    /// Replace progress and completion sets.
    pub fn apply(&mut self, update: ProgressUpdate) {
        let ProgressUpdate {
            progress,
            completed_lessons,
            completed_tests,
        } = update;
        self.progress = progress;
        self.completed_lessons = completed_lessons;
        self.completed_tests = completed_tests;
    }

    pub const fn id(&self) -> EnrollmentId {
        self.id
    }
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
    pub const fn course_id(&self) -> CourseId {
        self.course_id
    }
    pub const fn progress(&self) -> Progress {
        self.progress
    }
    pub const fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }
    pub const fn completed_lessons(&self) -> &BTreeSet<LessonId> {
        &self.completed_lessons
    }
    pub const fn completed_tests(&self) -> &BTreeSet<TestId> {
        &self.completed_tests
    }
}

/// Enrollment joined with its course for the "my courses" view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWithCourse {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    /// `None` when the course id no longer resolves.
    pub course: Option<Course>,
}
