//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the JSON shape of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed, fails validation or breaks a uniqueness rule.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials were missing or wrong.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "already enrolled in this course")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, always including a `code` for
    /// validation failures.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::VideoLesson`].
#[derive(ToSchema)]
#[schema(as = crate::domain::VideoLesson, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct VideoLessonSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Python ga kirish")]
    title: String,
    #[schema(example = "15 daqiqa")]
    duration: String,
    #[schema(example = "kqtD5dpn9C8")]
    youtube_id: String,
}

/// OpenAPI schema for [`crate::domain::MaterialKind`].
#[derive(ToSchema)]
#[schema(as = crate::domain::MaterialKind)]
pub enum MaterialKindSchema {
    #[schema(rename = "pdf")]
    Pdf,
    #[schema(rename = "doc")]
    Doc,
}

/// OpenAPI schema for [`crate::domain::CourseMaterial`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CourseMaterial, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseMaterialSchema {
    id: u64,
    title: String,
    /// Document format; selects the download content type.
    #[schema(rename = "type")]
    kind: MaterialKindSchema,
    #[schema(example = "python-asoslari.pdf")]
    filename: String,
    #[schema(example = "2.5 MB")]
    size: String,
}

/// OpenAPI schema for [`crate::domain::TestQuestion`].
#[derive(ToSchema)]
#[schema(as = crate::domain::TestQuestion, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TestQuestionSchema {
    id: u64,
    question: String,
    options: Vec<String>,
    /// Zero-based index into `options`.
    correct_answer: usize,
}

/// OpenAPI schema for [`crate::domain::CourseTest`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CourseTest, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseTestSchema {
    id: u64,
    title: String,
    question_count: u32,
    duration: String,
    questions: Vec<TestQuestionSchema>,
}

/// OpenAPI schema for [`crate::domain::Course`].
///
/// Catalogue entry with its ordered lessons, materials and tests.
#[derive(ToSchema)]
#[schema(as = crate::domain::Course, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CourseSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Python Dasturlash")]
    title: String,
    description: String,
    /// Price in minor currency units.
    #[schema(example = 299_000)]
    price: u64,
    #[schema(example = "8 hafta")]
    duration: String,
    /// Decimal rating kept as text.
    #[schema(example = "4.9")]
    rating: String,
    review_count: u32,
    image_url: String,
    #[schema(example = "Dasturlash")]
    category: String,
    teacher_id: u64,
    video_lessons: Vec<VideoLessonSchema>,
    materials: Vec<CourseMaterialSchema>,
    tests: Vec<CourseTestSchema>,
}

/// OpenAPI schema for [`crate::domain::Enrollment`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Enrollment, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnrollmentSchema {
    id: u64,
    user_id: u64,
    course_id: u64,
    /// Completion percentage in `[0, 100]`.
    #[schema(minimum = 0, maximum = 100, example = 73)]
    progress: u8,
    /// RFC 3339 timestamp set by the server.
    #[schema(example = "2024-05-01T09:30:00Z")]
    enrolled_at: String,
    /// Ascending, duplicate-free lesson ids.
    completed_lessons: Vec<u64>,
    /// Ascending, duplicate-free test ids.
    completed_tests: Vec<u64>,
}

/// OpenAPI schema for [`crate::domain::EnrollmentWithCourse`].
///
/// Enrollment fields flattened alongside the resolved course, which is `null`
/// when the course no longer exists.
#[derive(ToSchema)]
#[schema(as = crate::domain::EnrollmentWithCourse, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnrollmentWithCourseSchema {
    id: u64,
    user_id: u64,
    course_id: u64,
    #[schema(minimum = 0, maximum = 100)]
    progress: u8,
    enrolled_at: String,
    completed_lessons: Vec<u64>,
    completed_tests: Vec<u64>,
    course: Option<CourseSchema>,
}
