//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer and the
//! schema mirrors from [`crate::inbound::http::schemas`], which describe the
//! domain types without coupling them to utoipa. Swagger UI serves the
//! document in debug builds.

use crate::inbound::http::auth::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use crate::inbound::http::enrollments::{EnrollRequest, ProgressRequest};
use crate::inbound::http::schemas::{
    CourseMaterialSchema, CourseSchema, CourseTestSchema, EnrollmentSchema,
    EnrollmentWithCourseSchema, ErrorCodeSchema, ErrorSchema, MaterialKindSchema,
    TestQuestionSchema, VideoLessonSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Academy course catalogue API",
        description = "Course browsing, registration, enrollment and progress tracking."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::enrollments::enroll,
        crate::inbound::http::enrollments::list_user_enrollments,
        crate::inbound::http::enrollments::update_progress,
        crate::inbound::http::downloads::download_material,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        UserResponse,
        AuthResponse,
        EnrollRequest,
        ProgressRequest,
        CourseSchema,
        VideoLessonSchema,
        CourseMaterialSchema,
        MaterialKindSchema,
        CourseTestSchema,
        TestQuestionSchema,
        EnrollmentSchema,
        EnrollmentWithCourseSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "courses", description = "Course catalogue"),
        (name = "enrollments", description = "Enrollments and progress"),
        (name = "materials", description = "Course material downloads"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
