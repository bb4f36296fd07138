//! Enrollment handlers.
//!
//! ```text
//! POST /api/enrollments {"userId":1,"courseId":2}
//! GET /api/enrollments/user/1
//! PUT /api/enrollments/3/progress {"progress":73,"completedLessons":[1,2],"completedTests":[1]}
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    CourseId, Enrollment, EnrollmentId, EnrollmentWithCourse, Error, LessonId, ProgressUpdate,
    TestId, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EnrollmentSchema, EnrollmentWithCourseSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_body_id, parse_id_set, parse_path_id, parse_progress,
};

/// Request body for `POST /api/enrollments`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    #[schema(example = 1)]
    pub user_id: u64,
    #[schema(example = 2)]
    pub course_id: u64,
}

/// Request body for `PUT /api/enrollments/{id}/progress`.
///
/// The completion lists replace the stored ones wholesale; omitting them or
/// sending `null` clears them.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    #[schema(minimum = 0, maximum = 100, example = 73)]
    pub progress: Option<i64>,
    #[serde(default)]
    pub completed_lessons: Option<Vec<u64>>,
    #[serde(default)]
    pub completed_tests: Option<Vec<u64>>,
}

impl TryFrom<ProgressRequest> for ProgressUpdate {
    type Error = Error;

    fn try_from(value: ProgressRequest) -> Result<Self, Self::Error> {
        let progress_field = FieldName::new("progress");
        let raw = value
            .progress
            .ok_or_else(|| missing_field_error(progress_field))?;
        Ok(Self {
            progress: parse_progress(raw, progress_field)?,
            completed_lessons: parse_id_set::<LessonId>(
                value.completed_lessons.unwrap_or_default(),
                FieldName::new("completedLessons"),
            )?,
            completed_tests: parse_id_set::<TestId>(
                value.completed_tests.unwrap_or_default(),
                FieldName::new("completedTests"),
            )?,
        })
    }
}

/// Enroll a user in a course.
#[utoipa::path(
    post,
    path = "/api/enrollments",
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Enrollment created", body = EnrollmentSchema),
        (status = 400, description = "Invalid request or already enrolled", body = ErrorSchema),
        (status = 404, description = "User or course not found", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "enroll"
)]
#[post("/enrollments")]
pub async fn enroll(
    state: web::Data<HttpState>,
    payload: web::Json<EnrollRequest>,
) -> ApiResult<web::Json<Enrollment>> {
    let EnrollRequest { user_id, course_id } = payload.into_inner();
    let user_id: UserId = parse_body_id(user_id, FieldName::new("userId"))?;
    let course_id: CourseId = parse_body_id(course_id, FieldName::new("courseId"))?;
    let enrollment = state.enrollments.enroll(user_id, course_id).await?;
    Ok(web::Json(enrollment))
}

/// List a user's enrollments, each joined with its course.
#[utoipa::path(
    get,
    path = "/api/enrollments/user/{userId}",
    params(
        ("userId" = u64, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Enrollments with courses", body = [EnrollmentWithCourseSchema]),
        (status = 400, description = "Invalid user id", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "listUserEnrollments"
)]
#[get("/enrollments/user/{user_id}")]
pub async fn list_user_enrollments(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<EnrollmentWithCourse>>> {
    let user_id: UserId = parse_path_id(&path, FieldName::new("userId"))?;
    let enrollments = state.enrollments_query.list_for_user(user_id).await?;
    Ok(web::Json(enrollments))
}

/// Replace an enrollment's progress and completion sets.
#[utoipa::path(
    put,
    path = "/api/enrollments/{id}/progress",
    request_body = ProgressRequest,
    params(
        ("id" = u64, Path, description = "Enrollment identifier")
    ),
    responses(
        (status = 200, description = "Updated enrollment", body = EnrollmentSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Enrollment not found", body = ErrorSchema)
    ),
    tags = ["enrollments"],
    operation_id = "updateEnrollmentProgress"
)]
#[put("/enrollments/{id}/progress")]
pub async fn update_progress(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ProgressRequest>,
) -> ApiResult<web::Json<Enrollment>> {
    let enrollment_id: EnrollmentId = parse_path_id(&path, FieldName::new("id"))?;
    let update = ProgressUpdate::try_from(payload.into_inner())?;
    let enrollment = state
        .enrollments
        .update_progress(enrollment_id, update)
        .await?;
    Ok(web::Json(enrollment))
}

#[cfg(test)]
#[path = "enrollments_tests.rs"]
mod tests;
