//! Course catalogue handlers.
//!
//! ```text
//! GET /api/courses?category=Dasturlash
//! GET /api/courses/1
//! ```

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::{CategoryFilter, Course, CourseId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CourseSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_path_id};

/// Query string for `GET /api/courses`.
#[derive(Debug, Default, Deserialize)]
pub struct CourseListQuery {
    /// Exact category name; omitted, empty or `Barcha yo'nalishlar` lists
    /// every course.
    pub category: Option<String>,
}

/// List courses, optionally narrowed to one category.
#[utoipa::path(
    get,
    path = "/api/courses",
    params(
        ("category" = Option<String>, Query, description = "Exact category name; `Barcha yo'nalishlar` means all")
    ),
    responses(
        (status = 200, description = "Courses in insertion order", body = [CourseSchema]),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "listCourses"
)]
#[get("/courses")]
pub async fn list_courses(
    state: web::Data<HttpState>,
    query: web::Query<CourseListQuery>,
) -> ApiResult<web::Json<Vec<Course>>> {
    let filter = CategoryFilter::from_query(query.category.as_deref());
    Ok(web::Json(state.courses.list_by_category(&filter).await))
}

/// Fetch one course with its lessons, materials and tests.
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = u64, Path, description = "Course identifier")
    ),
    responses(
        (status = 200, description = "Course", body = CourseSchema),
        (status = 400, description = "Invalid course id", body = ErrorSchema),
        (status = 404, description = "Course not found", body = ErrorSchema)
    ),
    tags = ["courses"],
    operation_id = "getCourse"
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Course>> {
    let id: CourseId = parse_path_id(&path, FieldName::new("id"))?;
    state
        .courses
        .find_by_id(id)
        .await
        .map(web::Json)
        .ok_or_else(|| Error::not_found(format!("course {id} not found")))
}
