//! Course material downloads.
//!
//! Materials are not stored; every request receives a fixed placeholder
//! document whose format follows the requested file extension.
//!
//! ```text
//! GET /api/download/python-asoslari.pdf
//! ```

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;

const PDF_PLACEHOLDER: &[u8] = include_bytes!("../../../fixtures/downloads/placeholder.pdf");
const DOC_PLACEHOLDER: &str = "Bu kurs uchun DOC material.";
const PDF_CONTENT_TYPE: &str = "application/pdf";
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

fn validate_filename(filename: &str) -> Result<(), Error> {
    if filename.is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename.contains("..")
    {
        return Err(
            Error::invalid_request("filename must be a plain file name").with_details(json!({
                "field": "filename",
                "value": filename,
                "code": "invalid_filename",
            })),
        );
    }
    Ok(())
}

fn placeholder_for(filename: &str) -> (&'static str, &'static [u8]) {
    if filename.ends_with(".pdf") {
        (PDF_CONTENT_TYPE, PDF_PLACEHOLDER)
    } else {
        (DOCX_CONTENT_TYPE, DOC_PLACEHOLDER.as_bytes())
    }
}

/// Download a course material as an attachment.
#[utoipa::path(
    get,
    path = "/api/download/{filename}",
    params(
        ("filename" = String, Path, description = "Material file name; `.pdf` selects a PDF")
    ),
    responses(
        (
            status = 200,
            description = "Placeholder document: PDF for `.pdf` names, DOCX otherwise",
            headers(("Content-Disposition" = String, description = "attachment; filename=\"...\""))
        ),
        (status = 400, description = "Invalid file name", body = ErrorSchema)
    ),
    tags = ["materials"],
    operation_id = "downloadMaterial"
)]
#[get("/download/{filename}")]
pub async fn download_material(path: web::Path<String>) -> ApiResult<HttpResponse> {
    let filename = path.into_inner();
    validate_filename(&filename)?;
    let (content_type, body) = placeholder_for(&filename);
    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(body))
}
