//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper produces an `invalid_request` [`Error`] whose details carry
//! the offending `field` and a machine-readable `code`.

use std::collections::BTreeSet;
use std::fmt::Display;

use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::{Error, Progress};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    ProgressOutOfRange,
    MalformedBody,
    MalformedQuery,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidId => "invalid_id",
            Self::ProgressOutOfRange => "progress_out_of_range",
            Self::MalformedBody => "malformed_body",
            Self::MalformedQuery => "malformed_query",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<serde_json::Value>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize, value: u64) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "value": value,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_id_error(field: FieldName, value: impl Display) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be a positive integer"))
        .with_value(ErrorCode::InvalidId, value.to_string())
}

/// Parse a path segment into an identifier newtype.
pub(crate) fn parse_path_id<T>(raw: &str, field: FieldName) -> Result<T, Error>
where
    T: TryFrom<u64>,
{
    raw.parse::<u64>()
        .ok()
        .and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| invalid_id_error(field, raw))
}

/// Convert a JSON integer into an identifier newtype.
pub(crate) fn parse_body_id<T>(value: u64, field: FieldName) -> Result<T, Error>
where
    T: TryFrom<u64>,
{
    T::try_from(value).map_err(|_| invalid_id_error(field, value))
}

/// Convert a list of JSON integers into an ordered set of identifiers.
///
/// Duplicates collapse; the first invalid entry is reported with its index.
pub(crate) fn parse_id_set<T>(values: Vec<u64>, field: FieldName) -> Result<BTreeSet<T>, Error>
where
    T: TryFrom<u64> + Ord,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            T::try_from(value).map_err(|_| {
                let name = field.as_str();
                ValidationError::new(field, format!("{name} must contain positive integers"))
                    .with_index(ErrorCode::InvalidId, index, value)
            })
        })
        .collect()
}

pub(crate) fn parse_progress(value: i64, field: FieldName) -> Result<Progress, Error> {
    Progress::new(value).map_err(|_| {
        let name = field.as_str();
        ValidationError::new(field, format!("{name} must be between 0 and 100"))
            .with_value(ErrorCode::ProgressOutOfRange, value)
    })
}

fn malformed(code: ErrorCode, message: String) -> actix_web::Error {
    Error::invalid_request(message)
        .with_details(json!({ "code": code.as_str() }))
        .into()
}

/// JSON extractor settings that report malformed bodies as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        malformed(ErrorCode::MalformedBody, format!("invalid request body: {err}"))
    })
}

/// Query extractor settings that report malformed query strings as domain
/// errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        malformed(ErrorCode::MalformedQuery, format!("invalid query string: {err}"))
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{CourseId, LessonId};
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("courseId");

    fn details_code(error: &Error) -> Option<&str> {
        error
            .details()
            .and_then(|details| details.get("code"))
            .and_then(serde_json::Value::as_str)
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("abc")]
    #[case("")]
    fn parse_path_id_rejects_non_positive_text(#[case] raw: &str) {
        let err = parse_path_id::<CourseId>(raw, FIELD).expect_err("invalid id");
        assert_eq!(details_code(&err), Some("invalid_id"));
        assert_eq!(
            err.details().and_then(|details| details.get("value")),
            Some(&json!(raw))
        );
    }

    #[rstest]
    fn parse_path_id_accepts_positive_integers() {
        let id: CourseId = parse_path_id("42", FIELD).expect("valid id");
        assert_eq!(id.get(), 42);
    }

    #[rstest]
    fn parse_id_set_collapses_duplicates() {
        let ids: BTreeSet<LessonId> =
            parse_id_set(vec![2, 1, 2], FieldName::new("completedLessons")).expect("valid ids");
        assert_eq!(ids.iter().map(|id| id.get()).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[rstest]
    fn parse_id_set_reports_index_of_zero() {
        let err = parse_id_set::<LessonId>(vec![1, 0], FieldName::new("completedLessons"))
            .expect_err("zero id");
        assert_eq!(
            err.details().and_then(|details| details.get("index")),
            Some(&json!(1))
        );
    }

    #[rstest]
    #[case(-1)]
    #[case(101)]
    fn parse_progress_rejects_out_of_range(#[case] value: i64) {
        let err = parse_progress(value, FieldName::new("progress")).expect_err("out of range");
        assert_eq!(details_code(&err), Some("progress_out_of_range"));
    }

    #[rstest]
    fn missing_field_names_the_field() {
        let err = missing_field_error(FieldName::new("progress"));
        assert_eq!(err.message(), "missing required field: progress");
        assert_eq!(details_code(&err), Some("missing_field"));
    }
}
