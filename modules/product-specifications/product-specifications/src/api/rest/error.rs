use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use super::problem::{Problem, ValidationViolation};
use crate::domain::error::DomainError;

/// Field reported when a body error cannot be tied to one field.
const BODY_FIELD: &str = "body";

/// Map a domain error to an RFC 9457 Problem.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::SpecificationNotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found", e.to_string())
                .with_code("SPECIFICATION_NOT_FOUND")
        }
        DomainError::ProductNotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found", e.to_string())
                .with_code("PRODUCT_NOT_FOUND")
        }
        DomainError::AssignmentNotFound { .. } => {
            Problem::new(StatusCode::NOT_FOUND, "Not Found", e.to_string())
                .with_code("ASSIGNMENT_NOT_FOUND")
        }
        DomainError::Validation { violations } => Problem::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation Failed",
            "The given data was invalid.",
        )
        .with_code("VALIDATION_ERROR")
        .with_errors(
            violations
                .iter()
                .map(|v| ValidationViolation {
                    field: v.field.clone(),
                    message: v.message.clone(),
                })
                .collect(),
        ),
        DomainError::Forbidden { .. } => {
            tracing::warn!(error = %e, "Access forbidden");
            Problem::new(StatusCode::FORBIDDEN, "Forbidden", e.to_string()).with_code("FORBIDDEN")
        }
        DomainError::Persistence(_) => {
            tracing::error!(error = ?e, "Persistence error occurred");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal database error occurred",
            )
            .with_code("PERSISTENCE_ERROR")
        }
    };

    problem.with_instance(instance).with_trace_id(trace_id)
}

/// Map a rejected JSON body to a Problem.
///
/// Type errors become a 422 validation failure on the offending field; a
/// malformed document or a wrong content type keeps the rejection's status.
pub fn json_rejection_to_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    let problem = match rejection {
        JsonRejection::JsonDataError(e) => {
            let (field, message) = split_data_error(&e.body_text());
            Problem::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Failed",
                "The given data was invalid.",
            )
            .with_code("VALIDATION_ERROR")
            .with_errors(vec![ValidationViolation { field, message }])
        }
        JsonRejection::JsonSyntaxError(_) => Problem::new(
            StatusCode::BAD_REQUEST,
            "Bad Request",
            rejection.body_text(),
        )
        .with_code("INVALID_JSON"),
        JsonRejection::MissingJsonContentType(_) => Problem::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported Media Type",
            rejection.body_text(),
        )
        .with_code("UNSUPPORTED_MEDIA_TYPE"),
        _ => Problem::new(rejection.status(), "Bad Request", rejection.body_text())
            .with_code("INVALID_REQUEST_BODY"),
    };
    tracing::debug!(status = %problem.status, "request body rejected");
    problem.with_instance(instance)
}

/// Splits `"...target type: input_type: invalid type: ..."` into the field
/// path and the serde message.
fn split_data_error(text: &str) -> (String, String) {
    let detail = text
        .split_once("target type: ")
        .map_or(text, |(_, rest)| rest);
    match detail.split_once(": ") {
        Some((path, message))
            if path
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']'))
                && !path.trim_matches('.').is_empty() =>
        {
            (path.to_owned(), message.to_owned())
        }
        _ => (BODY_FIELD.to_owned(), detail.to_owned()),
    }
}

/// Lets handlers use `?` on domain results.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}
