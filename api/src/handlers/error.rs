//! Mapping from domain failures to HTTP responses
//!
//! Client errors carry the domain message. Server errors are logged with
//! full context and answered with a generic message.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use std::collections::BTreeMap;
use validator::ValidationErrors;

use hrm_core::errors::{AuthError, DomainError, TokenError};
use hrm_shared::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt};

const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Errors a handler can return
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body failed field constraints
    #[error("Invalid request data")]
    InvalidFields(#[from] ValidationErrors),

    /// Body is not valid JSON for the endpoint
    #[error("Invalid JSON body")]
    MalformedBody { reason: String },
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } | DomainError::ValidationErr(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(AuthError::EmailAlreadyRegistered) => StatusCode::CONFLICT,
        DomainError::Auth(AuthError::AccountNotFound) => StatusCode::NOT_FOUND,
        DomainError::Token(TokenError::SigningFailed { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::BAD_REQUEST,
        DomainError::Auth(AuthError::NotificationFailed { .. })
        | DomainError::StorageUnavailable { .. }
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn domain_error_body(error: &DomainError) -> ErrorResponse {
    match error {
        DomainError::ValidationErr(validation) => {
            ErrorResponse::new(error.code(), validation.to_string())
                .add_detail("field", validation.field())
        }
        // This one has a client-safe message of its own
        DomainError::Auth(AuthError::NotificationFailed { .. }) => {
            ErrorResponse::new(error.code(), error.to_string())
        }
        _ if error.is_server_error() => ErrorResponse::new(error.code(), INTERNAL_ERROR_MESSAGE),
        _ => ErrorResponse::new(error.code(), error.to_string()),
    }
}

/// Field name as it appears in request bodies
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (camel_case(field), messages)
        })
        .collect()
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => status_for(error),
            ApiError::InvalidFields(_) | ApiError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            ApiError::Domain(error) => {
                if error.is_server_error() {
                    tracing::error!(code = error.code(), error = ?error, "Request failed");
                } else {
                    tracing::info!(code = error.code(), error = %error, "Request rejected");
                }
                domain_error_body(error)
            }
            ApiError::InvalidFields(errors) => {
                let fields = field_messages(errors);
                tracing::info!(?fields, "Request rejected: invalid fields");
                ErrorResponse::new(error_codes::VALIDATION_ERROR, self.to_string())
                    .add_detail("fields", fields)
            }
            ApiError::MalformedBody { reason } => {
                tracing::info!(reason = %reason, "Request rejected: malformed body");
                ErrorResponse::new(error_codes::VALIDATION_ERROR, self.to_string())
                    .add_detail("reason", reason)
            }
        };

        body.to_response(status)
    }
}

/// `JsonConfig` error handler: malformed or oversized bodies become 400s
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::MalformedBody {
        reason: error.to_string(),
    }
    .into()
}
