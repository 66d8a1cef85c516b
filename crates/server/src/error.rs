use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::{RegistrationError, ValidationFailure};
use log::error;
use serde_json::json;

/// Request-body extractor: same parsing as `axum::Json`, but a
/// malformed or incomplete body answers 400 in the standard envelope
/// instead of axum's default 422
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Maps the engine's error taxonomy onto HTTP statuses and the
/// `{ok:false, error}` envelope. Database errors are logged in full
/// server-side and surfaced as a generic 500.
pub enum ApiError {
    BadRequest(String),
    Registration(RegistrationError),
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        Self::Registration(err)
    }
}

impl From<sea_orm::DbErr> for ApiError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Registration(RegistrationError::Db(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Registration(err) => match &err {
                RegistrationError::AuthenticationRequired => {
                    (StatusCode::UNAUTHORIZED, err.to_string())
                }
                RegistrationError::AuthorizationDenied(_) => {
                    (StatusCode::FORBIDDEN, err.to_string())
                }
                RegistrationError::Validation(failure) => {
                    let status = match failure {
                        // Holds and closed windows deny the actor, not
                        // the request shape
                        ValidationFailure::HoldActive(_)
                        | ValidationFailure::WindowClosed(_) => StatusCode::FORBIDDEN,
                        ValidationFailure::DuplicateCourseEnrollment(_) => StatusCode::CONFLICT,
                        _ => StatusCode::BAD_REQUEST,
                    };
                    (status, err.to_string())
                }
                RegistrationError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
                RegistrationError::Conflict(_) => (StatusCode::CONFLICT, err.to_string()),
                RegistrationError::Db(db_err) => {
                    error!("database error: {db_err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                    )
                }
            },
        };

        (status, Json(json!({ "ok": false, "error": message }))).into_response()
    }
}
