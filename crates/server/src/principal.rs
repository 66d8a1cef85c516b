use crate::error::ApiError;
use database::{entities::students, error::RegistrationError};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tower_oauth2_resource_server::claims::DefaultClaims;

/// The subject identifier from the validated bearer token. The OAuth2
/// layer has already rejected requests without a valid token; a token
/// without a subject is still unauthenticated.
pub fn claims_sub(claims: &DefaultClaims) -> Result<&str, ApiError> {
    claims
        .sub
        .as_deref()
        .ok_or(ApiError::Registration(RegistrationError::AuthenticationRequired))
}

/// Resolve the principal to a student record; enrollment endpoints act
/// on behalf of the authenticated student only
pub async fn require_student(
    db: &DatabaseConnection,
    sub: &str,
) -> Result<students::Model, ApiError> {
    students::Entity::find()
        .filter(students::Column::Sub.eq(sub))
        .one(db)
        .await
        .map_err(RegistrationError::from)?
        .ok_or_else(|| {
            ApiError::Registration(RegistrationError::AuthorizationDenied(
                "no student record for this principal".to_string(),
            ))
        })
}
