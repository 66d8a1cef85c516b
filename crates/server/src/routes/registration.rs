use crate::{
    dtos::registration::{EnrollRequest, EnrollResponse, WithdrawRequest, WithdrawResponse},
    error::{ApiError, ApiJson},
    principal,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use database::{
    error::RegistrationError,
    services::{authorization::AuthorizationService, registration::RegistrationService},
};
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Enroll the authenticated student into a class section. Registers
/// if a seat is free (or an override applies), otherwise waitlists.
#[utoipa::path(
    post,
    path = "/registration/enroll",
    request_body = EnrollRequest,
    responses(
        (status = 200, description = "Registered or waitlisted", body = EnrollResponse),
        (status = 400, description = "Eligibility rule violated"),
        (status = 401, description = "No authenticated principal"),
        (status = 403, description = "Active hold or closed registration window"),
        (status = 404, description = "Class section not found"),
        (status = 409, description = "Already registered for this course this term")
    ),
    security(("jwt" = [])),
    tag = "Registration"
)]
pub async fn enroll(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    ApiJson(body): ApiJson<EnrollRequest>,
) -> Result<Json<EnrollResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;
    let student = principal::require_student(&state.db, sub).await?;

    let actor_is_registrar = AuthorizationService::is_registrar(&state.db, sub)
        .await
        .map_err(RegistrationError::from)?;

    let outcome = RegistrationService::enroll(
        &state.db,
        state.clock.as_ref(),
        student.id,
        body.class_id,
        actor_is_registrar,
    )
    .await?;

    Ok(Json(outcome.into()))
}

/// Withdraw the authenticated student from one of their enrollments.
/// Withdrawing a registered enrollment may promote the earliest
/// waitlisted student into the freed seat.
#[utoipa::path(
    post,
    path = "/registration/withdraw",
    request_body = WithdrawRequest,
    responses(
        (status = 200, description = "Withdrawn", body = WithdrawResponse),
        (status = 400, description = "Enrollment cannot be withdrawn"),
        (status = 401, description = "No authenticated principal"),
        (status = 404, description = "Enrollment not found")
    ),
    security(("jwt" = [])),
    tag = "Registration"
)]
pub async fn withdraw(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    ApiJson(body): ApiJson<WithdrawRequest>,
) -> Result<Json<WithdrawResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;
    let student = principal::require_student(&state.db, sub).await?;

    let outcome =
        RegistrationService::withdraw(&state.db, student.id, body.enrollment_id).await?;

    Ok(Json(outcome.into()))
}
