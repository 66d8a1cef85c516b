use crate::{
    dtos::registration::{HoldRequest, HoldResponse},
    error::{ApiError, ApiJson},
    principal,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use database::services::holds::HoldsService;
use models::hold::HoldType;
use tower_oauth2_resource_server::claims::DefaultClaims;

fn parse_hold_type(raw: &str) -> Result<HoldType, ApiError> {
    raw.parse().map_err(ApiError::BadRequest)
}

/// Place a registration hold on a student. Financial holds are
/// registrar-only; academic-advising holds require the student to be
/// within the actor's advising scope.
#[utoipa::path(
    post,
    path = "/registration/holds",
    request_body = HoldRequest,
    responses(
        (status = 200, description = "Hold placed", body = HoldResponse),
        (status = 400, description = "Invalid hold type"),
        (status = 403, description = "Actor out of scope for this student")
    ),
    security(("jwt" = [])),
    tag = "Holds"
)]
pub async fn place_hold(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    ApiJson(body): ApiJson<HoldRequest>,
) -> Result<Json<HoldResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;
    let hold_type = parse_hold_type(&body.hold_type)?;

    let hold = HoldsService::place_hold(
        &state.db,
        state.clock.as_ref(),
        sub,
        body.student_id,
        hold_type,
        body.note,
    )
    .await?;

    Ok(Json(HoldResponse {
        ok: true,
        hold: hold.into(),
    }))
}

/// Resolve a student's active hold of the given type
#[utoipa::path(
    delete,
    path = "/registration/holds",
    request_body = HoldRequest,
    responses(
        (status = 200, description = "Hold resolved", body = HoldResponse),
        (status = 400, description = "Invalid hold type"),
        (status = 403, description = "Actor out of scope for this student"),
        (status = 404, description = "No active hold of this type")
    ),
    security(("jwt" = [])),
    tag = "Holds"
)]
pub async fn resolve_hold(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    ApiJson(body): ApiJson<HoldRequest>,
) -> Result<Json<HoldResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;
    let hold_type = parse_hold_type(&body.hold_type)?;

    let hold = HoldsService::resolve_hold(
        &state.db,
        state.clock.as_ref(),
        sub,
        body.student_id,
        hold_type,
    )
    .await?;

    Ok(Json(HoldResponse {
        ok: true,
        hold: hold.into(),
    }))
}
