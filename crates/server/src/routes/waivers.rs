use crate::{
    dtos::registration::{
        ApprovalRequest, CapacityOverrideRequest, CapacityOverrideResponse,
        ConflictWaiverRequest, ConflictWaiverResponse, PrerequisiteWaiverRequest,
        PrerequisiteWaiverResponse,
    },
    error::{ApiError, ApiJson},
    principal,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use database::services::waivers::WaiverService;
use tower_oauth2_resource_server::claims::DefaultClaims;
use uuid::Uuid;

/// The authenticated student requests a waiver to hold two
/// day-overlapping sections; approval needs both instructors of record
/// plus an advisor
#[utoipa::path(
    post,
    path = "/registration/time-conflict-waiver/request",
    request_body = ConflictWaiverRequest,
    responses(
        (status = 200, description = "Waiver created as pending", body = ConflictWaiverResponse),
        (status = 400, description = "Sections identical or malformed request"),
        (status = 401, description = "No authenticated principal"),
        (status = 404, description = "Class section not found")
    ),
    security(("jwt" = [])),
    tag = "Waivers"
)]
pub async fn request_time_conflict_waiver(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    ApiJson(body): ApiJson<ConflictWaiverRequest>,
) -> Result<Json<ConflictWaiverResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;
    let student = principal::require_student(&state.db, sub).await?;

    let waiver = WaiverService::request_time_conflict_waiver(
        &state.db,
        state.clock.as_ref(),
        student.id,
        body.class_id_1,
        body.class_id_2,
    )
    .await?;

    Ok(Json(ConflictWaiverResponse {
        ok: true,
        waiver: waiver.into(),
    }))
}

/// An instructor of record approves or denies a time-conflict waiver
#[utoipa::path(
    post,
    path = "/registration/time-conflict-waiver/{id}/approve-instructor",
    params(("id" = Uuid, Path, description = "Waiver ID")),
    request_body = ApprovalRequest,
    responses(
        (status = 200, description = "Decision recorded", body = ConflictWaiverResponse),
        (status = 403, description = "Not the instructor of record for either section"),
        (status = 404, description = "Waiver not found")
    ),
    security(("jwt" = [])),
    tag = "Waivers"
)]
pub async fn approve_instructor(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    Path(id): Path<Uuid>,
    ApiJson(body): ApiJson<ApprovalRequest>,
) -> Result<Json<ConflictWaiverResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;

    let waiver =
        WaiverService::record_instructor_approval(&state.db, sub, id, body.approved).await?;

    Ok(Json(ConflictWaiverResponse {
        ok: true,
        waiver: waiver.into(),
    }))
}

/// An in-scope advisor approves or denies a time-conflict waiver
#[utoipa::path(
    post,
    path = "/registration/time-conflict-waiver/{id}/approve-advisor",
    params(("id" = Uuid, Path, description = "Waiver ID")),
    request_body = ApprovalRequest,
    responses(
        (status = 200, description = "Decision recorded", body = ConflictWaiverResponse),
        (status = 403, description = "Actor out of scope for this student"),
        (status = 404, description = "Waiver not found")
    ),
    security(("jwt" = [])),
    tag = "Waivers"
)]
pub async fn approve_advisor(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    Path(id): Path<Uuid>,
    ApiJson(body): ApiJson<ApprovalRequest>,
) -> Result<Json<ConflictWaiverResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;

    let waiver = WaiverService::record_advisor_approval(&state.db, sub, id, body.approved).await?;

    Ok(Json(ConflictWaiverResponse {
        ok: true,
        waiver: waiver.into(),
    }))
}

/// Waive a named prerequisite code for one student and course
#[utoipa::path(
    post,
    path = "/registration/prerequisite-waiver",
    request_body = PrerequisiteWaiverRequest,
    responses(
        (status = 200, description = "Waiver granted", body = PrerequisiteWaiverResponse),
        (status = 403, description = "Actor out of scope for this student"),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Waivers"
)]
pub async fn grant_prerequisite_waiver(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    ApiJson(body): ApiJson<PrerequisiteWaiverRequest>,
) -> Result<Json<PrerequisiteWaiverResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;

    let waiver = WaiverService::grant_prerequisite_waiver(
        &state.db,
        state.clock.as_ref(),
        sub,
        body.student_id,
        body.course_id,
        body.waived_course_code,
    )
    .await?;

    Ok(Json(PrerequisiteWaiverResponse {
        ok: true,
        waiver: waiver.into(),
    }))
}

/// Permit one student to enroll past a section's capacity; registrar-only
#[utoipa::path(
    post,
    path = "/registration/capacity-override",
    request_body = CapacityOverrideRequest,
    responses(
        (status = 200, description = "Override granted", body = CapacityOverrideResponse),
        (status = 403, description = "Registrar role required"),
        (status = 404, description = "Class section not found")
    ),
    security(("jwt" = [])),
    tag = "Waivers"
)]
pub async fn grant_capacity_override(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    ApiJson(body): ApiJson<CapacityOverrideRequest>,
) -> Result<Json<CapacityOverrideResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;

    let over = WaiverService::grant_capacity_override(
        &state.db,
        state.clock.as_ref(),
        sub,
        body.student_id,
        body.class_id,
    )
    .await?;

    Ok(Json(CapacityOverrideResponse {
        ok: true,
        capacity_override: over.into(),
    }))
}
