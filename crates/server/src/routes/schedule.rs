use crate::{
    dtos::registration::{ScheduleRequest, ScheduleResponse},
    error::{ApiError, ApiJson},
    principal,
    state::AppState,
};
use axum::{Extension, Json, extract::State};
use database::services::schedule::{ScheduleService, WindowSpec};
use tower_oauth2_resource_server::claims::DefaultClaims;

/// Replace the registration windows for a term; registrar-only
#[utoipa::path(
    post,
    path = "/registration/schedule",
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Windows written", body = ScheduleResponse),
        (status = 400, description = "Malformed class standing"),
        (status = 403, description = "Registrar role required"),
        (status = 404, description = "Term not found")
    ),
    security(("jwt" = [])),
    tag = "Schedule"
)]
pub async fn set_schedule(
    State(state): State<AppState>,
    Extension(claims): Extension<DefaultClaims>,
    ApiJson(body): ApiJson<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    let sub = principal::claims_sub(&claims)?;

    let windows = body
        .windows
        .into_iter()
        .map(|w| {
            Ok(WindowSpec {
                class_standing: w.class_standing.parse().map_err(ApiError::BadRequest)?,
                credit_threshold: w.credit_threshold,
                start_date: w.registration_start_date,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    let windows_written =
        ScheduleService::replace_windows(&state.db, sub, body.term_id, windows).await?;

    Ok(Json(ScheduleResponse {
        ok: true,
        windows_written,
    }))
}
