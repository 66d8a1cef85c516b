use crate::state::AppState;
use axum::{Router, routing::post};

pub mod health;
pub mod holds;
pub mod registration;
pub mod schedule;
pub mod waivers;

/// All `/registration` endpoints; mounted behind the OAuth2 layer
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/enroll", post(registration::enroll))
        .route("/withdraw", post(registration::withdraw))
        .route(
            "/holds",
            post(holds::place_hold).delete(holds::resolve_hold),
        )
        .route(
            "/time-conflict-waiver/request",
            post(waivers::request_time_conflict_waiver),
        )
        .route(
            "/time-conflict-waiver/{id}/approve-instructor",
            post(waivers::approve_instructor),
        )
        .route(
            "/time-conflict-waiver/{id}/approve-advisor",
            post(waivers::approve_advisor),
        )
        .route(
            "/prerequisite-waiver",
            post(waivers::grant_prerequisite_waiver),
        )
        .route(
            "/capacity-override",
            post(waivers::grant_capacity_override),
        )
        .route("/schedule", post(schedule::set_schedule))
}
