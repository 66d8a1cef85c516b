use crate::dtos::registration::{
    ApprovalRequest, CapacityOverrideDto, CapacityOverrideRequest, CapacityOverrideResponse,
    ConflictWaiverDto, ConflictWaiverRequest, ConflictWaiverResponse, EnrollRequest,
    EnrollResponse, EnrollmentDto, HoldDto, HoldRequest, HoldResponse, PrerequisiteWaiverDto,
    PrerequisiteWaiverRequest, PrerequisiteWaiverResponse, ScheduleRequest, ScheduleResponse,
    ScheduleWindow, SectionSummaryDto, WithdrawRequest, WithdrawResponse,
};
use crate::routes::{health, holds, registration, schedule, waivers};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        registration::enroll,
        registration::withdraw,
        holds::place_hold,
        holds::resolve_hold,
        waivers::request_time_conflict_waiver,
        waivers::approve_instructor,
        waivers::approve_advisor,
        waivers::grant_prerequisite_waiver,
        waivers::grant_capacity_override,
        schedule::set_schedule
    ),
    components(schemas(
        ApprovalRequest,
        CapacityOverrideDto,
        CapacityOverrideRequest,
        CapacityOverrideResponse,
        ConflictWaiverDto,
        ConflictWaiverRequest,
        ConflictWaiverResponse,
        EnrollRequest,
        EnrollResponse,
        EnrollmentDto,
        HoldDto,
        HoldRequest,
        HoldResponse,
        PrerequisiteWaiverDto,
        PrerequisiteWaiverRequest,
        PrerequisiteWaiverResponse,
        ScheduleRequest,
        ScheduleResponse,
        ScheduleWindow,
        SectionSummaryDto,
        WithdrawRequest,
        WithdrawResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Registration", description = "Enrollment and withdrawal"),
        (name = "Holds", description = "Registration holds"),
        (name = "Waivers", description = "Waivers and overrides"),
        (name = "Schedule", description = "Registration windows"),
    ),
    info(
        title = "Registration API",
        version = "1.0.0",
        description = "Student registration transaction engine",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
