use chrono::NaiveDateTime;
use database::{
    entities::{
        capacity_overrides, enrollments, prerequisite_waivers, registration_holds,
        time_conflict_waivers,
    },
    services::registration::{EnrollOutcome, SectionSummary, WithdrawOutcome},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ---- Requests ----

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    pub class_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub enrollment_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoldRequest {
    pub student_id: Uuid,
    pub hold_type: String,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictWaiverRequest {
    pub class_id_1: Uuid,
    pub class_id_2: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApprovalRequest {
    pub approved: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteWaiverRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub waived_course_code: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapacityOverrideRequest {
    pub student_id: Uuid,
    pub class_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub term_id: Uuid,
    pub windows: Vec<ScheduleWindow>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWindow {
    pub class_standing: String,
    pub credit_threshold: Option<i32>,
    pub registration_start_date: NaiveDateTime,
}

// ---- Responses ----

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentDto {
    pub id: Uuid,
    pub section_id: Uuid,
    pub student_id: Uuid,
    pub status: String,
    pub grade: Option<String>,
    pub enrolled_at: Option<NaiveDateTime>,
}

impl From<enrollments::Model> for EnrollmentDto {
    fn from(model: enrollments::Model) -> Self {
        Self {
            id: model.id,
            section_id: model.section_id,
            student_id: model.student_id,
            status: match model.status {
                enrollments::EnrollmentStatus::Registered => "registered".to_string(),
                enrollments::EnrollmentStatus::Waitlisted => "waitlisted".to_string(),
                enrollments::EnrollmentStatus::Completed => "completed".to_string(),
            },
            grade: model.grade.map(|g| g.to_string()),
            enrolled_at: model.enrolled_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummaryDto {
    pub section_id: Uuid,
    pub capacity: i32,
    pub registered_count: u64,
}

impl From<SectionSummary> for SectionSummaryDto {
    fn from(summary: SectionSummary) -> Self {
        Self {
            section_id: summary.section_id,
            capacity: summary.capacity,
            registered_count: summary.registered_count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollResponse {
    pub ok: bool,
    pub waitlisted: bool,
    pub enrollment: EnrollmentDto,
    pub updated_section: SectionSummaryDto,
}

impl From<EnrollOutcome> for EnrollResponse {
    fn from(outcome: EnrollOutcome) -> Self {
        Self {
            ok: true,
            waitlisted: outcome.waitlisted(),
            updated_section: outcome.section.clone().into(),
            enrollment: outcome.enrollment.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    pub ok: bool,
    pub updated_section: SectionSummaryDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted_student: Option<Uuid>,
}

impl From<WithdrawOutcome> for WithdrawResponse {
    fn from(outcome: WithdrawOutcome) -> Self {
        Self {
            ok: true,
            updated_section: outcome.section.into(),
            promoted_student: outcome.promoted.map(|p| p.student_id),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoldDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub hold_type: String,
    pub note: Option<String>,
    pub placed_at: NaiveDateTime,
    pub resolved_at: Option<NaiveDateTime>,
}

impl From<registration_holds::Model> for HoldDto {
    fn from(model: registration_holds::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            hold_type: model.hold_type,
            note: model.note,
            placed_at: model.placed_at,
            resolved_at: model.resolved_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HoldResponse {
    pub ok: bool,
    pub hold: HoldDto,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictWaiverDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub section_a_id: Uuid,
    pub section_b_id: Uuid,
    pub instructor_a_approved: bool,
    pub instructor_b_approved: bool,
    pub advisor_approved: bool,
    pub status: String,
}

impl From<time_conflict_waivers::Model> for ConflictWaiverDto {
    fn from(model: time_conflict_waivers::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            section_a_id: model.section_a_id,
            section_b_id: model.section_b_id,
            instructor_a_approved: model.instructor_a_approved,
            instructor_b_approved: model.instructor_b_approved,
            advisor_approved: model.advisor_approved,
            status: match model.status {
                time_conflict_waivers::WaiverStatus::Pending => "pending".to_string(),
                time_conflict_waivers::WaiverStatus::Approved => "approved".to_string(),
                time_conflict_waivers::WaiverStatus::Denied => "denied".to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConflictWaiverResponse {
    pub ok: bool,
    pub waiver: ConflictWaiverDto,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteWaiverDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub waived_course_code: String,
    pub granted_at: NaiveDateTime,
}

impl From<prerequisite_waivers::Model> for PrerequisiteWaiverDto {
    fn from(model: prerequisite_waivers::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            course_id: model.course_id,
            waived_course_code: model.waived_course_code,
            granted_at: model.granted_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisiteWaiverResponse {
    pub ok: bool,
    pub waiver: PrerequisiteWaiverDto,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapacityOverrideDto {
    pub id: Uuid,
    pub student_id: Uuid,
    pub section_id: Uuid,
    pub granted_at: NaiveDateTime,
}

impl From<capacity_overrides::Model> for CapacityOverrideDto {
    fn from(model: capacity_overrides::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            section_id: model.section_id,
            granted_at: model.granted_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CapacityOverrideResponse {
    pub ok: bool,
    pub capacity_override: CapacityOverrideDto,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub ok: bool,
    pub windows_written: usize,
}
