use crate::{
    clock::Clock,
    entities::{
        capacity_overrides, class_sections, courses, instructors, prerequisite_waivers,
        time_conflict_waivers, time_conflict_waivers::WaiverStatus,
    },
    error::{RegistrationError, ValidationFailure},
    services::authorization::AuthorizationService,
};
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

/// Time-conflict waivers, prerequisite waivers, and capacity overrides:
/// the point exceptions an authorized actor can grant against the
/// eligibility rules
pub struct WaiverService;

impl WaiverService {
    /// A student requests permission to hold two day-overlapping
    /// sections; the waiver starts pending until both instructors and
    /// an advisor approve
    pub async fn request_time_conflict_waiver(
        db: &DatabaseConnection,
        clock: &dyn Clock,
        student_id: Uuid,
        section_a_id: Uuid,
        section_b_id: Uuid,
    ) -> Result<time_conflict_waivers::Model, RegistrationError> {
        if section_a_id == section_b_id {
            return Err(ValidationFailure::InvalidEnrollmentState(
                "a time-conflict waiver must name two distinct sections".to_string(),
            )
            .into());
        }

        for section_id in [section_a_id, section_b_id] {
            class_sections::Entity::find_by_id(section_id)
                .one(db)
                .await?
                .ok_or(RegistrationError::NotFound("class section"))?;
        }

        let waiver = time_conflict_waivers::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            section_a_id: Set(section_a_id),
            section_b_id: Set(section_b_id),
            instructor_a_approved: Set(false),
            instructor_b_approved: Set(false),
            advisor_approved: Set(false),
            status: Set(WaiverStatus::Pending),
            created_at: Set(clock.now()),
        }
        .insert(db)
        .await?;

        Ok(waiver)
    }

    /// An instructor of record signs off on (or denies) a time-conflict
    /// waiver covering one of their sections
    pub async fn record_instructor_approval(
        db: &DatabaseConnection,
        instructor_sub: &str,
        waiver_id: Uuid,
        approved: bool,
    ) -> Result<time_conflict_waivers::Model, RegistrationError> {
        let waiver = time_conflict_waivers::Entity::find_by_id(waiver_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("waiver"))?;

        let instructor = instructors::Entity::find()
            .filter(instructors::Column::Sub.eq(instructor_sub))
            .one(db)
            .await?
            .ok_or_else(|| {
                RegistrationError::AuthorizationDenied("unknown instructor".to_string())
            })?;

        let section_a = class_sections::Entity::find_by_id(waiver.section_a_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("class section"))?;
        let section_b = class_sections::Entity::find_by_id(waiver.section_b_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("class section"))?;

        let (instructor_a, instructor_b) = if section_a.instructor_id == Some(instructor.id) {
            (approved, waiver.instructor_b_approved)
        } else if section_b.instructor_id == Some(instructor.id) {
            (waiver.instructor_a_approved, approved)
        } else {
            return Err(RegistrationError::AuthorizationDenied(
                "not the instructor of record for either section".to_string(),
            ));
        };

        let status = next_status(
            waiver.status,
            instructor_a,
            instructor_b,
            waiver.advisor_approved,
            approved,
        )
        .ok_or_else(|| {
            RegistrationError::Conflict("waiver has already been denied".to_string())
        })?;

        let mut update: time_conflict_waivers::ActiveModel = waiver.into();
        update.instructor_a_approved = Set(instructor_a);
        update.instructor_b_approved = Set(instructor_b);
        update.status = Set(status);

        let updated = update.update(db).await?;

        info!(
            target: "audit",
            "time-conflict waiver {waiver_id} instructor decision by={} approved={approved}",
            instructor.id
        );

        Ok(updated)
    }

    /// An in-scope advisor signs off on (or denies) a time-conflict waiver
    pub async fn record_advisor_approval(
        db: &DatabaseConnection,
        advisor_sub: &str,
        waiver_id: Uuid,
        approved: bool,
    ) -> Result<time_conflict_waivers::Model, RegistrationError> {
        let waiver = time_conflict_waivers::Entity::find_by_id(waiver_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("waiver"))?;

        let advisor =
            AuthorizationService::authorize_student_action(db, advisor_sub, waiver.student_id)
                .await?;

        let status = next_status(
            waiver.status,
            waiver.instructor_a_approved,
            waiver.instructor_b_approved,
            approved,
            approved,
        )
        .ok_or_else(|| {
            RegistrationError::Conflict("waiver has already been denied".to_string())
        })?;

        let mut update: time_conflict_waivers::ActiveModel = waiver.into();
        update.advisor_approved = Set(approved);
        update.status = Set(status);

        let updated = update.update(db).await?;

        info!(
            target: "audit",
            "time-conflict waiver {waiver_id} advisor decision by={} approved={approved}",
            advisor.id
        );

        Ok(updated)
    }

    pub async fn grant_prerequisite_waiver(
        db: &DatabaseConnection,
        clock: &dyn Clock,
        actor_sub: &str,
        student_id: Uuid,
        course_id: Uuid,
        waived_course_code: String,
    ) -> Result<prerequisite_waivers::Model, RegistrationError> {
        let actor =
            AuthorizationService::authorize_student_action(db, actor_sub, student_id).await?;

        courses::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("course"))?;

        let waiver = prerequisite_waivers::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            course_id: Set(course_id),
            waived_course_code: Set(waived_course_code.clone()),
            granted_by: Set(actor.id),
            granted_at: Set(clock.now()),
        }
        .insert(db)
        .await?;

        info!(
            target: "audit",
            "prerequisite waiver student={student_id} course={course_id} code={waived_course_code} by={}",
            actor.id
        );

        Ok(waiver)
    }

    pub async fn grant_capacity_override(
        db: &DatabaseConnection,
        clock: &dyn Clock,
        actor_sub: &str,
        student_id: Uuid,
        section_id: Uuid,
    ) -> Result<capacity_overrides::Model, RegistrationError> {
        let actor = AuthorizationService::require_registrar(db, actor_sub).await?;

        class_sections::Entity::find_by_id(section_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("class section"))?;

        let over = capacity_overrides::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            section_id: Set(section_id),
            granted_by: Set(actor.id),
            granted_at: Set(clock.now()),
        }
        .insert(db)
        .await?;

        info!(
            target: "audit",
            "capacity override student={student_id} section={section_id} by={}",
            actor.id
        );

        Ok(over)
    }
}

/// A waiver is approved only once both instructors and the advisor have
/// all signed off
fn resolve_status(instructor_a: bool, instructor_b: bool, advisor: bool) -> WaiverStatus {
    if instructor_a && instructor_b && advisor {
        WaiverStatus::Approved
    } else {
        WaiverStatus::Pending
    }
}

/// Compute the status after one party's decision. A denied waiver is
/// terminal: `None` means the decision must be rejected, and the
/// student has to request a fresh waiver.
fn next_status(
    current: WaiverStatus,
    instructor_a: bool,
    instructor_b: bool,
    advisor: bool,
    approved: bool,
) -> Option<WaiverStatus> {
    if current == WaiverStatus::Denied {
        return None;
    }

    Some(if approved {
        resolve_status(instructor_a, instructor_b, advisor)
    } else {
        WaiverStatus::Denied
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_three_approvals_required() {
        assert_eq!(resolve_status(true, true, true), WaiverStatus::Approved);
        assert_eq!(resolve_status(true, true, false), WaiverStatus::Pending);
        assert_eq!(resolve_status(true, false, true), WaiverStatus::Pending);
        assert_eq!(resolve_status(false, true, true), WaiverStatus::Pending);
        assert_eq!(resolve_status(false, false, false), WaiverStatus::Pending);
    }

    #[test]
    fn test_denied_waiver_is_terminal() {
        assert_eq!(next_status(WaiverStatus::Denied, true, true, true, true), None);
        assert_eq!(
            next_status(WaiverStatus::Denied, true, true, true, false),
            None
        );
    }

    #[test]
    fn test_open_waiver_transitions() {
        assert_eq!(
            next_status(WaiverStatus::Pending, true, true, false, false),
            Some(WaiverStatus::Denied)
        );
        assert_eq!(
            next_status(WaiverStatus::Pending, true, true, true, true),
            Some(WaiverStatus::Approved)
        );
        assert_eq!(
            next_status(WaiverStatus::Pending, true, false, true, true),
            Some(WaiverStatus::Pending)
        );
    }
}
