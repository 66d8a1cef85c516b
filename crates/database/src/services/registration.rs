use crate::{
    clock::Clock,
    entities::{
        capacity_overrides, class_sections, courses, enrollments,
        enrollments::EnrollmentStatus, students, terms,
    },
    error::{RegistrationError, ValidationFailure},
    services::{eligibility::EligibilityService, waitlist::WaitlistService},
};
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

/// Section state reported back after an enroll or withdraw, recomputed
/// under the same lock as the write
#[derive(Debug, Clone, Serialize)]
pub struct SectionSummary {
    pub section_id: Uuid,
    pub capacity: i32,
    pub registered_count: u64,
}

#[derive(Debug)]
pub struct EnrollOutcome {
    pub enrollment: enrollments::Model,
    pub section: SectionSummary,
}

impl EnrollOutcome {
    pub fn waitlisted(&self) -> bool {
        self.enrollment.status == EnrollmentStatus::Waitlisted
    }
}

#[derive(Debug)]
pub struct WithdrawOutcome {
    pub section: SectionSummary,
    pub promoted: Option<enrollments::Model>,
}

/// The transactional core. Each enroll/withdraw runs inside one
/// all-or-nothing transaction holding an exclusive lock on the target
/// section row, so the capacity check and the write are atomic with
/// respect to every other transaction touching that section.
pub struct RegistrationService;

impl RegistrationService {
    pub async fn enroll(
        db: &DatabaseConnection,
        clock: &dyn Clock,
        student_id: Uuid,
        section_id: Uuid,
        actor_is_registrar: bool,
    ) -> Result<EnrollOutcome, RegistrationError> {
        let txn = db.begin().await?;

        match Self::enroll_within(&txn, clock, student_id, section_id, actor_is_registrar).await {
            Ok(outcome) => {
                txn.commit().await?;
                info!(
                    target: "audit",
                    "enroll student={student_id} section={section_id} status={:?}",
                    outcome.enrollment.status
                );
                Ok(outcome)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn enroll_within(
        txn: &DatabaseTransaction,
        clock: &dyn Clock,
        student_id: Uuid,
        section_id: Uuid,
        actor_is_registrar: bool,
    ) -> Result<EnrollOutcome, RegistrationError> {
        students::Entity::find_by_id(student_id)
            .one(txn)
            .await?
            .ok_or(RegistrationError::NotFound("student"))?;

        // Fresh hold read before anything else; any active hold blocks
        EligibilityService::check_holds(txn, student_id).await?;

        // Exclusive row lock: serializes concurrent capacity decisions
        // for this section only
        let section = class_sections::Entity::find_by_id(section_id)
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or(RegistrationError::NotFound("class section"))?;

        let course = courses::Entity::find_by_id(section.course_id)
            .one(txn)
            .await?
            .ok_or(RegistrationError::NotFound("course"))?;

        let term = terms::Entity::find_by_id(section.term_id)
            .one(txn)
            .await?
            .ok_or(RegistrationError::NotFound("term"))?;

        Self::check_duplicate(txn, student_id, &section, &course).await?;

        EligibilityService::validate(txn, clock, student_id, &section, &course, &term).await?;

        let registered_count = Self::registered_count(txn, section.id).await?;

        let has_override = capacity_overrides::Entity::find()
            .filter(capacity_overrides::Column::StudentId.eq(student_id))
            .filter(capacity_overrides::Column::SectionId.eq(section.id))
            .one(txn)
            .await?
            .is_some();

        let status = admission_status(
            registered_count,
            section.capacity,
            has_override,
            actor_is_registrar,
        );

        let enrollment = enrollments::ActiveModel {
            id: Set(Uuid::new_v4()),
            section_id: Set(section.id),
            student_id: Set(student_id),
            status: Set(status),
            grade: Set(None),
            enrolled_at: Set(Some(clock.now())),
        }
        .insert(txn)
        .await?;

        let updated_count = if status == EnrollmentStatus::Registered {
            registered_count + 1
        } else {
            registered_count
        };

        Ok(EnrollOutcome {
            enrollment,
            section: SectionSummary {
                section_id: section.id,
                capacity: section.capacity,
                registered_count: updated_count,
            },
        })
    }

    pub async fn withdraw(
        db: &DatabaseConnection,
        student_id: Uuid,
        enrollment_id: Uuid,
    ) -> Result<WithdrawOutcome, RegistrationError> {
        let txn = db.begin().await?;

        match Self::withdraw_within(&txn, student_id, enrollment_id).await {
            Ok(outcome) => {
                txn.commit().await?;
                info!(
                    target: "audit",
                    "withdraw student={student_id} enrollment={enrollment_id} promoted={:?}",
                    outcome.promoted.as_ref().map(|p| p.student_id)
                );
                Ok(outcome)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn withdraw_within(
        txn: &DatabaseTransaction,
        student_id: Uuid,
        enrollment_id: Uuid,
    ) -> Result<WithdrawOutcome, RegistrationError> {
        let enrollment = enrollments::Entity::find_by_id(enrollment_id)
            .one(txn)
            .await?
            .filter(|e| e.student_id == student_id)
            .ok_or(RegistrationError::NotFound("enrollment"))?;

        match enrollment.status {
            // Leaving the waitlist frees no seat: plain delete, no
            // lock-promotion cycle
            EnrollmentStatus::Waitlisted => {
                let section_id = enrollment.section_id;
                let capacity = Self::section_capacity(txn, section_id).await?;

                enrollments::Entity::delete_by_id(enrollment.id).exec(txn).await?;

                let registered_count = Self::registered_count(txn, section_id).await?;

                Ok(WithdrawOutcome {
                    section: SectionSummary {
                        section_id,
                        capacity,
                        registered_count,
                    },
                    promoted: None,
                })
            }
            EnrollmentStatus::Registered => {
                let section = class_sections::Entity::find_by_id(enrollment.section_id)
                    .lock_exclusive()
                    .one(txn)
                    .await?
                    .ok_or(RegistrationError::NotFound("class section"))?;

                enrollments::Entity::delete_by_id(enrollment.id).exec(txn).await?;

                let mut registered_count = Self::registered_count(txn, section.id).await?;

                let promoted = if registered_count < section.capacity.max(0) as u64 {
                    let promoted = WaitlistService::promote_next(txn, section.id).await?;
                    if promoted.is_some() {
                        registered_count += 1;
                    }
                    promoted
                } else {
                    None
                };

                Ok(WithdrawOutcome {
                    section: SectionSummary {
                        section_id: section.id,
                        capacity: section.capacity,
                        registered_count,
                    },
                    promoted,
                })
            }
            EnrollmentStatus::Completed => Err(ValidationFailure::InvalidEnrollmentState(
                "completed enrollments cannot be withdrawn".to_string(),
            )
            .into()),
        }
    }

    /// A student holds at most one enrollment row per section, whatever
    /// its status, and at most one registered section of a course per
    /// term
    async fn check_duplicate(
        txn: &DatabaseTransaction,
        student_id: Uuid,
        section: &class_sections::Model,
        course: &courses::Model,
    ) -> Result<(), RegistrationError> {
        let sibling_ids: Vec<Uuid> = class_sections::Entity::find()
            .filter(class_sections::Column::CourseId.eq(section.course_id))
            .filter(class_sections::Column::TermId.eq(section.term_id))
            .all(txn)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let existing = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .filter(enrollments::Column::SectionId.is_in(sibling_ids))
            .all(txn)
            .await?;

        if has_duplicate(&existing, section.id) {
            return Err(ValidationFailure::DuplicateCourseEnrollment(course.code()).into());
        }

        Ok(())
    }

    async fn registered_count(
        txn: &DatabaseTransaction,
        section_id: Uuid,
    ) -> Result<u64, RegistrationError> {
        Ok(enrollments::Entity::find()
            .filter(enrollments::Column::SectionId.eq(section_id))
            .filter(enrollments::Column::Status.eq(EnrollmentStatus::Registered))
            .count(txn)
            .await?)
    }

    async fn section_capacity(
        txn: &DatabaseTransaction,
        section_id: Uuid,
    ) -> Result<i32, RegistrationError> {
        class_sections::Entity::find_by_id(section_id)
            .one(txn)
            .await?
            .map(|s| s.capacity)
            .ok_or(RegistrationError::NotFound("class section"))
    }
}

/// True when `rows` (the student's enrollments across a course's
/// sections this term) already collide with enrolling into
/// `target_section`: any row for the target section blocks, whatever
/// its status, and a registered row in any sibling section blocks.
/// A waitlisted row in a different section does not.
fn has_duplicate(rows: &[enrollments::Model], target_section: Uuid) -> bool {
    rows.iter().any(|row| {
        row.section_id == target_section || row.status == EnrollmentStatus::Registered
    })
}

/// Seat decision made under the section lock: below capacity registers;
/// a capacity override or a registrar actor registers past capacity;
/// everyone else joins the waitlist.
fn admission_status(
    registered_count: u64,
    capacity: i32,
    has_override: bool,
    actor_is_registrar: bool,
) -> EnrollmentStatus {
    if registered_count < capacity.max(0) as u64 || has_override || actor_is_registrar {
        EnrollmentStatus::Registered
    } else {
        EnrollmentStatus::Waitlisted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_below_capacity() {
        assert_eq!(
            admission_status(0, 1, false, false),
            EnrollmentStatus::Registered
        );
        assert_eq!(
            admission_status(29, 30, false, false),
            EnrollmentStatus::Registered
        );
    }

    #[test]
    fn test_admission_waitlists_at_capacity() {
        assert_eq!(
            admission_status(1, 1, false, false),
            EnrollmentStatus::Waitlisted
        );
        assert_eq!(
            admission_status(30, 30, false, false),
            EnrollmentStatus::Waitlisted
        );
    }

    #[test]
    fn test_override_and_registrar_bypass_capacity() {
        assert_eq!(
            admission_status(30, 30, true, false),
            EnrollmentStatus::Registered
        );
        assert_eq!(
            admission_status(30, 30, false, true),
            EnrollmentStatus::Registered
        );
    }

    #[test]
    fn test_zero_capacity_section() {
        assert_eq!(
            admission_status(0, 0, false, false),
            EnrollmentStatus::Waitlisted
        );
    }

    fn enrollment_row(section_id: Uuid, status: EnrollmentStatus) -> enrollments::Model {
        enrollments::Model {
            id: Uuid::new_v4(),
            section_id,
            student_id: Uuid::new_v4(),
            status,
            grade: None,
            enrolled_at: None,
        }
    }

    #[test]
    fn test_waitlisted_row_blocks_reenroll_into_same_section() {
        let section = Uuid::new_v4();
        let rows = vec![enrollment_row(section, EnrollmentStatus::Waitlisted)];

        assert!(has_duplicate(&rows, section));
    }

    #[test]
    fn test_registered_sibling_section_blocks() {
        let target = Uuid::new_v4();
        let rows = vec![enrollment_row(Uuid::new_v4(), EnrollmentStatus::Registered)];

        assert!(has_duplicate(&rows, target));
    }

    #[test]
    fn test_waitlist_in_sibling_section_does_not_block() {
        let target = Uuid::new_v4();
        let rows = vec![enrollment_row(Uuid::new_v4(), EnrollmentStatus::Waitlisted)];

        assert!(!has_duplicate(&rows, target));
        assert!(!has_duplicate(&[], target));
    }
}
