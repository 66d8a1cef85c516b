use crate::entities::{enrollments, enrollments::EnrollmentStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

/// Advances the waitlist when a withdrawal frees a seat: flips the
/// earliest-queued waitlisted enrollment to registered. Promotes
/// exactly one row per freed seat, inside the withdrawing transaction.
///
/// Promotion intentionally does not re-run the eligibility pipeline
/// against the promoted student; the checks from their original
/// enrollment attempt stand.
pub struct WaitlistService;

impl WaitlistService {
    pub async fn promote_next(
        conn: &impl ConnectionTrait,
        section_id: Uuid,
    ) -> Result<Option<enrollments::Model>, DbErr> {
        let waitlisted = enrollments::Entity::find()
            .filter(enrollments::Column::SectionId.eq(section_id))
            .filter(enrollments::Column::Status.eq(EnrollmentStatus::Waitlisted))
            .all(conn)
            .await?;

        let Some(next) = earliest(&waitlisted).cloned() else {
            return Ok(None);
        };

        let mut promoted: enrollments::ActiveModel = next.into();
        promoted.status = Set(EnrollmentStatus::Registered);
        let updated = promoted.update(conn).await?;

        Ok(Some(updated))
    }
}

/// FIFO pick: minimum `enrolled_at`, with missing timestamps treated as
/// earliest; first row wins a tie
fn earliest(rows: &[enrollments::Model]) -> Option<&enrollments::Model> {
    rows.iter().fold(None, |best, row| match best {
        None => Some(row),
        Some(current) if row.enrolled_at < current.enrolled_at => Some(row),
        Some(current) => Some(current),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn waitlisted_at(minute: Option<u32>) -> enrollments::Model {
        enrollments::Model {
            id: Uuid::new_v4(),
            section_id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            status: EnrollmentStatus::Waitlisted,
            grade: None,
            enrolled_at: minute.map(|m| {
                NaiveDate::from_ymd_opt(2026, 4, 1)
                    .unwrap()
                    .and_hms_opt(9, m, 0)
                    .unwrap()
            }),
        }
    }

    #[test]
    fn test_fifo_pick() {
        let w1 = waitlisted_at(Some(5));
        let w2 = waitlisted_at(Some(30));

        let rows = vec![w2.clone(), w1.clone()];
        assert_eq!(earliest(&rows).unwrap().id, w1.id);
    }

    #[test]
    fn test_null_enrolled_at_is_earliest() {
        let unknown = waitlisted_at(None);
        let timed = waitlisted_at(Some(1));

        let rows = vec![timed, unknown.clone()];
        assert_eq!(earliest(&rows).unwrap().id, unknown.id);
    }

    #[test]
    fn test_empty_waitlist() {
        assert!(earliest(&[]).is_none());
    }
}
