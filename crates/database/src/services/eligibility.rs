use crate::{
    clock::Clock,
    entities::{
        class_sections, courses, department_permissions, enrollments,
        enrollments::EnrollmentStatus, prerequisite_waivers, registration_holds,
        registration_schedules, terms, time_conflict_waivers,
        time_conflict_waivers::WaiverStatus,
    },
    error::{RegistrationError, ValidationFailure},
};
use chrono::NaiveDateTime;
use log::warn;
use models::{
    days::DaySet,
    grade::Grade,
    requisite::{self, RequirementGroup},
    standing::ClassStanding,
    term::Term,
};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::collections::HashMap;
use uuid::Uuid;

/// One row of a student's academic record, denormalized so the
/// pipeline stages can run without further queries
#[derive(Debug, Clone)]
pub struct RecordRow {
    pub section_id: Uuid,
    pub course_code: String,
    pub credits: i32,
    pub term: Term,
    pub status: EnrollmentStatus,
    pub grade: Option<Grade>,
    pub days: DaySet,
    pub has_times: bool,
}

/// A registration window with its standing tier parsed
#[derive(Debug, Clone)]
pub struct WindowRow {
    pub standing: ClassStanding,
    pub credit_threshold: Option<i32>,
    pub start_date: NaiveDateTime,
}

/// The fixed eligibility pipeline: holds, registration window,
/// prerequisites, corequisites, anti-requisites, time conflict. Stops
/// at the first failure so the most actionable reason is surfaced.
pub struct EligibilityService;

impl EligibilityService {
    /// Any unresolved hold blocks every enrollment action; all active
    /// hold types are reported together.
    pub async fn check_holds(
        conn: &impl ConnectionTrait,
        student_id: Uuid,
    ) -> Result<(), RegistrationError> {
        let active = registration_holds::Entity::find()
            .filter(registration_holds::Column::StudentId.eq(student_id))
            .filter(registration_holds::Column::ResolvedAt.is_null())
            .all(conn)
            .await?;

        if active.is_empty() {
            return Ok(());
        }

        let mut types: Vec<String> = active.into_iter().map(|h| h.hold_type).collect();
        types.sort();
        types.dedup();

        Err(ValidationFailure::HoldActive(types.join(", ")).into())
    }

    /// Load the student's full enrollment history with section, course,
    /// and term context
    pub async fn load_record(
        conn: &impl ConnectionTrait,
        student_id: Uuid,
    ) -> Result<Vec<RecordRow>, DbErr> {
        let rows = enrollments::Entity::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .all(conn)
            .await?;

        let section_ids: Vec<Uuid> = rows.iter().map(|e| e.section_id).collect();
        let sections: HashMap<Uuid, class_sections::Model> = class_sections::Entity::find()
            .filter(class_sections::Column::Id.is_in(section_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();

        let course_ids: Vec<Uuid> = sections.values().map(|s| s.course_id).collect();
        let courses: HashMap<Uuid, courses::Model> = courses::Entity::find()
            .filter(courses::Column::Id.is_in(course_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let term_ids: Vec<Uuid> = sections.values().map(|s| s.term_id).collect();
        let terms: HashMap<Uuid, terms::Model> = terms::Entity::find()
            .filter(terms::Column::Id.is_in(term_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        let record = rows
            .into_iter()
            .filter_map(|enrollment| {
                let section = sections.get(&enrollment.section_id)?;
                let course = courses.get(&section.course_id)?;
                let term = terms.get(&section.term_id)?.term()?;

                Some(RecordRow {
                    section_id: section.id,
                    course_code: course.code(),
                    credits: course.credits,
                    term,
                    status: enrollment.status,
                    grade: enrollment.grade,
                    days: section.meeting_days().day_set(),
                    has_times: section.has_meeting_times(),
                })
            })
            .collect();

        Ok(record)
    }

    /// Run the full pipeline for an enrollment attempt into `section`
    pub async fn validate(
        conn: &impl ConnectionTrait,
        clock: &dyn Clock,
        student_id: Uuid,
        section: &class_sections::Model,
        course: &courses::Model,
        term: &terms::Model,
    ) -> Result<(), RegistrationError> {
        Self::check_holds(conn, student_id).await?;

        let record = Self::load_record(conn, student_id).await?;
        let target_term = term
            .term()
            .ok_or_else(|| RegistrationError::Conflict(format!("malformed term {}", term.id)))?;

        Self::check_registration_window(conn, clock, &record, term).await?;
        Self::check_prerequisites(conn, &record, student_id, course, target_term).await?;
        Self::check_corequisites(&record, course, target_term)?;
        Self::check_anti_requisites(&record, course)?;
        Self::check_time_conflict(conn, &record, student_id, section, target_term).await?;

        Ok(())
    }

    async fn check_registration_window(
        conn: &impl ConnectionTrait,
        clock: &dyn Clock,
        record: &[RecordRow],
        term: &terms::Model,
    ) -> Result<(), RegistrationError> {
        let credits = completed_credits(record);
        let standing = ClassStanding::from_credits(credits);

        let windows: Vec<WindowRow> = registration_schedules::Entity::find()
            .filter(registration_schedules::Column::TermId.eq(term.id))
            .all(conn)
            .await?
            .into_iter()
            .filter_map(|w| {
                Some(WindowRow {
                    standing: w.class_standing.parse().ok()?,
                    credit_threshold: w.credit_threshold,
                    start_date: w.start_date,
                })
            })
            .collect();

        let now = clock.now();

        let start = select_window(&windows, standing, credits).ok_or_else(|| {
            ValidationFailure::WindowClosed(format!(
                "no registration window configured for {standing}"
            ))
        })?;

        if now < start {
            return Err(ValidationFailure::WindowClosed(format!(
                "registration for {standing} opens at {start}"
            ))
            .into());
        }

        if let Some(deadline) = term.late_registration_deadline
            && now.date() > deadline
        {
            return Err(ValidationFailure::WindowClosed(format!(
                "the late registration deadline ({deadline}) has passed"
            ))
            .into());
        }

        Ok(())
    }

    async fn check_prerequisites(
        conn: &impl ConnectionTrait,
        record: &[RecordRow],
        student_id: Uuid,
        course: &courses::Model,
        target_term: Term,
    ) -> Result<(), RegistrationError> {
        let Some(text) = &course.prerequisites else {
            return Ok(());
        };

        let parsed = requisite::parse_requirement_groups(text);

        // Unparseable clauses are treated as satisfied; surface them so
        // the leniency is at least observable (pending product review)
        for clause in &parsed.unparsed {
            warn!(
                "unparsed prerequisite clause for {}: {clause:?}",
                course.code()
            );
        }

        if parsed
            .unparsed
            .iter()
            .any(|c| requisite::mentions_department_permission(c))
        {
            let permission = department_permissions::Entity::find()
                .filter(department_permissions::Column::StudentId.eq(student_id))
                .filter(department_permissions::Column::CourseId.eq(course.id))
                .one(conn)
                .await?;

            if permission.is_none() {
                return Err(ValidationFailure::PrerequisiteMissing(
                    "permission of the department".to_string(),
                )
                .into());
            }
        }

        let waived: Vec<String> = prerequisite_waivers::Entity::find()
            .filter(prerequisite_waivers::Column::StudentId.eq(student_id))
            .filter(prerequisite_waivers::Column::CourseId.eq(course.id))
            .all(conn)
            .await?
            .into_iter()
            .map(|w| w.waived_course_code)
            .collect();

        for group in &parsed.groups {
            if !group_satisfied(group, record, target_term, &waived) {
                return Err(
                    ValidationFailure::PrerequisiteMissing(group.codes.join(" or ")).into(),
                );
            }
        }

        Ok(())
    }

    fn check_corequisites(
        record: &[RecordRow],
        course: &courses::Model,
        target_term: Term,
    ) -> Result<(), ValidationFailure> {
        let Some(text) = &course.corequisites else {
            return Ok(());
        };

        for code in requisite::extract_course_codes(text) {
            let taken_together = record.iter().any(|row| {
                row.course_code == code
                    && row.term == target_term
                    && row.status == EnrollmentStatus::Registered
            });

            if !taken_together {
                return Err(ValidationFailure::CorequisiteMissing(code));
            }
        }

        Ok(())
    }

    fn check_anti_requisites(
        record: &[RecordRow],
        course: &courses::Model,
    ) -> Result<(), ValidationFailure> {
        let Some(text) = &course.anti_requisites else {
            return Ok(());
        };

        for code in requisite::extract_course_codes(text) {
            let holds_credit = record.iter().any(|row| {
                row.course_code == code
                    && row.status == EnrollmentStatus::Completed
                    && row.grade.is_none_or(Grade::earns_credit)
            });

            if holds_credit {
                return Err(ValidationFailure::AntiRequisiteViolation(code));
            }
        }

        Ok(())
    }

    async fn check_time_conflict(
        conn: &impl ConnectionTrait,
        record: &[RecordRow],
        student_id: Uuid,
        section: &class_sections::Model,
        target_term: Term,
    ) -> Result<(), RegistrationError> {
        let target_days = section.meeting_days().day_set();
        let conflicts = find_day_conflicts(
            record,
            target_term,
            target_days,
            section.has_meeting_times(),
        );

        if conflicts.is_empty() {
            return Ok(());
        }

        let approved = time_conflict_waivers::Entity::find()
            .filter(time_conflict_waivers::Column::StudentId.eq(student_id))
            .filter(time_conflict_waivers::Column::Status.eq(WaiverStatus::Approved))
            .all(conn)
            .await?;

        for row in conflicts {
            let waived = approved.iter().any(|w| w.covers(section.id, row.section_id));
            if !waived {
                return Err(ValidationFailure::TimeConflict(row.course_code.clone()).into());
            }
        }

        Ok(())
    }
}

/// Cumulative completed credit hours. Incomplete and failing grades
/// earn nothing; a completed row with no recorded grade counts.
pub fn completed_credits(record: &[RecordRow]) -> i32 {
    record
        .iter()
        .filter(|row| row.status == EnrollmentStatus::Completed)
        .filter(|row| row.grade.is_none_or(Grade::earns_credit))
        .map(|row| row.credits)
        .sum()
}

/// Pick the window governing this student: candidates match the
/// student's standing and credit threshold, ordered most-senior
/// standing first, then highest threshold
pub fn select_window(
    windows: &[WindowRow],
    standing: ClassStanding,
    credits: i32,
) -> Option<NaiveDateTime> {
    let mut candidates: Vec<&WindowRow> = windows
        .iter()
        .filter(|w| w.standing == standing)
        .filter(|w| w.credit_threshold.is_none_or(|threshold| credits >= threshold))
        .collect();

    candidates.sort_by(|a, b| {
        b.standing
            .cmp(&a.standing)
            .then(b.credit_threshold.cmp(&a.credit_threshold))
    });

    candidates.first().map(|w| w.start_date)
}

/// Whether one requirement group is met: any code in the group with a
/// prior registered/completed enrollment at the group minimum, or a
/// waiver naming a code in the group. A prior in-progress row with no
/// grade yet counts.
pub fn group_satisfied(
    group: &RequirementGroup,
    record: &[RecordRow],
    target_term: Term,
    waived_codes: &[String],
) -> bool {
    if group.codes.iter().any(|code| waived_codes.contains(code)) {
        return true;
    }

    record.iter().any(|row| {
        if !group.codes.contains(&row.course_code) {
            return false;
        }

        let prior = match row.status {
            EnrollmentStatus::Completed => true,
            EnrollmentStatus::Registered => row.term != target_term,
            EnrollmentStatus::Waitlisted => false,
        };

        prior
            && match row.grade {
                Some(grade) => grade.satisfies_minimum(group.min_grade),
                None => true,
            }
    })
}

/// All registered same-term rows whose meeting days overlap the target
/// section's. Day overlap with both sections holding announced times is
/// treated as a conflict; exact time-range overlap is not computed.
pub fn find_day_conflicts<'a>(
    record: &'a [RecordRow],
    target_term: Term,
    target_days: DaySet,
    target_has_times: bool,
) -> Vec<&'a RecordRow> {
    if !target_has_times {
        return Vec::new();
    }

    record
        .iter()
        .filter(|row| row.status == EnrollmentStatus::Registered)
        .filter(|row| row.term == target_term)
        .filter(|row| row.has_times)
        .filter(|row| row.days.intersects(target_days))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use models::term::Season;
    use std::str::FromStr;

    fn row(code: &str, term: Term, status: EnrollmentStatus, grade: Option<Grade>) -> RecordRow {
        RecordRow {
            section_id: Uuid::new_v4(),
            course_code: code.to_string(),
            credits: 3,
            term,
            status,
            grade,
            days: DaySet::NONE,
            has_times: false,
        }
    }

    fn fall(year: i16) -> Term {
        Term::new(Season::Fall, year)
    }

    #[test]
    fn test_completed_credits_excludes_incompletes() {
        let record = vec![
            row("CSE114", fall(2024), EnrollmentStatus::Completed, Some(Grade::B)),
            row("MAT125", fall(2024), EnrollmentStatus::Completed, Some(Grade::Incomplete)),
            row("CSE214", fall(2025), EnrollmentStatus::Registered, None),
        ];

        assert_eq!(completed_credits(&record), 3);
    }

    #[test]
    fn test_select_window_prefers_highest_threshold() {
        let base = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let earlier = base - chrono::Duration::days(2);

        let windows = vec![
            WindowRow {
                standing: ClassStanding::U2,
                credit_threshold: None,
                start_date: base,
            },
            WindowRow {
                standing: ClassStanding::U2,
                credit_threshold: Some(40),
                start_date: earlier,
            },
        ];

        // 45 credits matches both; the 40-credit tier wins
        assert_eq!(select_window(&windows, ClassStanding::U2, 45), Some(earlier));
        // 30 credits only matches the unthresholded window
        assert_eq!(select_window(&windows, ClassStanding::U2, 30), Some(base));
        // No U4 window exists
        assert_eq!(select_window(&windows, ClassStanding::U4, 100), None);
    }

    #[test]
    fn test_group_satisfied_by_grade() {
        let group = RequirementGroup {
            min_grade: Some(Grade::C),
            codes: vec!["CSE214".to_string(), "CSE215".to_string()],
        };

        let passing = vec![row(
            "CSE215",
            fall(2024),
            EnrollmentStatus::Completed,
            Some(Grade::CPlus),
        )];
        assert!(group_satisfied(&group, &passing, fall(2025), &[]));

        let below = vec![row(
            "CSE214",
            fall(2024),
            EnrollmentStatus::Completed,
            Some(Grade::CMinus),
        )];
        assert!(!group_satisfied(&group, &below, fall(2025), &[]));
    }

    #[test]
    fn test_group_satisfied_by_waiver() {
        let group = RequirementGroup {
            min_grade: None,
            codes: vec!["CSE214".to_string()],
        };

        assert!(!group_satisfied(&group, &[], fall(2025), &[]));
        assert!(group_satisfied(&group, &[], fall(2025), &["CSE214".to_string()]));
    }

    #[test]
    fn test_group_not_satisfied_by_same_term_registration() {
        // A registered row in the target term is a corequisite, not a
        // prerequisite
        let group = RequirementGroup {
            min_grade: None,
            codes: vec!["CSE214".to_string()],
        };
        let record = vec![row("CSE214", fall(2025), EnrollmentStatus::Registered, None)];

        assert!(!group_satisfied(&group, &record, fall(2025), &[]));
        assert!(group_satisfied(&group, &record, Term::new(Season::Spring, 2026), &[]));
    }

    #[test]
    fn test_find_day_conflicts() {
        let term = fall(2025);
        let mut taken = row("CSE214", term, EnrollmentStatus::Registered, None);
        taken.days = DaySet::from_str("MWF").unwrap();
        taken.has_times = true;

        let record = vec![taken];
        let mwf = DaySet::from_str("WF").unwrap();
        let tr = DaySet::from_str("TR").unwrap();

        assert_eq!(find_day_conflicts(&record, term, mwf, true).len(), 1);
        assert!(find_day_conflicts(&record, term, tr, true).is_empty());
        // No announced times on the target section: no conflict
        assert!(find_day_conflicts(&record, term, mwf, false).is_empty());
        // Different term: no conflict
        assert!(find_day_conflicts(&record, fall(2026), mwf, true).is_empty());
    }
}
