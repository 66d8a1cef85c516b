use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on courses for catalog lookups by code
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_subject_number")
                    .table(Courses::Table)
                    .col(Courses::Subject)
                    .col(Courses::Number)
                    .to_owned(),
            )
            .await?;

        // Index on class_sections.course_id for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_class_sections_course_id")
                    .table(ClassSections::Table)
                    .col(ClassSections::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_sections_term_id")
                    .table(ClassSections::Table)
                    .col(ClassSections::TermId)
                    .to_owned(),
            )
            .await?;

        // Roster counting hits enrollments by section and status
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_section_id_status")
                    .table(Enrollments::Table)
                    .col(Enrollments::SectionId)
                    .col(Enrollments::Status)
                    .to_owned(),
            )
            .await?;

        // One enrollment row per (section, student), whatever its status
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_section_id_student_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::SectionId)
                    .col(Enrollments::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Academic record loads hit enrollments by student
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_student_id")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .to_owned(),
            )
            .await?;

        // Hold checks filter by student and resolved_at
        manager
            .create_index(
                Index::create()
                    .name("idx_registration_holds_student_id")
                    .table(RegistrationHolds::Table)
                    .col(RegistrationHolds::StudentId)
                    .to_owned(),
            )
            .await?;

        // Window selection loads the whole schedule for a term
        manager
            .create_index(
                Index::create()
                    .name("idx_registration_schedules_term_id")
                    .table(RegistrationSchedules::Table)
                    .col(RegistrationSchedules::TermId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_registration_schedules_term_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_registration_holds_student_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_enrollments_student_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollments_section_id_student_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_enrollments_section_id_status")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_class_sections_term_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_class_sections_course_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_courses_subject_number")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Subject,
    Number,
}

#[derive(Iden)]
enum ClassSections {
    Table,
    CourseId,
    TermId,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    SectionId,
    StudentId,
    Status,
}

#[derive(Iden)]
enum RegistrationHolds {
    Table,
    StudentId,
}

#[derive(Iden)]
enum RegistrationSchedules {
    Table,
    TermId,
}
