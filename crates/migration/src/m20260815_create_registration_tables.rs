use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create terms table
        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Terms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Terms::Season).string().not_null())
                    .col(ColumnDef::new(Terms::Year).small_integer().not_null())
                    .col(ColumnDef::new(Terms::LateRegistrationDeadline).date())
                    .col(ColumnDef::new(Terms::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create departments table
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Departments::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Departments::Name).string().not_null())
                    .col(ColumnDef::new(Departments::College).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::Sub)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create student_majors table
        manager
            .create_table(
                Table::create()
                    .table(StudentMajors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentMajors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentMajors::StudentId).uuid().not_null())
                    .col(
                        ColumnDef::new(StudentMajors::DepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_majors-student_id")
                            .from(StudentMajors::Table, StudentMajors::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_majors-department_id")
                            .from(StudentMajors::Table, StudentMajors::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create advisors table
        manager
            .create_table(
                Table::create()
                    .table(Advisors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Advisors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Advisors::Sub)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Advisors::Name).string().not_null())
                    .col(ColumnDef::new(Advisors::ScopeLevel).string().not_null())
                    .col(ColumnDef::new(Advisors::DepartmentId).uuid())
                    .col(ColumnDef::new(Advisors::College).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-advisors-department_id")
                            .from(Advisors::Table, Advisors::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create instructors table
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Instructors::Sub)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Instructors::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Subject).string().not_null())
                    .col(ColumnDef::new(Courses::Number).string().not_null())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::TermId).uuid().not_null())
                    .col(ColumnDef::new(Courses::Credits).integer().not_null())
                    .col(ColumnDef::new(Courses::Prerequisites).text())
                    .col(ColumnDef::new(Courses::Corequisites).text())
                    .col(ColumnDef::new(Courses::AntiRequisites).text())
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-term_id")
                            .from(Courses::Table, Courses::TermId)
                            .to(Terms::Table, Terms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create class_sections table
        manager
            .create_table(
                Table::create()
                    .table(ClassSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassSections::CourseId).uuid().not_null())
                    .col(ColumnDef::new(ClassSections::TermId).uuid().not_null())
                    .col(
                        ColumnDef::new(ClassSections::SectionCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSections::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(ClassSections::MeetingDays)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassSections::TimeStart).time())
                    .col(ColumnDef::new(ClassSections::TimeEnd).time())
                    .col(ColumnDef::new(ClassSections::InstructorId).uuid())
                    .col(ColumnDef::new(ClassSections::Room).string())
                    .col(
                        ColumnDef::new(ClassSections::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_sections-course_id")
                            .from(ClassSections::Table, ClassSections::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_sections-term_id")
                            .from(ClassSections::Table, ClassSections::TermId)
                            .to(Terms::Table, Terms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-class_sections-instructor_id")
                            .from(ClassSections::Table, ClassSections::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create enrollments table
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::SectionId).uuid().not_null())
                    .col(ColumnDef::new(Enrollments::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Enrollments::Status).text().not_null())
                    .col(ColumnDef::new(Enrollments::Grade).string())
                    .col(ColumnDef::new(Enrollments::EnrolledAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-section_id")
                            .from(Enrollments::Table, Enrollments::SectionId)
                            .to(ClassSections::Table, ClassSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-enrollments-student_id")
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create registration_holds table
        manager
            .create_table(
                Table::create()
                    .table(RegistrationHolds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegistrationHolds::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RegistrationHolds::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationHolds::HoldType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegistrationHolds::Note).text())
                    .col(
                        ColumnDef::new(RegistrationHolds::PlacedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationHolds::PlacedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegistrationHolds::ResolvedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registration_holds-student_id")
                            .from(RegistrationHolds::Table, RegistrationHolds::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create registration_schedules table
        manager
            .create_table(
                Table::create()
                    .table(RegistrationSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegistrationSchedules::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSchedules::TermId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSchedules::ClassStanding)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegistrationSchedules::CreditThreshold).integer())
                    .col(
                        ColumnDef::new(RegistrationSchedules::StartDate)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-registration_schedules-term_id")
                            .from(
                                RegistrationSchedules::Table,
                                RegistrationSchedules::TermId,
                            )
                            .to(Terms::Table, Terms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create time_conflict_waivers table
        manager
            .create_table(
                Table::create()
                    .table(TimeConflictWaivers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TimeConflictWaivers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TimeConflictWaivers::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimeConflictWaivers::SectionAId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimeConflictWaivers::SectionBId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimeConflictWaivers::InstructorAApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TimeConflictWaivers::InstructorBApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TimeConflictWaivers::AdvisorApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TimeConflictWaivers::Status)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TimeConflictWaivers::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-time_conflict_waivers-student_id")
                            .from(
                                TimeConflictWaivers::Table,
                                TimeConflictWaivers::StudentId,
                            )
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-time_conflict_waivers-section_a_id")
                            .from(
                                TimeConflictWaivers::Table,
                                TimeConflictWaivers::SectionAId,
                            )
                            .to(ClassSections::Table, ClassSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-time_conflict_waivers-section_b_id")
                            .from(
                                TimeConflictWaivers::Table,
                                TimeConflictWaivers::SectionBId,
                            )
                            .to(ClassSections::Table, ClassSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create prerequisite_waivers table
        manager
            .create_table(
                Table::create()
                    .table(PrerequisiteWaivers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrerequisiteWaivers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PrerequisiteWaivers::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrerequisiteWaivers::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrerequisiteWaivers::WaivedCourseCode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrerequisiteWaivers::GrantedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrerequisiteWaivers::GrantedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisite_waivers-student_id")
                            .from(
                                PrerequisiteWaivers::Table,
                                PrerequisiteWaivers::StudentId,
                            )
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-prerequisite_waivers-course_id")
                            .from(
                                PrerequisiteWaivers::Table,
                                PrerequisiteWaivers::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create capacity_overrides table
        manager
            .create_table(
                Table::create()
                    .table(CapacityOverrides::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CapacityOverrides::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CapacityOverrides::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CapacityOverrides::SectionId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CapacityOverrides::GrantedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CapacityOverrides::GrantedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-capacity_overrides-student_id")
                            .from(CapacityOverrides::Table, CapacityOverrides::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-capacity_overrides-section_id")
                            .from(CapacityOverrides::Table, CapacityOverrides::SectionId)
                            .to(ClassSections::Table, ClassSections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create department_permissions table
        manager
            .create_table(
                Table::create()
                    .table(DepartmentPermissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DepartmentPermissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DepartmentPermissions::StudentId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DepartmentPermissions::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DepartmentPermissions::GrantedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DepartmentPermissions::GrantedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-department_permissions-student_id")
                            .from(
                                DepartmentPermissions::Table,
                                DepartmentPermissions::StudentId,
                            )
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-department_permissions-course_id")
                            .from(
                                DepartmentPermissions::Table,
                                DepartmentPermissions::CourseId,
                            )
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(
                Table::drop()
                    .table(DepartmentPermissions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CapacityOverrides::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PrerequisiteWaivers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(TimeConflictWaivers::Table).to_owned())
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(RegistrationSchedules::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RegistrationHolds::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ClassSections::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Advisors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(StudentMajors::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Terms::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Terms {
    Table,
    Id,
    Season,
    Year,
    LateRegistrationDeadline,
    CreatedAt,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
    Code,
    Name,
    College,
}

#[derive(Iden)]
enum Students {
    Table,
    Id,
    Sub,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum StudentMajors {
    Table,
    Id,
    StudentId,
    DepartmentId,
}

#[derive(Iden)]
enum Advisors {
    Table,
    Id,
    Sub,
    Name,
    ScopeLevel,
    DepartmentId,
    College,
}

#[derive(Iden)]
enum Instructors {
    Table,
    Id,
    Sub,
    Name,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Subject,
    Number,
    Title,
    TermId,
    Credits,
    Prerequisites,
    Corequisites,
    AntiRequisites,
    CreatedAt,
}

#[derive(Iden)]
enum ClassSections {
    Table,
    Id,
    CourseId,
    TermId,
    SectionCode,
    Capacity,
    MeetingDays,
    TimeStart,
    TimeEnd,
    InstructorId,
    Room,
    CreatedAt,
}

#[derive(Iden)]
enum Enrollments {
    Table,
    Id,
    SectionId,
    StudentId,
    Status,
    Grade,
    EnrolledAt,
}

#[derive(Iden)]
enum RegistrationHolds {
    Table,
    Id,
    StudentId,
    HoldType,
    Note,
    PlacedBy,
    PlacedAt,
    ResolvedAt,
}

#[derive(Iden)]
enum RegistrationSchedules {
    Table,
    Id,
    TermId,
    ClassStanding,
    CreditThreshold,
    StartDate,
}

#[derive(Iden)]
enum TimeConflictWaivers {
    Table,
    Id,
    StudentId,
    SectionAId,
    SectionBId,
    InstructorAApproved,
    InstructorBApproved,
    AdvisorApproved,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum PrerequisiteWaivers {
    Table,
    Id,
    StudentId,
    CourseId,
    WaivedCourseCode,
    GrantedBy,
    GrantedAt,
}

#[derive(Iden)]
enum CapacityOverrides {
    Table,
    Id,
    StudentId,
    SectionId,
    GrantedBy,
    GrantedAt,
}

#[derive(Iden)]
enum DepartmentPermissions {
    Table,
    Id,
    StudentId,
    CourseId,
    GrantedBy,
    GrantedAt,
}
