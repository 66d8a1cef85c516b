use models::days::MeetingDays;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A scheduled offering of a course in a term. The row the transaction
/// engine takes an exclusive lock on: all capacity decisions for a
/// section serialize through it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class_sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub course_id: Uuid,
    pub term_id: Uuid,
    pub section_code: String, // e.g. "01"
    pub capacity: i32,
    pub meeting_days: String, // e.g. "MWF" or "TBA"
    pub time_start: Option<Time>,
    pub time_end: Option<Time>,
    pub instructor_id: Option<Uuid>,
    pub room: Option<String>,
    pub created_at: DateTime,
}

impl Model {
    pub fn meeting_days(&self) -> MeetingDays {
        self.meeting_days.clone().into()
    }

    /// Whether the section has announced meeting times. Sections
    /// without times never participate in time conflicts.
    pub fn has_meeting_times(&self) -> bool {
        self.time_start.is_some()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::terms::Entity",
        from = "Column::TermId",
        to = "super::terms::Column::Id"
    )]
    Term,
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::Id"
    )]
    Instructor,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::terms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Term.def()
    }
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
