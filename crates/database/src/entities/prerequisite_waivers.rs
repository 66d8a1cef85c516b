use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A point exception: the named prerequisite code is treated as
/// satisfied for this student when enrolling in this course.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prerequisite_waivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub waived_course_code: String,
    pub granted_by: Uuid,
    pub granted_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
