use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub code: String, // e.g. "CSE"
    pub name: String,
    pub college: String, // e.g. "College of Engineering"
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_majors::Entity")]
    StudentMajors,
}

impl Related<super::student_majors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentMajors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
