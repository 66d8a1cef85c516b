use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A catalog row. Append-only per catalog term: revisions create new
/// rows rather than mutating history.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub subject: String, // e.g. "CSE"
    pub number: String,  // e.g. "214"
    pub title: String,
    /// Catalog term this row belongs to
    pub term_id: Uuid,
    pub credits: i32,
    pub prerequisites: Option<String>,
    pub corequisites: Option<String>,
    pub anti_requisites: Option<String>,
    pub created_at: DateTime,
}

impl Model {
    /// The course code used in requisite text, e.g. "CSE214"
    pub fn code(&self) -> String {
        format!("{}{}", self.subject, self.number)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_sections::Entity")]
    ClassSections,
}

impl Related<super::class_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
