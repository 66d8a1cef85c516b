use models::term::Term;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "terms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub season: String, // spring, summer1, summer2, fall
    pub year: i16,
    /// Last day to register, from the academic calendar import
    pub late_registration_deadline: Option<Date>,
    pub created_at: DateTime,
}

impl Model {
    /// The domain term, if the stored season string is well formed
    pub fn term(&self) -> Option<Term> {
        self.season
            .parse()
            .ok()
            .map(|season| Term::new(season, self.year))
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
