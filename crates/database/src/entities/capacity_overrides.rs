use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Registrar-granted exception permitting one student to enroll past a
/// section's stated capacity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "capacity_overrides")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub section_id: Uuid,
    pub granted_by: Uuid,
    pub granted_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
