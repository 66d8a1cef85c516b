use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Departmental consent for courses whose requisite text asks for
/// "permission of department"
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "department_permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub granted_by: Uuid,
    pub granted_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
