use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum WaiverStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "denied")]
    Denied,
}

/// A student's request to hold two day-overlapping sections. Becomes
/// approved only when both instructors of record and an advisor have
/// signed off.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "time_conflict_waivers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub section_a_id: Uuid,
    pub section_b_id: Uuid,
    pub instructor_a_approved: bool,
    pub instructor_b_approved: bool,
    pub advisor_approved: bool,
    pub status: WaiverStatus,
    pub created_at: DateTime,
}

impl Model {
    /// Whether the waiver names the given pair of sections, in either order
    pub fn covers(&self, section_a: Uuid, section_b: Uuid) -> bool {
        (self.section_a_id == section_a && self.section_b_id == section_b)
            || (self.section_a_id == section_b && self.section_b_id == section_a)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
