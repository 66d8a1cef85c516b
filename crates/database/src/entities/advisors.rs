use models::actor::ScopeLevel;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The advisor registry. Actors not present here are denied
/// administrative actions by default; registrars are entries with the
/// `registrar` scope level.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "advisors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    /// Subject identifier from the session principal's claims
    #[sea_orm(unique)]
    pub sub: String,
    pub name: String,
    pub scope_level: String, // department, college, university, registrar
    pub department_id: Option<Uuid>,
    pub college: Option<String>,
}

impl Model {
    pub fn scope(&self) -> Option<ScopeLevel> {
        self.scope_level.parse().ok()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
