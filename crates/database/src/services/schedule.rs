use crate::{
    entities::{registration_schedules, terms},
    error::RegistrationError,
    services::authorization::AuthorizationService,
};
use chrono::NaiveDateTime;
use log::info;
use models::standing::ClassStanding;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

/// One registration window to be written for a term
#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub class_standing: ClassStanding,
    pub credit_threshold: Option<i32>,
    pub start_date: NaiveDateTime,
}

/// Registrar maintenance of the per-term registration schedule
pub struct ScheduleService;

impl ScheduleService {
    /// Replace the registration windows for a term. Registrar-only; the
    /// delete and inserts commit together or not at all.
    pub async fn replace_windows(
        db: &DatabaseConnection,
        actor_sub: &str,
        term_id: Uuid,
        windows: Vec<WindowSpec>,
    ) -> Result<usize, RegistrationError> {
        let actor = AuthorizationService::require_registrar(db, actor_sub).await?;

        terms::Entity::find_by_id(term_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("term"))?;

        let count = windows.len();
        let txn = db.begin().await?;

        registration_schedules::Entity::delete_many()
            .filter(registration_schedules::Column::TermId.eq(term_id))
            .exec(&txn)
            .await?;

        if !windows.is_empty() {
            let rows = windows.into_iter().map(|w| registration_schedules::ActiveModel {
                id: Set(Uuid::new_v4()),
                term_id: Set(term_id),
                class_standing: Set(w.class_standing.to_string()),
                credit_threshold: Set(w.credit_threshold),
                start_date: Set(w.start_date),
            });

            registration_schedules::Entity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;

        info!(
            target: "audit",
            "registration schedule replaced term={term_id} windows={count} by={}",
            actor.id
        );

        Ok(count)
    }
}
