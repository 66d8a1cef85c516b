use crate::{
    clock::Clock,
    entities::{registration_holds, students},
    error::RegistrationError,
    services::authorization::AuthorizationService,
};
use log::info;
use models::hold::HoldType;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

/// Placing and resolving registration holds. Who may do which is
/// resolved by the Authorization Scoper; this service only performs
/// the writes.
pub struct HoldsService;

impl HoldsService {
    pub async fn place_hold(
        db: &DatabaseConnection,
        clock: &dyn Clock,
        actor_sub: &str,
        student_id: Uuid,
        hold_type: HoldType,
        note: Option<String>,
    ) -> Result<registration_holds::Model, RegistrationError> {
        let actor =
            AuthorizationService::authorize_hold_action(db, actor_sub, student_id, hold_type)
                .await?;

        students::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("student"))?;

        let hold = registration_holds::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            hold_type: Set(hold_type.to_string()),
            note: Set(note),
            placed_by: Set(actor.id),
            placed_at: Set(clock.now()),
            resolved_at: Set(None),
        }
        .insert(db)
        .await?;

        info!(
            target: "audit",
            "hold placed student={student_id} type={hold_type} by={}",
            actor.id
        );

        Ok(hold)
    }

    /// Resolve the active hold of the given type. The row is kept with
    /// `resolved_at` set; there is nothing to resolve if no active hold
    /// of that type exists.
    pub async fn resolve_hold(
        db: &DatabaseConnection,
        clock: &dyn Clock,
        actor_sub: &str,
        student_id: Uuid,
        hold_type: HoldType,
    ) -> Result<registration_holds::Model, RegistrationError> {
        let actor =
            AuthorizationService::authorize_hold_action(db, actor_sub, student_id, hold_type)
                .await?;

        let hold = registration_holds::Entity::find()
            .filter(registration_holds::Column::StudentId.eq(student_id))
            .filter(registration_holds::Column::HoldType.eq(hold_type.to_string()))
            .filter(registration_holds::Column::ResolvedAt.is_null())
            .one(db)
            .await?
            .ok_or(RegistrationError::NotFound("hold"))?;

        let mut resolved: registration_holds::ActiveModel = hold.into();
        resolved.resolved_at = Set(Some(clock.now()));
        let updated = resolved.update(db).await?;

        info!(
            target: "audit",
            "hold resolved student={student_id} type={hold_type} by={}",
            actor.id
        );

        Ok(updated)
    }

    /// All currently active holds for a student
    pub async fn active_holds(
        db: &DatabaseConnection,
        student_id: Uuid,
    ) -> Result<Vec<registration_holds::Model>, RegistrationError> {
        Ok(registration_holds::Entity::find()
            .filter(registration_holds::Column::StudentId.eq(student_id))
            .filter(registration_holds::Column::ResolvedAt.is_null())
            .all(db)
            .await?)
    }
}
