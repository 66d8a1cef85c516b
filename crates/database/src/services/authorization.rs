use crate::{
    entities::{advisors, student_majors},
    error::RegistrationError,
};
use models::{actor::ScopeLevel, hold::HoldType};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter};
use uuid::Uuid;

/// Resolves whether an actor may act on a given student, from the
/// advisor registry and the organizational hierarchy. Every hold and
/// waiver endpoint goes through this service; none re-implement the
/// scoping rules.
pub struct AuthorizationService;

impl AuthorizationService {
    pub async fn find_actor(
        conn: &impl ConnectionTrait,
        sub: &str,
    ) -> Result<Option<advisors::Model>, DbErr> {
        advisors::Entity::find()
            .filter(advisors::Column::Sub.eq(sub))
            .one(conn)
            .await
    }

    /// Look the actor up in the registry, denying by default when absent
    pub async fn require_actor(
        conn: &impl ConnectionTrait,
        sub: &str,
    ) -> Result<advisors::Model, RegistrationError> {
        Self::find_actor(conn, sub)
            .await?
            .ok_or_else(|| RegistrationError::AuthorizationDenied("not in the advisor registry".to_string()))
    }

    /// Whether the actor's scope covers the student's declared majors.
    /// A student with no declared major is only reachable by
    /// university-level advisors and registrars.
    pub async fn can_act_on_student(
        conn: &impl ConnectionTrait,
        actor: &advisors::Model,
        student_id: Uuid,
    ) -> Result<bool, DbErr> {
        let scope = match actor.scope() {
            Some(scope) => scope,
            None => return Ok(false),
        };

        match scope {
            ScopeLevel::Registrar | ScopeLevel::University => Ok(true),
            ScopeLevel::College => {
                let Some(college) = &actor.college else {
                    return Ok(false);
                };

                let majors = student_majors::Entity::find()
                    .filter(student_majors::Column::StudentId.eq(student_id))
                    .all(conn)
                    .await?;

                for major in majors {
                    if let Some(department) =
                        major.find_related(crate::entities::departments::Entity).one(conn).await?
                        && department.college == *college
                    {
                        return Ok(true);
                    }
                }

                Ok(false)
            }
            ScopeLevel::Department => {
                let Some(department_id) = actor.department_id else {
                    return Ok(false);
                };

                let count = student_majors::Entity::find()
                    .filter(student_majors::Column::StudentId.eq(student_id))
                    .filter(student_majors::Column::DepartmentId.eq(department_id))
                    .all(conn)
                    .await?;

                Ok(!count.is_empty())
            }
        }
    }

    /// Authorize an administrative action (waiver grant, advisor
    /// approval) on a student, returning the registry entry
    pub async fn authorize_student_action(
        conn: &impl ConnectionTrait,
        sub: &str,
        student_id: Uuid,
    ) -> Result<advisors::Model, RegistrationError> {
        let actor = Self::require_actor(conn, sub).await?;

        if Self::can_act_on_student(conn, &actor, student_id).await? {
            Ok(actor)
        } else {
            Err(RegistrationError::AuthorizationDenied(
                "student is outside the actor's advising scope".to_string(),
            ))
        }
    }

    /// Authorize placing or resolving a hold. Financial holds are
    /// registrar-only; academic-advising holds follow the scoping
    /// rules; other hold types only need registry membership.
    pub async fn authorize_hold_action(
        conn: &impl ConnectionTrait,
        sub: &str,
        student_id: Uuid,
        hold_type: HoldType,
    ) -> Result<advisors::Model, RegistrationError> {
        match hold_type {
            HoldType::Financial => {
                let actor = Self::require_actor(conn, sub).await?;
                if actor.scope().is_some_and(ScopeLevel::is_registrar) {
                    Ok(actor)
                } else {
                    Err(RegistrationError::AuthorizationDenied(
                        "financial holds are registrar-only".to_string(),
                    ))
                }
            }
            HoldType::AcademicAdvising => Self::authorize_student_action(conn, sub, student_id).await,
            _ => Self::require_actor(conn, sub).await,
        }
    }

    /// Authorize a registrar-only action (capacity overrides, schedule
    /// windows)
    pub async fn require_registrar(
        conn: &impl ConnectionTrait,
        sub: &str,
    ) -> Result<advisors::Model, RegistrationError> {
        let actor = Self::require_actor(conn, sub).await?;

        if actor.scope().is_some_and(ScopeLevel::is_registrar) {
            Ok(actor)
        } else {
            Err(RegistrationError::AuthorizationDenied(
                "registrar role required".to_string(),
            ))
        }
    }

    /// Whether the principal is a registrar; used by the enroll path to
    /// bypass the capacity check for registrar-initiated enrollments
    pub async fn is_registrar(conn: &impl ConnectionTrait, sub: &str) -> Result<bool, DbErr> {
        Ok(Self::find_actor(conn, sub)
            .await?
            .and_then(|a| a.scope())
            .is_some_and(ScopeLevel::is_registrar))
    }
}
