use sea_orm::DbErr;

/// A business-rule failure from the eligibility pipeline. The first
/// failed stage is surfaced so the student gets the most actionable
/// reason.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("Registration is blocked by active hold(s): {0}")]
    HoldActive(String),

    #[error("Registration window is closed: {0}")]
    WindowClosed(String),

    #[error("Missing prerequisite: {0}")]
    PrerequisiteMissing(String),

    #[error("Corequisite {0} must be taken in the same term")]
    CorequisiteMissing(String),

    #[error("Credit already held for anti-requisite {0}")]
    AntiRequisiteViolation(String),

    #[error("Meeting time conflict with {0}")]
    TimeConflict(String),

    #[error("Already registered for {0} this term")]
    DuplicateCourseEnrollment(String),

    #[error("{0}")]
    InvalidEnrollmentState(String),
}

/// Top-level error taxonomy for the registration engine. Every failure
/// inside a transaction rolls the transaction back before this is
/// returned to the caller.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Not authorized: {0}")]
    AuthorizationDenied(String),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}
