//! Business rules over the stores. Missing and foreign-owned entities both
//! come back as `None`/`false`; explicit bad references are `BusinessRule`.

pub mod account_service;
pub mod fishing_report_service;
pub mod landing_service;
pub mod reference_service;
pub mod tackle_service;
pub mod user_service;

use thiserror::Error;
use uuid::Uuid;

use crate::database::models::Owned;
use crate::database::DatabaseError;

pub use account_service::AccountService;
pub use fishing_report_service::FishingReportService;
pub use landing_service::LandingService;
pub use reference_service::ReferenceService;
pub use tackle_service::TackleService;
pub use user_service::UserService;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BusinessRule(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn rule(reason: impl Into<String>) -> Self {
        ServiceError::BusinessRule(reason.into())
    }
}

/// Keep the entity only if the caller owns it.
pub fn owned<T: Owned>(entity: Option<T>, account_id: Uuid) -> Option<T> {
    entity.filter(|e| e.owner_id() == account_id)
}
