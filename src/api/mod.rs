//! Request and response bodies of the HTTP surface. JSON is camelCase and
//! enums travel as their variant names.

pub mod account;
pub mod auth;
pub mod fishing_report;
pub mod landing;
pub mod page;
pub mod patch;
pub mod reference;
pub mod tackle;
pub mod user;
pub mod validate;

pub use account::{AccountRequest, AccountResponse};
pub use auth::{TokenRequest, TokenResponse};
pub use fishing_report::{CreateFishingReportRequest, FishingReportResponse, UpdateFishingReportRequest};
pub use landing::{LandingRelations, LandingRequest, LandingResponse};
pub use page::PageQuery;
pub use patch::Patch;
pub use reference::{FishSpeciesResponse, LocationResponse};
pub use tackle::{TackleRequest, TackleResponse};
pub use user::{UserRequest, UserResponse};
pub use validate::{FieldErrors, Validate};
