// handlers/protected/mod.rs - Handlers behind require_account
//
// Every handler takes the caller from AccountContext; the owning account id
// never comes from the path or body.

pub mod fishing_reports;
pub mod landings;
pub mod reference;
pub mod tackle;
pub mod users;

use axum::extract::{rejection::QueryRejection, Query};

use crate::api::PageQuery;
use crate::error::ApiError;

pub use tackle::delete as tackle_delete;
pub use tackle::get as tackle_get;
pub use tackle::list as tackle_list;
pub use tackle::post as tackle_post;
pub use tackle::put as tackle_put;

pub use fishing_reports::delete as report_delete;
pub use fishing_reports::get as report_get;
pub use fishing_reports::list as report_list;
pub use fishing_reports::post as report_post;
pub use fishing_reports::put as report_put;

pub use landings::delete as landing_delete;
pub use landings::get as landing_get;
pub use landings::list as landing_list;
pub use landings::post as landing_post;
pub use landings::put as landing_put;

pub use users::delete as user_delete;
pub use users::get as user_get;
pub use users::list as user_list;
pub use users::post as user_post;
pub use users::put as user_put;

pub use reference::{location_get, location_list, species_get, species_list};

/// Unwrap `?limit=&next=`, reporting malformed values as API errors.
pub(crate) fn page_query(query: Result<Query<PageQuery>, QueryRejection>) -> Result<PageQuery, ApiError> {
    let Query(query) = query?;
    Ok(query)
}
