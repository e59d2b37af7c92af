// handlers/public/mod.rs - Handlers reachable without a bearer token

pub mod accounts;
pub mod auth;
pub mod health;

pub use accounts::delete as account_delete;
pub use accounts::get as account_get;
pub use accounts::list as account_list;
pub use accounts::post as account_post;
pub use accounts::put as account_put;

pub use auth::token_post;

pub use health::{health, root};
