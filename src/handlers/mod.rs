// handlers/mod.rs - Two-tier handler layout
//
// Public (no auth) → Protected (bearer token bound by require_account)
pub mod protected; // /api/tackle, /api/fishingreports, /api/users, /api/species, /api/locations
pub mod public; // /, /health, /api/auth/token, /api/accounts
