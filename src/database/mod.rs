pub mod manager;
pub mod memory;
pub mod models;
pub mod ordering;
pub mod postgres;
pub mod seed;
pub mod stores;

pub use manager::{DatabaseError, DatabaseManager};
pub use stores::{
    AccountStore, FishSpeciesStore, FishingReportStore, LandingStore, LocationStore, StoreResult,
    Stores, TackleStore, UserStore, Visibility,
};
