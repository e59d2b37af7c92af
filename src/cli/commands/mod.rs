pub mod health;
pub mod migrate;
pub mod serve;
pub mod token;
