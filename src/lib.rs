//! Basketball scouting records service: athletes, teams, games, per-game
//! statistics, awards and injuries over SQLite, plus six fixed analytics
//! reports.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod stats;

pub use error::ApiError;
pub use routes::router;
