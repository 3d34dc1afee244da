//! SportsDataIO NHL client
//!
//! Fetches the day's schedule (the engine's ScheduleSnapshot source),
//! projected starting goaltenders, and scored skater projections.

pub mod client;
pub mod models;
pub mod scoring;

pub use client::{SportsDataClient, SportsDataConfig};
pub use models::{GameByDate, Goaltender, PlayerGameProjection};
pub use scoring::fantasy_score;
