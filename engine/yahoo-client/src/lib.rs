//! Yahoo Fantasy Hockey API client
//!
//! Wraps the three Yahoo interactions this system needs: the OAuth2
//! refresh-token grant, the roster fetch (XML decoded once, at this
//! boundary, into `lineup_core` types), and roster-position updates.

pub mod client;
pub mod error;
pub mod models;

pub use client::{TokenResponse, YahooClient, YahooConfig};
pub use error::{YahooError, YahooResult};
