//! Browser-side services.
//!
//! - [`auth`] - HTTP login transport and session persistence
//! - [`error`] - Fetch and download errors

pub mod auth;
pub mod error;
