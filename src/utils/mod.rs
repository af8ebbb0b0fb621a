//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window, storage and hash location access
//! - [`post_json`] - JSON requests with timeout
//! - [`cache`] - sessionStorage cache
//! - [`download_text`] - Client-side file download

pub mod cache;
pub mod dom;
mod download;
mod fetch;

pub use download::{CSV_MIME, download_text};
pub use fetch::post_json;
