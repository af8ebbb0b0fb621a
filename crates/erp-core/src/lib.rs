//! Platform-neutral core of the ERP console.
//!
//! Everything here runs without a browser so it can be tested natively:
//! - [`models`] - Domain records (users, branches, articles, purchases)
//! - [`grid`] - Search, filter, sort and CSV export for tabular views
//! - [`route`] - Page table and hash locations
//! - [`workspace`] - Open tabs and the active selection
//! - [`session`] - Authenticated identity, active branch and login flow

pub mod error;
pub mod grid;
pub mod models;
pub mod route;
pub mod session;
pub mod workspace;

pub use error::{AuthError, ExportError};
pub use models::{Article, Branch, Company, Purchase, PurchaseItem, Role, User};
pub use route::{DEFAULT_PATH, Location, Page};
pub use session::{AuthTransport, Credentials, LoginResponse, Session};
pub use workspace::{Tab, Workspace};
