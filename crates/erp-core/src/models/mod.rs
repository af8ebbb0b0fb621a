//! Domain records.
//!
//! Plain data with serde shapes matching the backend (camelCase JSON).
//! Grid-capable records implement [`Record`](crate::grid::Record).

mod article;
mod company;
mod purchase;
mod user;

pub use article::Article;
pub use company::Company;
pub use purchase::{Purchase, PurchaseItem};
pub use user::{Branch, Role, User};
