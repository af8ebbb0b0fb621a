//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Workspace shell: header, sidebar and tabs
//! - [`data_table`] - Generic searchable/sortable/exportable table
//! - [`login`] - Login screen
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod data_table;
pub mod icons;
pub mod layout;
pub mod login;
pub mod router;

pub use router::AppRouter;
