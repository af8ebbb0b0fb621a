//! Workspace shell shown after login.
//!
//! Components:
//! - [`Layout`] - Header, sidebar and tabbed content area
//! - [`Header`] - Branch selector, notifications and user menu
//! - [`Sidebar`] - Page navigation
//! - [`TabView`] - Open tabs and the active page

mod header;
mod sidebar;
mod tab_view;

use leptos::prelude::*;

pub use header::Header;
pub use sidebar::Sidebar;
pub use tab_view::TabView;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class=css::shell>
            <Sidebar />
            <div class=css::main>
                <Header />
                <TabView />
            </div>
        </div>
    }
}
