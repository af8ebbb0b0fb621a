//! Domain pages rendered inside workspace tabs.
//!
//! Pages own their (mock) record arrays and column descriptors and hand them
//! to the data table. Domain actions are logged, not performed.

mod articles;
mod dashboard;
mod mock;
mod purchases;
mod settings;
mod users;

use erp_core::Page;
use leptos::prelude::*;

pub use articles::Articles;
pub use dashboard::Dashboard;
pub use purchases::Purchases;
pub use settings::Settings;
pub use users::Users;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Content of the tab bound to `page`.
pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::Users => view! { <Users /> }.into_any(),
        Page::Articles => view! { <Articles /> }.into_any(),
        Page::Purchases => view! { <Purchases /> }.into_any(),
        Page::Settings => view! { <Settings /> }.into_any(),
    }
}

/// Page heading shared by every page.
#[component]
fn PageTitle(page: Page) -> impl IntoView {
    view! { <h1 class=css::title>{page.title()}</h1> }
}
