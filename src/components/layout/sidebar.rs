//! Sidebar navigation over the page table.

use erp_core::Page;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons::page_icon;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class=css::sidebar aria-label="Menú principal">
            <div class=css::brand>{APP_NAME}</div>
            <ul class=css::navList>
                {Page::ALL
                    .into_iter()
                    .map(|page| view! { <SidebarItem page=page /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn SidebarItem(page: Page) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_active = Signal::derive(move || ctx.workspace.with(|ws| ws.active() == Some(page)));
    let class = move || {
        if is_active.get() {
            format!("{} {}", css::navItem, css::navItemActive)
        } else {
            css::navItem.to_string()
        }
    };

    view! {
        <li>
            <button class=class on:click=move |_| ctx.open_page(page)>
                <Icon icon=page_icon(page) />
                <span>{page.title()}</span>
            </button>
        </li>
    }
}
