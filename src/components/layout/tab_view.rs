//! Tab strip and the content of the active tab.

use erp_core::Page;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons::{self as ic, page_icon};
use crate::pages::render_page;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn TabView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let pages = Signal::derive(move || {
        ctx.workspace
            .with(|ws| ws.tabs().iter().map(|t| t.page).collect::<Vec<_>>())
    });
    let active = Memo::new(move |_| ctx.workspace.with(|ws| ws.active()));

    view! {
        <section class=css::tabView>
            <div class=css::tabStrip role="tablist">
                <For
                    each=move || pages.get()
                    key=|page| *page
                    children=move |page| view! { <TabButton page=page /> }
                />
            </div>
            <div class=css::tabContent role="tabpanel">
                {move || match active.get() {
                    Some(page) => render_page(page),
                    None => view! {
                        <div class=css::placeholder>
                            "Seleccione una opción del menú para comenzar"
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn TabButton(page: Page) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_active = Signal::derive(move || ctx.workspace.with(|ws| ws.active() == Some(page)));
    let class = move || {
        if is_active.get() {
            format!("{} {}", css::tab, css::tabActive)
        } else {
            css::tab.to_string()
        }
    };

    let on_close = move |ev: leptos::ev::MouseEvent| {
        // Keep the click from also activating the tab being closed
        ev.stop_propagation();
        ctx.close_tab(page);
    };

    view! {
        <div
            class=class
            role="tab"
            aria-selected=move || is_active.get().to_string()
            on:click=move |_| ctx.activate_tab(page)
        >
            <Icon icon=page_icon(page) />
            <span class=css::tabTitle>{page.title()}</span>
            <button class=css::tabClose title="Cerrar" on:click=on_close>
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
