use erp_core::Page;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{PageTitle, css, mock};
use crate::app::AppContext;
use crate::components::icons::page_icon;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let greeting = Signal::derive(move || {
        ctx.session.with(|s| {
            s.user()
                .map(|u| format!("Bienvenido, {}", u.name))
                .unwrap_or_default()
        })
    });
    let branch = Signal::derive(move || {
        ctx.session.with(|s| {
            s.branch()
                .map(|b| b.name.clone())
                .unwrap_or_else(|| "Sin sucursal".to_string())
        })
    });

    let stats = [
        (Page::Users, mock::users().len()),
        (Page::Articles, mock::articles().len()),
        (Page::Purchases, mock::purchases().len()),
    ];

    view! {
        <div class=css::page>
            <PageTitle page=Page::Dashboard />
            <p class=css::lead>{greeting}</p>
            <p class=css::muted>"Sucursal activa: " {branch}</p>
            <div class=css::stats>
                {stats
                    .into_iter()
                    .map(|(page, count)| view! {
                        <button class=css::statCard on:click=move |_| ctx.open_page(page)>
                            <Icon icon=page_icon(page) />
                            <span class=css::statValue>{count}</span>
                            <span class=css::statLabel>{page.title()}</span>
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
