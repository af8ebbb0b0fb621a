//! Top bar with the branch selector and the user menu.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let branches = Signal::derive(move || ctx.session.with(|s| s.branches().to_vec()));
    let active_branch =
        Signal::derive(move || ctx.session.with(|s| s.branch().map(|b| b.id.clone())));
    let user_name = Signal::derive(move || {
        ctx.session
            .with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default())
    });
    let avatar = Signal::derive(move || ctx.session.with(|s| s.user().and_then(|u| u.avatar.clone())));
    let initial = Signal::derive(move || {
        ctx.session
            .with(|s| s.user().map(|u| u.initial()).unwrap_or_default())
    });

    let menu_open = RwSignal::new(false);

    let on_branch_change = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        let branch = ctx
            .session
            .with_untracked(|s| s.branches().iter().find(|b| b.id == id).cloned());
        if let Some(branch) = branch {
            ctx.set_branch(branch);
        }
    };

    view! {
        <header class=css::header>
            <select
                class=css::branchSelect
                aria-label="Sucursal"
                on:change=on_branch_change
                prop:value=move || active_branch.get().unwrap_or_default()
            >
                <Show when=move || active_branch.with(Option::is_none)>
                    <option value="" disabled=true>"Sin sucursal"</option>
                </Show>
                <For
                    each=move || branches.get()
                    key=|branch| branch.id.clone()
                    children=move |branch| {
                        view! { <option value=branch.id.clone()>{branch.name.clone()}</option> }
                    }
                />
            </select>

            <div class=css::headerActions>
                <button class=css::iconButton title="Notificaciones">
                    <Icon icon=ic::BELL />
                </button>

                <div class=css::userMenu>
                    <button
                        class=css::userButton
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || match avatar.get() {
                            Some(src) => view! { <img class=css::avatar src=src alt="" /> }.into_any(),
                            None => view! { <span class=css::avatarInitial>{initial}</span> }.into_any(),
                        }}
                        <span class=css::userName>{user_name}</span>
                        <Icon icon=ic::CHEVRON_DOWN />
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class=css::userDropdown>
                            <button
                                class=css::dropdownItem
                                on:click=move |_| {
                                    menu_open.set(false);
                                    ctx.sign_out();
                                }
                            >
                                <Icon icon=ic::LOGOUT />
                                <span>"Cerrar sesión"</span>
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
