//! Login screen.
//!
//! Posts the credentials through [`HttpAuthTransport`] and installs the
//! resulting session on success. Failures are shown inline.

use erp_core::{Credentials, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppContext;
use crate::config::{APP_NAME, DEFAULT_LOGIN_BRANCH};
use crate::core::auth::HttpAuthTransport;

stylance::import_crate_style!(css, "src/components/login/login.module.css");

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let branch_id = RwSignal::new(DEFAULT_LOGIN_BRANCH.to_string());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let credentials = Credentials::new(
            email.get_untracked(),
            password.get_untracked(),
            branch_id.get_untracked(),
        );
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match Session::login(&HttpAuthTransport::new(), &credentials).await {
                Ok(session) => ctx.sign_in(session),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    view! {
        <div class=css::screen>
            <form class=css::card on:submit=on_submit>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::subtitle>"Inicie sesión para continuar"</p>

                <label class=css::field>
                    <span>"Email"</span>
                    <input
                        type="email"
                        required=true
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Contraseña"</span>
                    <input
                        type="password"
                        required=true
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class=css::field>
                    <span>"Sucursal"</span>
                    <input
                        type="text"
                        required=true
                        prop:value=move || branch_id.get()
                        on:input=move |ev| branch_id.set(event_target_value(&ev))
                    />
                </label>

                {move || error.get().map(|message| view! {
                    <div class=css::error role="alert">{message}</div>
                })}

                <button type="submit" class=css::submit disabled=move || loading.get()>
                    {move || if loading.get() { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>
        </div>
    }
}
