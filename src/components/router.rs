//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the location signal mirrors `#/path?query`
//! - **Programmatic navigation** goes through `AppContext`, which updates
//!   the URL with `pushState`/`replaceState` and the signal together
//! - **hashchange/popstate events**: browser back/forward buttons move the
//!   workspace to the page in the URL

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::layout::Layout;
use crate::components::login::Login;

/// Main application router.
///
/// Shows the login screen until a session exists, then the workspace.
///
/// - `#/` → Landing (empty workspace or Dashboard tab)
/// - `#/users?search=ann` → Users tab with its table state in the query
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Listen for browser-driven navigation (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        use crate::utils::dom;

        let closure = Closure::wrap(Box::new(move || {
            let location = dom::current_location();
            if ctx.location.with_untracked(|l| *l != location) {
                log::debug!("router: following {}", location.to_hash());
                ctx.follow_location(location);
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            for event in ["hashchange", "popstate"] {
                let _ = window
                    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <Show
            when=move || ctx.is_authenticated()
            fallback=|| view! { <Login /> }
        >
            <Layout />
        </Show>
    }
}
