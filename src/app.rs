//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! navigation/session operations every component shares.

use erp_core::{Branch, Location, Page, Session, Workspace};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::auth;
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Session**: identity and active branch, owned here and torn down on logout
/// - **Workspace**: open tabs and the active one
/// - **Location**: mirror of the URL hash; the query part carries table
///   search/filter state
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Session>,
    pub workspace: RwSignal<Workspace>,
    pub location: RwSignal<Location>,
}

impl AppContext {
    /// Creates the context, restoring a session cached earlier in this
    /// browser session and reading the initial location from the URL.
    pub fn new() -> Self {
        let location = dom::current_location();
        let mut workspace = Workspace::new();
        workspace.sync(&location);

        Self {
            session: RwSignal::new(auth::restore_session()),
            workspace: RwSignal::new(workspace),
            location: RwSignal::new(location),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move to `location`, adding a history entry.
    pub fn navigate(&self, location: Location) {
        if self.location.with_untracked(|l| *l == location) {
            return;
        }
        log::debug!("navigate: {}", location.to_hash());
        dom::push_location(&location);
        self.location.set(location);
    }

    /// Replace the query of the current location without a history entry.
    pub fn replace_query(&self, query: String) {
        let location = self.location.with_untracked(|l| l.with_query(query));
        dom::replace_location(&location);
        self.workspace.update(|ws| ws.remember_query(&location));
        self.location.set(location);
    }

    /// Follow a location change made by the browser (back/forward).
    pub fn follow_location(&self, location: Location) {
        self.workspace.update(|ws| {
            ws.sync(&location);
            log::debug!("workspace: active path {}", ws.active_path());
        });
        self.location.set(location);
    }

    /// Open (or focus) the tab for `page`.
    pub fn open_page(&self, page: Page) {
        if let Some(location) = self.workspace.try_update(|ws| ws.open(page)) {
            self.navigate(location);
        }
    }

    pub fn activate_tab(&self, page: Page) {
        if let Some(location) = self.workspace.try_update(|ws| ws.activate(page)).flatten() {
            self.navigate(location);
        }
    }

    pub fn close_tab(&self, page: Page) {
        if let Some(location) = self.workspace.try_update(|ws| ws.close(page)).flatten() {
            self.navigate(location);
        }
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Install a freshly authenticated session.
    pub fn sign_in(&self, session: Session) {
        auth::persist_session(&session);
        self.session.set(session);
    }

    /// Tear down the session and the workspace built on top of it.
    pub fn sign_out(&self) {
        self.session.update(Session::logout);
        self.session.with_untracked(auth::persist_session);
        self.workspace.set(Workspace::new());
        self.navigate(Location::landing());
        log::info!("session: logged out");
    }

    pub fn set_branch(&self, branch: Branch) {
        log::info!("session: switching to branch {}", branch.name);
        self.session.update(|s| s.set_branch(branch));
        self.session.with_untracked(auth::persist_session);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router, which gates the workspace behind the login screen
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f9fafb;
                    color: #111827;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "Algo salió mal"
                        </h1>
                        <p style="color: #6b7280; margin-bottom: 2rem;">
                            "Ocurrió un error inesperado. Recargue la página."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6b7280;">
                                "Detalles"
                            </summary>
                            <ul style="margin: 1rem 0 0 0; padding-left: 1.5rem; color: #dc2626;">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2563eb;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                            "
                        >
                            "Recargar"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
