//! Login over the browser Fetch API and session persistence.

use erp_core::{AuthError, AuthTransport, Credentials, LoginResponse, Session};

use crate::config::{AUTH_ENDPOINT, SESSION_KEY};
use crate::utils::{cache, post_json};

/// Posts credentials to the authentication endpoint.
pub struct HttpAuthTransport {
    endpoint: &'static str,
}

impl HttpAuthTransport {
    pub fn new() -> Self {
        Self {
            endpoint: AUTH_ENDPOINT,
        }
    }
}

impl Default for HttpAuthTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthTransport for HttpAuthTransport {
    async fn send_login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        post_json::<_, LoginResponse>(self.endpoint, credentials)
            .await
            .map_err(AuthError::from)
    }
}

/// Session cached for this browser session, if any.
pub fn restore_session() -> Session {
    cache::get::<Session>(SESSION_KEY)
        .filter(Session::is_authenticated)
        .unwrap_or_default()
}

/// Cache an authenticated session, or clear the cache for an anonymous one.
pub fn persist_session(session: &Session) {
    let result = if session.is_authenticated() {
        cache::set(SESSION_KEY, session)
    } else {
        cache::remove(SESSION_KEY)
    };
    if let Err(e) = result {
        log::warn!("session cache: {}", e);
    }
}
