//! Authenticated session and login flow.
//!
//! A [`Session`] is an owned value: logging in produces a new one, logging
//! out tears it down explicitly. The HTTP exchange sits behind
//! [`AuthTransport`] so the flow runs the same against the browser fetch
//! API and against a test double.

use std::future::Future;

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::models::{Branch, User};

/// Body of the login request: `{email, password, branchId}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub branch_id: String,
}

impl Credentials {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        branch_id: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            branch_id: branch_id.into(),
        }
    }
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Sends login requests to the authentication backend.
pub trait AuthTransport {
    /// POST the credentials. Any non-2xx answer must map to an error.
    fn send_login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResponse, AuthError>>;
}

/// Current identity and active branch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
    branch: Option<Branch>,
}

impl Session {
    /// Unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for `user` with the branch matching `branch_id` active.
    ///
    /// A `branch_id` the user does not belong to still authenticates, with
    /// no active branch.
    pub fn established(user: User, branch_id: &str) -> Self {
        let branch = user.find_branch(branch_id).cloned();
        if branch.is_none() {
            warn!(
                "session: branch {} not found for user {}, no active branch",
                branch_id, user.id
            );
        }
        Self {
            user: Some(user),
            branch,
        }
    }

    /// Authenticate against `transport` and build the resulting session.
    pub async fn login<A: AuthTransport>(
        transport: &A,
        credentials: &Credentials,
    ) -> Result<Self, AuthError> {
        match transport.send_login(credentials).await {
            Ok(response) => {
                info!("session: {} logged in", response.user.email);
                Ok(Self::established(response.user, &credentials.branch_id))
            }
            Err(e) => {
                error!("Login error: {}", e);
                Err(e)
            }
        }
    }

    /// Clear identity and branch unconditionally.
    pub fn logout(&mut self) {
        self.user = None;
        self.branch = None;
    }

    /// Switch the active branch. Membership is not checked.
    pub fn set_branch(&mut self, branch: Branch) {
        self.branch = Some(branch);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    /// Branches the user can switch to.
    pub fn branches(&self) -> &[Branch] {
        self.user
            .as_ref()
            .map(|u| u.branches.as_slice())
            .unwrap_or_default()
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockAuthTransport;
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            username: "johndoe".to_string(),
            avatar: None,
            branches: vec![Branch::new("1", "Main Branch"), Branch::new("2", "Norte")],
            roles: Vec::new(),
        }
    }

    #[test]
    fn test_credentials_wire_shape() {
        let json = serde_json::to_value(Credentials::new("a@b.c", "pw", "2")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.c", "password": "pw", "branchId": "2"})
        );
    }

    #[test]
    fn test_anonymous() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.branch().is_none());
        assert!(session.branches().is_empty());
    }

    #[tokio::test]
    async fn test_login_resolves_branch() {
        let transport = MockAuthTransport::accepting(user());
        let creds = Credentials::new("john@example.com", "secret", "2");
        let session = Session::login(&transport, &creds).await.unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.branch(), Some(&Branch::new("2", "Norte")));
        assert_eq!(transport.requests.borrow().as_slice(), &[creds]);
    }

    #[tokio::test]
    async fn test_login_with_unknown_branch_has_no_active_branch() {
        let transport = MockAuthTransport::accepting(user());
        let creds = Credentials::new("john@example.com", "secret", "99");
        let session = Session::login(&transport, &creds).await.unwrap();

        assert!(session.is_authenticated());
        assert!(session.branch().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_is_returned() {
        let transport = MockAuthTransport::failing(AuthError::Rejected { status: 401 });
        let creds = Credentials::new("john@example.com", "wrong", "1");
        let result = Session::login(&transport, &creds).await;
        assert_eq!(result, Err(AuthError::Rejected { status: 401 }));
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = Session::established(user(), "1");
        session.logout();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_set_branch_is_unvalidated() {
        let mut session = Session::established(user(), "1");
        session.set_branch(Branch::new("42", "Elsewhere"));
        assert_eq!(session.branch().map(|b| b.id.as_str()), Some("42"));
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let session = Session::established(user(), "1");
        let json = serde_json::to_string(&session).unwrap();
        let restored: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }
}
