//! Auth Session
//!
//! Read-only view of who is signed in. Passed explicitly into the
//! storefront operations that need it; never read from global state.

use serde::{Deserialize, Serialize};

use crate::client::LoginResponse;

/// Authenticated (or anonymous) browsing session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub is_authenticated: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    /// Bearer token issued at login
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl AuthSession {
    /// Session for a visitor who has not signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: i64) -> Self {
        Self {
            is_authenticated: true,
            user_id: Some(user_id),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Customer id usable for an order, if signed in
    pub fn customer_id(&self) -> Option<i64> {
        if self.is_authenticated { self.user_id } else { None }
    }
}

impl From<&LoginResponse> for AuthSession {
    fn from(login: &LoginResponse) -> Self {
        Self::authenticated(login.user_info.user_id).with_token(login.token.clone())
    }
}
