use crate::router::{Guard, GuardDecision};

/// Browser storage key holding the session token.
pub const SESSION_STORAGE_KEY: &str = "aras_session";

/// The visitor's session as far as navigation is concerned: a token or none.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Builds a session from a stored token; blank tokens count as absent.
    pub fn from_token(token: Option<String>) -> Self {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Self { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Lets authenticated sessions through and sends everyone else to `fallback`.
#[derive(Debug, Clone)]
pub struct AuthGuard {
    fallback: String,
}

impl AuthGuard {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }
}

impl Default for AuthGuard {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Guard for AuthGuard {
    fn can_activate(&self, session: &Session) -> GuardDecision {
        if session.is_authenticated() {
            GuardDecision::Allow
        } else {
            GuardDecision::Deny {
                redirect_to: self.fallback.clone(),
            }
        }
    }

    fn redirect_path(&self) -> &str {
        &self.fallback
    }
}
