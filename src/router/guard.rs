use crate::services::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Navigation refused; the router redirects to `redirect_to`.
    Deny { redirect_to: String },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Consulted before entering a protected branch.
pub trait Guard: Send + Sync {
    fn can_activate(&self, session: &Session) -> GuardDecision;

    /// Where denied navigations land.
    fn redirect_path(&self) -> &str;

    /// Route condition: `Some(true)` lets the branch render, `Some(false)`
    /// redirects to [`Guard::redirect_path`].
    fn condition(&self, session: &Session) -> Option<bool> {
        let decision = self.can_activate(session);
        if let GuardDecision::Deny { redirect_to } = &decision {
            tracing::info!(%redirect_to, "navigation denied");
        }
        Some(decision.is_allowed())
    }
}

/// Adapts a plain boolean predicate into a [`Guard`].
pub struct PredicateGuard<F> {
    predicate: F,
    redirect_to: String,
}

impl<F> PredicateGuard<F>
where
    F: Fn(&Session) -> bool + Send + Sync,
{
    pub fn new(predicate: F, redirect_to: impl Into<String>) -> Self {
        Self {
            predicate,
            redirect_to: redirect_to.into(),
        }
    }
}

impl<F> Guard for PredicateGuard<F>
where
    F: Fn(&Session) -> bool + Send + Sync,
{
    fn can_activate(&self, session: &Session) -> GuardDecision {
        if (self.predicate)(session) {
            GuardDecision::Allow
        } else {
            GuardDecision::Deny {
                redirect_to: self.redirect_to.clone(),
            }
        }
    }

    fn redirect_path(&self) -> &str {
        &self.redirect_to
    }
}
