//! Session store.
//!
//! Authentication is a mock: any requested role is granted without
//! credentials. Replace this store wholesale before pointing the storefront
//! at real customers.

use tracing::instrument;

use tahaqiq_core::{AuthStatus, Email, Role, UserId};

use super::observer::{SubscriptionId, Subscribers};
use crate::models::User;

/// Emitted whenever the session is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionChange {
    pub status: AuthStatus,
}

/// The single session of this client.
///
/// Status is derived from the user's role, so a guest never has a user and a
/// logged-in status never lacks one.
#[derive(Debug, Default)]
pub struct AuthStore {
    user: Option<User>,
    subscribers: Subscribers<SessionChange>,
}

impl AuthStore {
    /// A guest session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the session with a user of the requested role.
    #[instrument(skip(self, email), fields(email = %email))]
    pub fn login(&mut self, email: Email, role: Role) -> &User {
        self.replace(User {
            id: UserId::generate(),
            email,
            name: None,
            role,
        })
    }

    /// Replace the session with a newly registered customer.
    #[instrument(skip(self, email, name), fields(email = %email))]
    pub fn sign_up(&mut self, email: Email, name: impl Into<String>) -> &User {
        self.replace(User {
            id: UserId::generate(),
            email,
            name: Some(name.into()),
            role: Role::Customer,
        })
    }

    /// Return to a guest session.
    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if self.user.take().is_none() {
            return;
        }
        tracing::info!("Logged out");
        self.subscribers.notify(&SessionChange {
            status: AuthStatus::Guest,
        });
    }

    /// Status of the current session.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.user.as_ref().map_or(AuthStatus::Guest, User::status)
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether the session grants admin access.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.status() == AuthStatus::Admin
    }

    /// Register for session changes.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SessionChange) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Stop receiving session changes.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn replace(&mut self, user: User) -> &User {
        let status = user.status();
        tracing::info!(user_id = %user.id, %status, "Session started");
        let user = self.user.insert(user);
        self.subscribers.notify(&SessionChange { status });
        user
    }
}
