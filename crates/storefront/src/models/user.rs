//! User domain type.

use serde::{Deserialize, Serialize};

use tahaqiq_core::{AuthStatus, Email, Role, UserId};

/// The user of the current session.
///
/// Created wholesale by the auth store on login or sign-up and dropped on
/// logout. There is no credential data: authentication is a mock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Generated when the session was created.
    pub id: UserId,
    pub email: Email,
    /// Only set for users who signed up.
    pub name: Option<String>,
    pub role: Role,
}

impl User {
    /// Name used in greetings: the user's name if known, else the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.email.as_str())
    }

    /// Session status this user grants.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.role.into()
    }
}
