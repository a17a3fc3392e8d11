//! Role and session status enums.

use serde::{Deserialize, Serialize};

/// Role granted to a logged-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Store administrator with access to the admin dashboard.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Authentication status of the current session.
///
/// A guest has no user; the other two mirror the logged-in user's [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    #[default]
    Guest,
    Customer,
    Admin,
}

impl AuthStatus {
    /// Whether a user is logged in.
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        !matches!(self, Self::Guest)
    }

    /// Lowercase name used in logs and templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }
}

impl From<Role> for AuthStatus {
    fn from(role: Role) -> Self {
        match role {
            Role::Customer => Self::Customer,
            Role::Admin => Self::Admin,
        }
    }
}

impl std::fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parses_login_type() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_status_follows_role() {
        assert_eq!(AuthStatus::from(Role::Admin), AuthStatus::Admin);
        assert_eq!(AuthStatus::from(Role::Customer), AuthStatus::Customer);
        assert!(!AuthStatus::default().is_authenticated());
        assert_eq!(AuthStatus::Guest.to_string(), "guest");
    }
}
