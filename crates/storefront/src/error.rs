//! Unified error handling.
//!
//! Store mutations and navigation cannot fail. Errors only arise at the edges:
//! parsing form input, loading the catalog or configuration, and rendering
//! templates.

use thiserror::Error;

use tahaqiq_core::EmailError;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Email entered on a form is malformed.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    /// Message safe to show next to the form that caused it.
    ///
    /// Only input errors are user-facing; everything else is an operator
    /// problem and gets a generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail(err) => format!("Please enter a valid email address ({err})."),
            Self::Catalog(_) | Self::Config(_) | Self::Render(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(EmailError::MissingAtSymbol);
        assert_eq!(err.to_string(), "Invalid email: email must contain an @ symbol");

        let err = AppError::from(ConfigError::InvalidEnvVar(
            "STOREFRONT_SEARCH_LIMIT".to_string(),
            "invalid digit".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable STOREFRONT_SEARCH_LIMIT: invalid digit"
        );
    }

    #[test]
    fn test_only_input_errors_reach_the_user() {
        let err = AppError::from(EmailError::Empty);
        assert!(err.user_message().contains("valid email"));

        let err = AppError::from(CatalogError::DuplicateProduct(tahaqiq_core::ProductId::new(1)));
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }
}
