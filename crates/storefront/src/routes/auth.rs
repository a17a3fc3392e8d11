//! Login and sign-up screens.
//!
//! Authentication is mocked: the login form only asks for an email and which
//! kind of account to sign in as.

use askama::Template;

use tahaqiq_core::Role;

use crate::error::Result;

use super::{LocalState, RenderContext, Screen, ScreenKind};

/// State of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    role: Role,
    email: String,
    error: Option<String>,
}

impl LoginForm {
    /// Which kind of account the form signs in as.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Email from the last rejected submission.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch between customer and admin login.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.error = None;
    }

    /// Keep the rejected input and show `message` next to it.
    pub fn reject(&mut self, email: &str, message: String) {
        self.email = email.to_string();
        self.error = Some(message);
    }
}

/// Login page template.
#[derive(Template)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub admin: bool,
    pub email: String,
    pub error: Option<String>,
    /// Set when the login screen stands in for a guarded screen.
    pub notice: Option<String>,
}

/// Sign-up page template.
#[derive(Template)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate;

/// Render the login screen.
///
/// Also used in place of the admin dashboard for non-admin sessions.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn login(ctx: &RenderContext<'_>) -> Result<Screen> {
    let fallback = LoginForm::default();
    let form = match ctx.local {
        LocalState::Login(form) => form,
        _ => &fallback,
    };

    let notice = matches!(ctx.view, crate::router::View::Admin)
        .then(|| "Sign in with an admin account to view the dashboard.".to_string());

    let html = LoginTemplate {
        admin: form.role() == Role::Admin,
        email: form.email().to_string(),
        error: form.error().map(str::to_string),
        notice,
    }
    .render()?;

    Ok(Screen {
        kind: ScreenKind::Login,
        title: "Sign In".to_string(),
        html,
    })
}

/// Render the sign-up screen.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn signup() -> Result<Screen> {
    Ok(Screen {
        kind: ScreenKind::Signup,
        title: "Create Account".to_string(),
        html: SignupTemplate.render()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_defaults_to_customer() {
        let form = LoginForm::default();
        assert_eq!(form.role(), Role::Customer);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_switching_role_clears_error() {
        let mut form = LoginForm::default();
        form.reject("nope", "Please enter a valid email address.".to_string());
        assert_eq!(form.email(), "nope");
        assert!(form.error().is_some());

        form.set_role(Role::Admin);
        assert_eq!(form.role(), Role::Admin);
        assert_eq!(form.error(), None);
    }
}
