//! Account page.
//!
//! Requires a session; guests get a prompt to log in instead.

use std::fmt;

use askama::Template;

use crate::error::Result;

use super::{LocalState, RenderContext, Screen, ScreenKind};

/// Tabs of the account page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccountTab {
    #[default]
    Orders,
    Addresses,
    Profile,
}

impl AccountTab {
    pub const ALL: [Self; 3] = [Self::Orders, Self::Addresses, Self::Profile];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Orders => "Order History",
            Self::Addresses => "Manage Addresses",
            Self::Profile => "Profile Settings",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Addresses => "addresses",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for AccountTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User display data for templates.
#[derive(Clone)]
pub struct UserView {
    pub email: String,
    pub name: Option<String>,
    pub greeting: String,
}

/// Tab link display data.
pub struct TabView {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Account page template.
#[derive(Template)]
#[template(path = "account/index.html")]
pub struct AccountIndexTemplate {
    pub user: Option<UserView>,
    pub tabs: Vec<TabView>,
    pub active: AccountTab,
}

/// Render the account page for the current session.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render(ctx: &RenderContext<'_>) -> Result<Screen> {
    let active = match ctx.local {
        LocalState::Account(tab) => *tab,
        _ => AccountTab::default(),
    };

    let user = ctx.auth.current_user().map(|user| UserView {
        email: user.email.to_string(),
        name: user.name.clone(),
        greeting: user.display_name().to_string(),
    });
    if user.is_none() {
        tracing::debug!("Account page requested without a session");
    }

    let html = AccountIndexTemplate {
        user,
        tabs: AccountTab::ALL
            .into_iter()
            .map(|tab| TabView {
                id: tab.as_str(),
                label: tab.label(),
                active: tab == active,
            })
            .collect(),
        active,
    }
    .render()?;

    Ok(Screen {
        kind: ScreenKind::Account,
        title: "My Account".to_string(),
        html,
    })
}
