//! What the logged-in user may see, and leaving the session.

use dt_auth::{DecodedToken, SessionContext, has_permission};
use dt_core::{Permission, Principal};
use dt_format::to_html;
use serde::Serialize;

use crate::error::DashboardError;

/// Region visibility derived from the token's permissions.
///
/// Each flag is evaluated on its own; no rule depends on another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct UiVisibility {
    /// Main content container.
    pub content: bool,
    /// Administration entry in the sidebar.
    pub admin_sidebar: bool,
    pub access_management: bool,
    pub system_configuration: bool,
    /// Portfolio-management buttons shown and enabled, metric refresh shown.
    pub portfolio_management: bool,
    /// Vulnerability-analysis tabs.
    pub vulnerability_analysis: bool,
    /// Logout control; hidden when no token is stored in the session.
    pub logout: bool,
}

impl UiVisibility {
    /// Evaluate the permission rules. `token == None` shows nothing.
    #[must_use]
    pub fn from_token(token: Option<&DecodedToken>) -> Self {
        let has = |permission| has_permission(permission, token);
        Self {
            content: has(Permission::ViewPortfolio),
            admin_sidebar: has(Permission::AccessManagement)
                || has(Permission::SystemConfiguration),
            access_management: has(Permission::AccessManagement),
            system_configuration: has(Permission::SystemConfiguration),
            portfolio_management: has(Permission::PortfolioManagement),
            vulnerability_analysis: has(Permission::VulnerabilityAnalysis),
            logout: true,
        }
    }

    /// Visibility for the current session state.
    #[must_use]
    pub fn for_session(ctx: &SessionContext) -> Self {
        Self {
            logout: ctx.has_stored_token(),
            ..Self::from_token(ctx.decoded_token().as_ref())
        }
    }
}

/// The profile form as populated from the server.
///
/// Text fields are HTML-escaped; password fields always start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileForm {
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl From<&Principal> for ProfileForm {
    fn from(principal: &Principal) -> Self {
        Self {
            username: to_html(&principal.username),
            fullname: to_html(principal.fullname.as_deref().unwrap_or_default()),
            email: to_html(principal.email.as_deref().unwrap_or_default()),
            new_password: String::new(),
            confirm_password: String::new(),
        }
    }
}

/// End the session: broadcast the invalidation on the shared store and drop
/// the token. The next bootstrap asks for a login.
///
/// # Errors
///
/// Returns [`DashboardError::Session`] if the stores cannot be written.
pub fn logout(ctx: &mut SessionContext) -> Result<(), DashboardError> {
    ctx.logout()?;
    tracing::info!("logged out");
    Ok(())
}
